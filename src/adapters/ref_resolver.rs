//! Inlining of local `$ref` pointers.
//!
//! The synthesizer never follows references, so every schema taken from a
//! document goes through [`RefResolver::resolve`] first. The result is
//! always acyclic: a reference that points back into its own resolution
//! chain is cut and replaced by an empty schema.

use serde_json::{Map, Value};
use tracing::{debug, warn};

pub struct RefResolver {
    root: Value,
}

impl RefResolver {
    /// Snapshots `document`; later edits to it are not seen by the resolver.
    pub fn new(document: &Value) -> Self {
        Self {
            root: document.clone(),
        }
    }

    /// Deep copy of `value` with local references replaced by their targets.
    ///
    /// Keys next to a `$ref` are dropped. External references and local
    /// ones that point nowhere are kept as they are.
    pub fn resolve(&self, value: &Value) -> Value {
        let mut chain = Vec::new();
        self.resolve_in(value, &mut chain)
    }

    fn resolve_in(&self, value: &Value, chain: &mut Vec<String>) -> Value {
        match value {
            Value::Object(map) => {
                if let Some(Value::String(reference)) = map.get("$ref") {
                    return self.follow(value, reference, chain);
                }

                let resolved: Map<String, Value> = map
                    .iter()
                    .map(|(key, val)| (key.clone(), self.resolve_in(val, chain)))
                    .collect();
                Value::Object(resolved)
            }
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.resolve_in(item, chain)).collect())
            }
            other => other.clone(),
        }
    }

    fn follow(&self, value: &Value, reference: &str, chain: &mut Vec<String>) -> Value {
        let Some(pointer) = local_pointer(reference) else {
            warn!("External reference left unresolved: {}", reference);
            return value.clone();
        };

        if chain.contains(&pointer) {
            debug!("Circular reference {} cut after {} hops", reference, chain.len());
            return Value::Object(Map::new());
        }

        match self.root.pointer(&pointer) {
            Some(target) => {
                chain.push(pointer);
                let resolved = self.resolve_in(target, chain);
                chain.pop();
                resolved
            }
            None => {
                warn!("Reference {} does not point into the document", reference);
                value.clone()
            }
        }
    }
}

/// JSON pointer for a document-local reference. `#/definitions/Pet` is used
/// after percent-decoding; a bare Swagger 2.0 name like `Pet` means
/// `#/definitions/Pet`.
fn local_pointer(reference: &str) -> Option<String> {
    if let Some(fragment) = reference.strip_prefix('#') {
        // URI fragments are percent-encoded; the pointer itself is not
        let pointer = urlencoding::decode(fragment)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| fragment.to_string());
        return Some(pointer);
    }

    let bare_name = !reference.is_empty()
        && !reference.contains(['/', '.', ':', '#']);
    if bare_name {
        let escaped = reference.replace('~', "~0");
        return Some(format!("/definitions/{}", escaped));
    }

    None
}
