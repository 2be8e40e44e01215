use serde_json::{Map, Value};

pub mod document;
pub mod objectify;
pub mod primitives;

pub use objectify::SchemaSource;

/// Result of synthesizing one schema node. `None` means the schema could
/// not be classified and there is no sample for it.
pub type Sample = Option<Value>;

/// Shape of a schema node, decided once per node before synthesis.
///
/// Predicates are checked in a fixed order: an explicit `example` wins,
/// then the effective type picks `Object` or `Array`, then a present `enum`,
/// then the `file` type, and everything else is a primitive leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaKind<'a> {
    Example(&'a Value),
    Object,
    Array,
    Enum,
    File,
    Primitive(&'a str),
    Unclassified,
}

impl<'a> SchemaKind<'a> {
    pub fn classify(schema: &'a Map<String, Value>) -> Self {
        if let Some(example) = schema.get("example") {
            return Self::Example(example);
        }

        let schema_type = match declared_type(schema) {
            Some(schema_type) => schema_type,
            None if is_present(schema, "properties") => "object",
            None if is_present(schema, "items") => "array",
            None => return Self::Unclassified,
        };

        match schema_type {
            "object" => Self::Object,
            "array" => Self::Array,
            _ if is_present(schema, "enum") => Self::Enum,
            "file" => Self::File,
            other => Self::Primitive(other),
        }
    }
}

/// The declared `type` of a schema. A type list (`["string", "null"]`)
/// yields its first non-null entry; an empty string counts as undeclared.
pub fn declared_type(schema: &Map<String, Value>) -> Option<&str> {
    match schema.get("type")? {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|t| !t.is_empty() && *t != "null"),
        _ => None,
    }
}

pub(crate) fn is_present(schema: &Map<String, Value>, key: &str) -> bool {
    schema.get(key).is_some_and(|value| !value.is_null())
}
