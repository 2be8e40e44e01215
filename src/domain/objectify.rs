//! Normalization of schema representations into plain JSON mappings.
//!
//! Schemas reach the synthesizer in several shapes: a `serde_json::Value`
//! that may or may not be an object, a missing child (`None`), a bare
//! `Map`, or a `serde_yaml::Value` straight out of a YAML document. Every
//! one of them is turned into a `Map<String, Value>` before it is inspected.

use serde_json::{Map, Number, Value};
use std::borrow::Cow;

/// A schema in any representation the synthesizer accepts.
pub trait SchemaSource {
    /// Returns the schema as a plain mapping. Anything that is not a
    /// mapping normalizes to an empty one.
    fn objectify(&self) -> Cow<'_, Map<String, Value>>;
}

impl SchemaSource for Value {
    fn objectify(&self) -> Cow<'_, Map<String, Value>> {
        match self {
            Value::Object(map) => Cow::Borrowed(map),
            _ => Cow::Owned(Map::new()),
        }
    }
}

impl SchemaSource for Map<String, Value> {
    fn objectify(&self) -> Cow<'_, Map<String, Value>> {
        Cow::Borrowed(self)
    }
}

impl SchemaSource for serde_yaml::Value {
    fn objectify(&self) -> Cow<'_, Map<String, Value>> {
        match yaml_to_json(self.clone()) {
            Value::Object(map) => Cow::Owned(map),
            _ => Cow::Owned(Map::new()),
        }
    }
}

impl<T: SchemaSource + ?Sized> SchemaSource for &T {
    fn objectify(&self) -> Cow<'_, Map<String, Value>> {
        (**self).objectify()
    }
}

impl<T: SchemaSource> SchemaSource for Option<T> {
    fn objectify(&self) -> Cow<'_, Map<String, Value>> {
        match self {
            Some(inner) => inner.objectify(),
            None => Cow::Owned(Map::new()),
        }
    }
}

/// Turns an `enum` field of unknown container shape into an ordered list.
/// Arrays keep their order; any other value becomes a one-element list.
pub fn normalize_array(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Converts a YAML value into JSON. Mapping keys that are not strings
/// (response codes such as `200:` are parsed as integers) are stringified.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Number(n) => n.to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
