use crate::adapters::placeholder::PlaceholderExpander;
use crate::adapters::render::render;
use crate::adapters::sample_cache::SampleCache;
use crate::domain::objectify::normalize_array;
use crate::domain::primitives;
use crate::domain::{Sample, SchemaKind, SchemaSource};
use crate::error::Result;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Number of synthetic entries added for a schema-valued `additionalProperties`.
const ADDITIONAL_PROPERTY_SAMPLES: usize = 3;

/// Builds a sample value for `schema`.
///
/// Recursion has no depth guard: `schema` must be acyclic, which holds for
/// anything that went through [`RefResolver`](crate::adapters::ref_resolver::RefResolver).
pub fn synthesize<S: SchemaSource + ?Sized>(schema: &S) -> Sample {
    let schema = schema.objectify();

    match SchemaKind::classify(&schema) {
        SchemaKind::Example(example) => Some(example.clone()),
        SchemaKind::Object => Some(synthesize_object(&schema)),
        SchemaKind::Array => Some(synthesize_array(&schema)),
        SchemaKind::Enum => synthesize_enum(&schema),
        SchemaKind::File | SchemaKind::Unclassified => None,
        SchemaKind::Primitive(schema_type) => Some(synthesize_primitive(&schema, schema_type)),
    }
}

fn synthesize_object(schema: &Map<String, Value>) -> Value {
    let properties = schema.get("properties");
    let properties = properties.objectify();
    let mut sample = Map::new();

    for (name, property) in properties.iter() {
        sample.insert(name.clone(), synthesize(property).unwrap_or(Value::Null));
    }

    match schema.get("additionalProperties") {
        Some(Value::Bool(true)) => {
            sample.insert("additionalProp1".to_string(), Value::Object(Map::new()));
        }
        None | Some(Value::Null) | Some(Value::Bool(false)) => {}
        Some(additional) => {
            // One sample shared by every synthetic key.
            let value = synthesize(additional).unwrap_or(Value::Null);
            for i in 1..=ADDITIONAL_PROPERTY_SAMPLES {
                sample.insert(format!("additionalProp{}", i), value.clone());
            }
        }
    }

    Value::Object(sample)
}

fn synthesize_array(schema: &Map<String, Value>) -> Value {
    let item = synthesize(&schema.get("items")).unwrap_or(Value::Null);
    Value::Array(vec![item])
}

fn synthesize_enum(schema: &Map<String, Value>) -> Sample {
    if let Some(default) = schema.get("default").filter(|d| !d.is_null()) {
        return Some(default.clone());
    }

    schema
        .get("enum")
        .and_then(|values| normalize_array(values).first().map(|first| (*first).clone()))
}

fn synthesize_primitive(schema: &Map<String, Value>, schema_type: &str) -> Value {
    let format = schema.get("format").and_then(Value::as_str);

    match primitives::primitive_value(schema_type, format) {
        Some(token) => Value::String(token.to_string()),
        None => Value::String(primitives::unknown_type(schema_type)),
    }
}

/// Synthesizer with a per-run cache, composing normalize, synthesize and
/// serialize.
///
/// One generator is meant to live for one document run; its cache is
/// dropped with it.
#[derive(Default)]
pub struct SampleGenerator {
    cache: SampleCache,
    expander: Option<PlaceholderExpander>,
}

impl SampleGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace placeholder tokens with generated values when rendering.
    /// The cached samples keep their tokens.
    pub fn with_placeholder_expansion(mut self) -> Self {
        self.expander = Some(PlaceholderExpander::new());
        self
    }

    /// Cached synthesis. Structurally equal schemas share one `Arc`.
    pub fn sample<S: SchemaSource + ?Sized>(&self, schema: &S) -> Arc<Sample> {
        let schema = schema.objectify();
        self.cache.get_or_insert_with(&schema, || synthesize(&*schema))
    }

    /// Sample rendered as indented JSON, `None` when the schema has no sample.
    pub fn sample_json<S: SchemaSource + ?Sized>(&self, schema: &S) -> Result<Option<String>> {
        let sample = self.sample(schema);

        match &self.expander {
            Some(expander) => {
                let expanded = (*sample).as_ref().map(|value| expander.expand(value));
                render(&expanded)
            }
            None => render(&sample),
        }
    }

    pub fn cache(&self) -> &SampleCache {
        &self.cache
    }
}

/// Sample JSON for a single schema, using a throwaway cache.
pub fn get_sample_json<S: SchemaSource + ?Sized>(schema: &S) -> Result<Option<String>> {
    SampleGenerator::new().sample_json(schema)
}
