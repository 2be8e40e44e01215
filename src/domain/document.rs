//! Navigation helpers for Swagger 2.0 / OpenAPI 3 documents.

use serde_json::Value;
use std::borrow::Cow;

use super::declared_type;
use crate::error::{Result, SchemockError};

/// Keys of a path item that hold operations.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentVersion {
    Swagger2,
    OpenApi3,
}

impl DocumentVersion {
    /// `openapi` with a major version of 3 or more is OpenAPI 3. Swagger 1.x
    /// resource listings are rejected; anything else is read as Swagger 2.0.
    pub fn detect(document: &Value) -> Result<Self> {
        if !document.is_object() {
            return Err(SchemockError::InvalidDocument(
                "document root must be an object".to_string(),
            ));
        }

        if let Some(openapi) = document.get("openapi") {
            // Unquoted YAML `openapi: 3.0` arrives as a number
            let major = match openapi {
                Value::String(version) => version
                    .split('.')
                    .next()
                    .and_then(|m| m.trim().parse::<u64>().ok()),
                Value::Number(version) => version.as_f64().map(|v| v.trunc() as u64),
                _ => None,
            };
            match major {
                Some(major) if major >= 3 => return Ok(Self::OpenApi3),
                Some(_) => {}
                None => {
                    return Err(SchemockError::InvalidDocument(format!(
                        "unreadable openapi version {}",
                        openapi
                    )))
                }
            }
        }

        if let Some(version) = document.get("swaggerVersion") {
            let version = version
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| version.to_string());
            return Err(SchemockError::UnsupportedVersion(format!("Swagger {}", version)));
        }

        Ok(Self::Swagger2)
    }
}

/// Extracts the schema to sample from a response, parameter or media type
/// object: its `schema` child when there is one, the object itself
/// otherwise. A schema with `properties` but no `type` comes back typed as
/// `object`.
pub fn infer_schema(thing: &Value) -> Option<Cow<'_, Value>> {
    let schema = match thing.get("schema") {
        Some(schema) if !schema.is_null() => schema,
        _ => thing,
    };
    let map = schema.as_object()?;

    if map.contains_key("properties") && declared_type(map).is_none() {
        let mut typed = map.clone();
        typed.insert("type".to_string(), Value::String("object".to_string()));
        return Some(Cow::Owned(Value::Object(typed)));
    }

    Some(Cow::Borrowed(schema))
}
