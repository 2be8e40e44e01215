//! Placeholder values for leaf schema types.
//!
//! Tokens start with [`PLACEHOLDER_SENTINEL`] and are meant to be replaced by
//! a generated value at presentation time (see
//! [`PlaceholderExpander`](crate::adapters::placeholder::PlaceholderExpander)).

/// Marks a string as a placeholder token rather than a literal value.
pub const PLACEHOLDER_SENTINEL: char = '@';

/// Looks up a single table key. Keys are either a bare type (`string`), a
/// compound `type_format` key (`string_date-time`) or a semantic model name
/// (`Avatar`, `Email`).
pub fn lookup(key: &str) -> Option<&'static str> {
    let value = match key {
        "string" => "@string",
        "string_email" => "@email",
        "string_date-time" => "@datetime",
        "string_date" => "@date",
        "number" => "@integer(60, 100)",
        "number_float" => "@float(60, 100, 3, 5)",
        "integer" => "@integer(10, 100)",
        "boolean" => "@boolean",

        "Avatar" => r##"@image("200x200", "#50B347", "#FFF", "Avatar")"##,
        "Email" => "@email",
        "Description" => "@paragraph",
        "Title" => "@Title",
        "Url" => "@url",
        "Message" => "@sentence",
        "Id" => "@id",
        _ => return None,
    };
    Some(value)
}

/// Compound `type_format` key first, then the bare type.
pub fn primitive_value(schema_type: &str, format: Option<&str>) -> Option<&'static str> {
    format
        .and_then(|format| lookup(&format!("{}_{}", schema_type, format)))
        .or_else(|| lookup(schema_type))
}

/// Text used when neither key matches.
pub fn unknown_type(schema_type: &str) -> String {
    format!("Unknown Type: {}", schema_type)
}
