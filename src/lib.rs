//! # Schemock - example values for OpenAPI/Swagger schemas
//!
//! Schemock walks a JSON Schema (as found in Swagger 2.0 and OpenAPI 3
//! documents) and builds a representative example value from it. Leaf values
//! are placeholder tokens such as `@string` or `@integer(10, 100)` which a
//! mock data engine expands later, or which [`PlaceholderExpander`] expands
//! in-process.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     }
//! });
//!
//! let sample = schemock::get_sample_json(&schema).unwrap().unwrap();
//! assert!(sample.contains("\"age\": \"@integer(10, 100)\""));
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: schema classification, the placeholder table, document helpers
//! - **Adapters**: synthesizer, sample cache, `$ref` resolver, annotator, loader
//! - **Config**: layered settings (file, `SCHEMOCK_*` env, CLI)

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use adapters::annotator::{AnnotationReport, Annotator, AnnotatorOptions};
pub use adapters::loader::DocumentLoader;
pub use adapters::placeholder::PlaceholderExpander;
pub use adapters::ref_resolver::RefResolver;
pub use adapters::synthesizer::{get_sample_json, synthesize, SampleGenerator};
pub use domain::{Sample, SchemaSource};
pub use error::{Result, SchemockError};
