//! Error types for loading and annotating API descriptions.
//!
//! Sample synthesis itself has no error path; these cover the collaborators
//! around it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemockError>;

#[derive(Debug, Error)]
pub enum SchemockError {
    /// Transport-level failure while fetching a remote document
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote document answered with a non-success status
    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Local document could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document body is neither valid JSON nor valid YAML
    #[error("Failed to parse document {location}: {reason}")]
    Parse { location: String, reason: String },

    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SchemockError {
    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => !source.is_builder() && !source.is_decode(),
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
