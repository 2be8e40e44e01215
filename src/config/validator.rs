use thiserror::Error;

use crate::config::{FetchSettings, SampleSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_fetch(&settings.fetch) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_sample(&settings.sample) {
            errors.extend(e);
        }

        if let Some(path) = &settings.output.path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::MissingField("output.path".to_string()));
            } else if path.is_dir() {
                errors.push(ValidationError::InvalidValue {
                    field: "output.path".to_string(),
                    reason: format!("'{}' is a directory", path.display()),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_fetch(fetch: &FetchSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if fetch.timeout_seconds == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "fetch.timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if fetch.user_agent.trim().is_empty() {
            errors.push(ValidationError::MissingField("fetch.user_agent".to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_sample(sample: &SampleSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if sample.media_type.trim().is_empty() {
            errors.push(ValidationError::MissingField("sample.media_type".to_string()));
        } else if !sample.media_type.contains('/') {
            errors.push(ValidationError::InvalidValue {
                field: "sample.media_type".to_string(),
                reason: format!("'{}' is not a media type", sample.media_type),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
