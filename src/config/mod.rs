use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::cli::{Cli, Command};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub sample: SampleSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// How remote documents are fetched
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Give up retrying transient failures after this many seconds
    #[serde(default = "default_retry_max_elapsed")]
    pub retry_max_elapsed_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            retry_max_elapsed_seconds: default_retry_max_elapsed(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SampleSettings {
    /// Media type whose schema is sampled in OpenAPI 3 responses
    #[serde(default = "default_media_type")]
    pub media_type: String,
    /// Replace placeholder tokens with generated values
    #[serde(default)]
    pub expand_placeholders: bool,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            media_type: default_media_type(),
            expand_placeholders: false,
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    /// Write here instead of stdout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

fn default_timeout() -> u64 {
    30
}

fn default_retry_max_elapsed() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("schemock/{}", env!("CARGO_PKG_VERSION"))
}

fn default_media_type() -> String {
    "application/json".to_string()
}

impl Settings {
    /// Settings from an optional config file and `SCHEMOCK_*` environment
    /// variables (`SCHEMOCK_FETCH__TIMEOUT_SECONDS=10`), env taking precedence.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validated()
    }

    /// Create settings from CLI arguments (config file, env vars, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validated()
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("SCHEMOCK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn validated(self) -> Result<Self, anyhow::Error> {
        validator::ConfigValidator::validate(&self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;
        Ok(self)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(timeout) = cli.timeout {
            self.fetch.timeout_seconds = timeout;
        }
        if let Some(expand) = cli.expand_placeholders {
            self.sample.expand_placeholders = expand;
        }

        match &cli.command {
            Command::Annotate {
                output,
                format,
                media_type,
                ..
            } => {
                if let Some(output) = output {
                    self.output.path = Some(output.clone());
                }
                if let Some(format) = format {
                    self.output.format = *format;
                }
                if let Some(media_type) = media_type {
                    self.sample.media_type = media_type.clone();
                }
            }
            // `output` configures annotated documents; samples always go to stdout
            Command::Sample { .. } => {
                self.output.path = None;
            }
        }
    }
}
