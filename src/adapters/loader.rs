//! Loading API descriptions from URLs and local files.

use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::FetchSettings;
use crate::domain::objectify::yaml_to_json;
use crate::error::{Result, SchemockError};

/// Where document text comes from
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String>;
}

pub struct FileSource;

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|source| SchemockError::Io {
                path: location.to_string(),
                source,
            })
    }
}

/// HTTP(S) source. Transport errors, 5xx and 429 are retried with
/// exponential backoff; other statuses fail immediately.
pub struct HttpSource {
    client: reqwest::Client,
    retry_max_elapsed: Duration,
}

impl HttpSource {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|source| SchemockError::Fetch {
                url: String::new(),
                source,
            })?;

        Ok(Self {
            client,
            retry_max_elapsed: Duration::from_secs(settings.retry_max_elapsed_seconds),
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SchemockError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SchemockError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| SchemockError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        let policy = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(self.retry_max_elapsed))
            .build();

        backoff::future::retry(policy, || async {
            self.fetch_once(location).await.map_err(|err| {
                if err.is_transient() {
                    warn!("Retrying {}: {}", location, err);
                    backoff::Error::transient(err)
                } else {
                    backoff::Error::permanent(err)
                }
            })
        })
        .await
    }
}

pub struct DocumentLoader {
    http: HttpSource,
    file: FileSource,
}

impl DocumentLoader {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        Ok(Self {
            http: HttpSource::new(settings)?,
            file: FileSource,
        })
    }

    /// Reads and parses the document at `location`.
    pub async fn load(&self, location: &str) -> Result<Value> {
        let text = if is_remote(location) {
            info!("Fetching document from {}", location);
            self.http.fetch(location).await?
        } else {
            info!("Reading document from {}", location);
            self.file.fetch(location).await?
        };
        debug!("Loaded {} bytes from {}", text.len(), location);

        parse_document(location, &text)
    }
}

pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// JSON when the text opens with `{` or `[`, YAML otherwise.
pub fn parse_document(location: &str, text: &str) -> Result<Value> {
    let body = text.trim_start_matches('\u{feff}').trim_start();

    if body.starts_with('{') || body.starts_with('[') {
        return serde_json::from_str(body).map_err(|e| SchemockError::Parse {
            location: location.to_string(),
            reason: e.to_string(),
        });
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(body).map_err(|e| SchemockError::Parse {
            location: location.to_string(),
            reason: e.to_string(),
        })?;
    Ok(yaml_to_json(yaml))
}
