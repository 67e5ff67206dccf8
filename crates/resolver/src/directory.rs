use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{config::ResolverConfig, error::DirectoryError};

/// One entry in the instance directory document. Only `api_url` matters here;
/// everything else the document carries is ignored.
#[derive(Debug, Deserialize)]
pub struct InstanceRecord {
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Source of the dynamic mirror list.
///
/// The trait seam lets callers (and tests) swap the HTTP-backed directory for
/// a fixed list without touching the registry or the resolver.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
    async fn fetch_mirrors(&self) -> Result<Vec<String>, DirectoryError>;
}

/// Fetches the instance directory over HTTP with a bounded timeout.
pub struct HttpDirectory {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpDirectory {
    pub fn new(client: Client, config: &ResolverConfig) -> Self {
        Self {
            client,
            url: config.instances_url.clone(),
            timeout: config.directory_timeout,
        }
    }
}

#[async_trait]
impl DirectoryProvider for HttpDirectory {
    async fn fetch_mirrors(&self) -> Result<Vec<String>, DirectoryError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::BadStatus(status));
        }

        let body = response.text().await?;
        let records: Vec<InstanceRecord> = serde_json::from_str(&body)?;

        // Document order is preserved; entries without a parseable api_url
        // are skipped.
        let mirrors: Vec<String> = records
            .into_iter()
            .filter_map(|record| record.api_url)
            .filter(|api_url| Url::parse(api_url).is_ok())
            .collect();

        debug!(count = mirrors.len(), "fetched mirror directory");
        Ok(mirrors)
    }
}

/// A fixed mirror list standing in for the directory. Useful for callers that
/// manage their own instance list and want no directory fetch at all.
pub struct StaticMirrors(pub Vec<String>);

#[async_trait]
impl DirectoryProvider for StaticMirrors {
    async fn fetch_mirrors(&self) -> Result<Vec<String>, DirectoryError> {
        Ok(self.0.clone())
    }
}
