//! # Stream Resolver
//!
//! Resolves an opaque video id to a playable audio URL by probing the mirror
//! registry in order. Mirrors are tried sequentially; every per-mirror
//! failure is swallowed and the next mirror tried, so a hung mirror costs at
//! most its own request timeout. Only total exhaustion reaches the caller.

use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::ResolverConfig,
    directory::HttpDirectory,
    error::{MirrorError, ResolverError},
    http,
    models::{StreamsResponse, select_best_audio},
    registry::MirrorRegistry,
};

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct ResolvedStream {
    /// Direct playable URL. Typically short-lived/signed upstream, so it is
    /// re-resolved on every call rather than cached.
    pub url: String,
    pub bitrate: u64,
    pub mime_type: Option<String>,
    /// Base URL of the mirror that served the stream.
    pub mirror: String,
}

/// Resolves video ids against a shared [`MirrorRegistry`].
pub struct StreamResolver {
    client: Client,
    registry: Arc<MirrorRegistry>,
    config: ResolverConfig,
}

impl StreamResolver {
    /// Resolver with an HTTP-backed directory and the config's fallback list.
    pub fn new(config: ResolverConfig) -> Self {
        let client = http::build_client(&config);
        let directory = Arc::new(HttpDirectory::new(client.clone(), &config));
        let registry = Arc::new(MirrorRegistry::new(directory, &config.fallback_mirrors));
        Self {
            client,
            registry,
            config,
        }
    }

    /// Resolver over an externally constructed registry, for callers that
    /// inject their own [`DirectoryProvider`](crate::directory::DirectoryProvider)
    /// or share one registry across resolvers.
    pub fn with_registry(config: ResolverConfig, registry: Arc<MirrorRegistry>) -> Self {
        let client = http::build_client(&config);
        Self {
            client,
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &Arc<MirrorRegistry> {
        &self.registry
    }

    /// Resolve a video id to a playable audio URL.
    ///
    /// The first mirror whose manifest contains an eligible candidate wins
    /// and is promoted to the front of the registry; no further mirrors are
    /// probed. Dropping the returned future abandons any remaining attempts.
    ///
    /// # Errors
    ///
    /// [`ResolverError::InvalidVideoId`] for an empty id,
    /// [`ResolverError::NoStreamFound`] when every mirror is exhausted. Both
    /// are expected, recoverable outcomes.
    pub async fn resolve(&self, video_id: &str) -> Result<ResolvedStream, ResolverError> {
        if video_id.is_empty() {
            return Err(ResolverError::InvalidVideoId);
        }

        self.registry.ensure_populated().await;

        for mirror in self.registry.ordered() {
            match self.probe_mirror(&mirror, video_id).await {
                Ok(resolved) => {
                    self.registry.promote(&mirror);
                    info!(
                        mirror = %mirror,
                        bitrate = resolved.bitrate,
                        "resolved audio stream"
                    );
                    return Ok(resolved);
                }
                Err(err) => {
                    debug!(mirror = %mirror, error = %err, "mirror failed, trying next");
                }
            }
        }

        Err(ResolverError::NoStreamFound)
    }

    /// Query one mirror's stream manifest and select the best audio stream.
    async fn probe_mirror(
        &self,
        mirror: &str,
        video_id: &str,
    ) -> Result<ResolvedStream, MirrorError> {
        let request_url = format!("{}/streams/{}", mirror.trim_end_matches('/'), video_id);

        let response = self
            .client
            .get(&request_url)
            .timeout(self.config.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::BadStatus(status));
        }

        let body = response.text().await?;
        let manifest: StreamsResponse = serde_json::from_str(&body)?;

        let best =
            select_best_audio(&manifest.audio_streams).ok_or(MirrorError::NoEligibleStream)?;

        Ok(ResolvedStream {
            url: best.url.clone(),
            bitrate: best.bitrate,
            mime_type: best.mime_type.clone(),
            mirror: mirror.to_owned(),
        })
    }
}
