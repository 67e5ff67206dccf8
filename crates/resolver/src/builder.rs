//! Builder for [`ResolverConfig`] with a fluent API.
//!
//! ```
//! use std::time::Duration;
//! use piped_resolver::ResolverConfig;
//!
//! let config = ResolverConfig::builder()
//!     .with_request_timeout(Duration::from_secs(3))
//!     .with_directory_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-player/1.0")
//!     .build();
//! ```

use std::time::Duration;

use crate::config::ResolverConfig;

/// Builder for creating [`ResolverConfig`] instances.
#[derive(Debug, Clone)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Set the instance directory URL.
    pub fn with_instances_url(mut self, url: impl Into<String>) -> Self {
        self.config.instances_url = url.into();
        self
    }

    /// Replace the static fallback mirror list.
    pub fn with_fallback_mirrors<I, S>(mut self, mirrors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.fallback_mirrors = mirrors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the timeout for the directory fetch.
    pub fn with_directory_timeout(mut self, timeout: Duration) -> Self {
        self.config.directory_timeout = timeout;
        self
    }

    /// Set the per-mirror request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
