//! # piped-resolver
//!
//! Resilient multi-mirror audio stream resolver for Piped-style APIs.
//!
//! Given an opaque video id, [`StreamResolver::resolve`] queries a prioritized
//! list of API mirrors, parses each mirror's stream manifest and returns the
//! best-bitrate mp4/m4a audio stream URL. Mirrors are probed sequentially
//! with a short per-request timeout; one mirror's failure never aborts the
//! lookup. A mirror that serves a stream is promoted to the front of the
//! [`MirrorRegistry`] so the next lookup tries it first.
//!
//! ## Example
//!
//! ```no_run
//! use piped_resolver::{ResolverConfig, StreamResolver};
//!
//! # async fn run() -> Result<(), piped_resolver::ResolverError> {
//! let resolver = StreamResolver::new(ResolverConfig::default());
//! let stream = resolver.resolve("dQw4w9WgXcQ").await?;
//! println!("{} ({} bps)", stream.url, stream.bitrate);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod directory;
pub mod error;
pub mod http;
pub mod models;
pub mod registry;
pub mod resolver;

pub use builder::ResolverConfigBuilder;
pub use config::{DEFAULT_INSTANCES_URL, FALLBACK_MIRRORS, ResolverConfig};
pub use directory::{DirectoryProvider, HttpDirectory, StaticMirrors};
pub use error::{DirectoryError, MirrorError, ResolverError};
pub use models::{AudioStream, StreamsResponse, select_best_audio};
pub use registry::MirrorRegistry;
pub use resolver::{ResolvedStream, StreamResolver};
