//! # Mirror Registry
//!
//! Ordered, de-duplicated list of mirror base URLs, most-likely-to-succeed
//! first. The dynamic part is lazily populated from the instance directory;
//! the static fallback list is always appended behind it. A mirror that just
//! served a stream is promoted to the front, biasing subsequent lookups
//! toward endpoints known to be currently healthy.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::directory::DirectoryProvider;

struct RegistryState {
    dynamic: Vec<String>,
    populated: bool,
}

/// Process-wide ordered mirror list shared by all resolutions.
///
/// All ordering mutations go through [`ensure_populated`](Self::ensure_populated)
/// and [`promote`](Self::promote); both hold the internal lock so concurrent
/// resolutions cannot duplicate or lose entries.
pub struct MirrorRegistry {
    state: Mutex<RegistryState>,
    fallback: Vec<String>,
    directory: Arc<dyn DirectoryProvider>,
}

/// Mirror identity is the base URL without a trailing slash.
fn normalize(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}

impl MirrorRegistry {
    pub fn new<I, S>(directory: Arc<dyn DirectoryProvider>, fallback: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: Vec<String> = Vec::new();
        for mirror in fallback {
            let mirror = normalize(mirror.as_ref());
            if !seen.contains(&mirror) {
                seen.push(mirror);
            }
        }

        Self {
            state: Mutex::new(RegistryState {
                dynamic: Vec::new(),
                populated: false,
            }),
            fallback: seen,
            directory,
        }
    }

    /// Lazily populate the dynamic mirror list from the directory.
    ///
    /// Runs at most one fetch while the list is unpopulated. A failed fetch
    /// degrades to "fallback list only" and is never reported to the caller.
    /// The fetch itself runs outside the lock.
    pub async fn ensure_populated(&self) {
        if self.state.lock().populated {
            return;
        }

        let fetched = match self.directory.fetch_mirrors().await {
            Ok(mirrors) => mirrors,
            Err(err) => {
                warn!(error = %err, "mirror directory unavailable, using fallback list only");
                Vec::new()
            }
        };

        let mut state = self.state.lock();
        if state.populated {
            // Another resolution populated the list while we were fetching.
            return;
        }
        for mirror in fetched {
            let mirror = normalize(&mirror);
            if !state.dynamic.contains(&mirror) {
                state.dynamic.push(mirror);
            }
        }
        state.populated = true;
        debug!(dynamic = state.dynamic.len(), fallback = self.fallback.len(), "mirror registry populated");
    }

    /// The full try-order: dynamic mirrors first, then the fallback list,
    /// de-duplicated with first occurrence winning.
    pub fn ordered(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut ordered: Vec<String> = Vec::with_capacity(state.dynamic.len() + self.fallback.len());
        for mirror in state.dynamic.iter().chain(self.fallback.iter()) {
            if !ordered.contains(mirror) {
                ordered.push(mirror.clone());
            }
        }
        ordered
    }

    /// Move a mirror that just served a stream to the front of the dynamic
    /// list, removing any previous occurrence. Idempotent.
    pub fn promote(&self, mirror: &str) {
        let mirror = normalize(mirror);
        let mut state = self.state.lock();
        state.dynamic.retain(|m| *m != mirror);
        state.dynamic.insert(0, mirror.clone());
        debug!(mirror = %mirror, "mirror promoted to front");
    }

    /// Drop the dynamic list so the next lookup re-fetches the directory.
    pub fn refresh(&self) {
        let mut state = self.state.lock();
        state.dynamic.clear();
        state.populated = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{directory::StaticMirrors, error::DirectoryError};

    struct FailingDirectory;

    #[async_trait]
    impl DirectoryProvider for FailingDirectory {
        async fn fetch_mirrors(&self) -> Result<Vec<String>, DirectoryError> {
            Err(DirectoryError::BadStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }

    fn fallback() -> Vec<&'static str> {
        vec!["https://fallback-a.example", "https://fallback-b.example"]
    }

    #[tokio::test]
    async fn directory_failure_degrades_to_fallback_list() {
        let registry = MirrorRegistry::new(Arc::new(FailingDirectory), fallback());
        registry.ensure_populated().await;
        assert_eq!(
            registry.ordered(),
            vec!["https://fallback-a.example", "https://fallback-b.example"]
        );
    }

    #[tokio::test]
    async fn dynamic_mirrors_come_first_and_are_deduplicated() {
        let directory = StaticMirrors(vec![
            "https://dyn-a.example/".to_owned(),
            "https://fallback-b.example".to_owned(),
            "https://dyn-a.example".to_owned(),
        ]);
        let registry = MirrorRegistry::new(Arc::new(directory), fallback());
        registry.ensure_populated().await;
        assert_eq!(
            registry.ordered(),
            vec![
                "https://dyn-a.example",
                "https://fallback-b.example",
                "https://fallback-a.example",
            ]
        );
    }

    #[tokio::test]
    async fn ensure_populated_fetches_only_once() {
        let directory = StaticMirrors(vec!["https://dyn-a.example".to_owned()]);
        let registry = MirrorRegistry::new(Arc::new(directory), fallback());
        registry.ensure_populated().await;
        registry.ensure_populated().await;
        assert_eq!(registry.ordered()[0], "https://dyn-a.example");
        assert_eq!(registry.ordered().len(), 3);
    }

    #[tokio::test]
    async fn promote_moves_only_the_promoted_mirror() {
        let directory = StaticMirrors(vec![
            "https://a.example".to_owned(),
            "https://b.example".to_owned(),
            "https://c.example".to_owned(),
        ]);
        let registry = MirrorRegistry::new(Arc::new(directory), Vec::<String>::new());
        registry.ensure_populated().await;

        registry.promote("https://b.example");
        assert_eq!(
            registry.ordered(),
            vec!["https://b.example", "https://a.example", "https://c.example"]
        );
    }

    #[tokio::test]
    async fn promote_is_idempotent() {
        let registry = MirrorRegistry::new(Arc::new(FailingDirectory), fallback());
        registry.ensure_populated().await;

        registry.promote("https://mirror-x.example");
        registry.promote("https://mirror-x.example");

        let ordered = registry.ordered();
        assert_eq!(ordered[0], "https://mirror-x.example");
        assert_eq!(
            ordered
                .iter()
                .filter(|m| *m == "https://mirror-x.example")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn promoting_a_fallback_mirror_suppresses_its_fallback_copy() {
        let registry = MirrorRegistry::new(Arc::new(FailingDirectory), fallback());
        registry.ensure_populated().await;

        registry.promote("https://fallback-b.example/");
        assert_eq!(
            registry.ordered(),
            vec!["https://fallback-b.example", "https://fallback-a.example"]
        );
    }

    #[tokio::test]
    async fn refresh_clears_the_dynamic_list() {
        let directory = StaticMirrors(vec!["https://dyn-a.example".to_owned()]);
        let registry = MirrorRegistry::new(Arc::new(directory), fallback());
        registry.ensure_populated().await;
        registry.promote("https://promoted.example");

        registry.refresh();
        assert_eq!(
            registry.ordered(),
            vec!["https://fallback-a.example", "https://fallback-b.example"]
        );

        registry.ensure_populated().await;
        assert_eq!(registry.ordered()[0], "https://dyn-a.example");
    }
}
