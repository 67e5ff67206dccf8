use std::sync::Arc;

use reqwest::Client;
use rustls::{ClientConfig, crypto::ring};
use rustls_platform_verifier::BuilderVerifierExt;

use crate::config::ResolverConfig;

/// Build the shared HTTP client used for directory and mirror requests.
///
/// Per-request timeouts are applied at the request level; the client itself
/// only carries the TLS setup and the default headers.
pub fn build_client(config: &ResolverConfig) -> Client {
    let provider = Arc::new(ring::default_provider());
    let tls_config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .expect("Failed to configure default TLS protocol versions")
        .with_platform_verifier()
        .unwrap()
        .with_no_client_auth();

    Client::builder()
        .use_preconfigured_tls(tls_config)
        .user_agent(config.user_agent.clone())
        .build()
        .expect("Failed to create HTTP client")
}
