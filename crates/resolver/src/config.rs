use std::time::Duration;

/// Instance directory document listing public API mirrors.
pub const DEFAULT_INSTANCES_URL: &str = "https://piped-instances.kavin.rocks/";

/// Static fallback mirrors, appended after whatever the directory provides.
pub const FALLBACK_MIRRORS: &[&str] = &[
    "https://pipedapi.kavin.rocks",
    "https://pipedapi.tokhmi.xyz",
    "https://pipedapi.moomoo.me",
    "https://pipedapi.syncpundit.io",
    "https://api-piped.mha.fi",
    "https://piped-api.garudalinux.org",
    "https://pipedapi.rivo.lol",
    "https://pipedapi.leptons.xyz",
    "https://piped-api.lunar.icu",
];

const DEFAULT_USER_AGENT: &str = concat!("piped-resolver/", env!("CARGO_PKG_VERSION"));

/// Configurable options for the resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Where to fetch the dynamic mirror list from.
    pub instances_url: String,

    /// Mirrors tried after the dynamic list, in this order.
    pub fallback_mirrors: Vec<String>,

    /// Timeout for the one-shot directory fetch.
    pub directory_timeout: Duration,

    /// Per-mirror request timeout. Mirrors are probed sequentially, so this
    /// bounds how long a dead mirror can stall a lookup.
    pub request_timeout: Duration,

    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            instances_url: DEFAULT_INSTANCES_URL.to_owned(),
            fallback_mirrors: FALLBACK_MIRRORS.iter().map(|m| (*m).to_owned()).collect(),
            directory_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(3),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ResolverConfig {
    pub fn builder() -> crate::builder::ResolverConfigBuilder {
        crate::builder::ResolverConfigBuilder::new()
    }
}
