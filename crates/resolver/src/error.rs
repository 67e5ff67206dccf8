use thiserror::Error;

/// Errors surfaced to the resolver's caller.
///
/// Everything transient (a single mirror timing out, answering garbage or
/// being down) stays inside the resolver; only these two outcomes escape.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("video id must not be empty")]
    InvalidVideoId,
    #[error("no mirror produced a playable audio stream")]
    NoStreamFound,
}

/// Why a single mirror failed to produce a stream.
///
/// Never propagated to the caller; the resolver logs it and moves on to the
/// next mirror.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("request timed out")]
    Timeout,
    #[error("mirror unreachable: {0}")]
    Unreachable(reqwest::Error),
    #[error("unexpected status: {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("malformed stream manifest: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no eligible audio stream in manifest")]
    NoEligibleStream,
}

impl From<reqwest::Error> for MirrorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(err)
        }
    }
}

/// Instance directory fetch failures.
///
/// Absorbed by the registry: a failed fetch leaves the dynamic mirror list
/// empty and lookups run on the static fallback list alone.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("malformed directory document: {0}")]
    Malformed(#[from] serde_json::Error),
}
