// src/error.rs
use thiserror::Error;

/// Anything that can go wrong during a single oEmbed lookup.
///
/// Callers of `MetadataFetcher::extract` never see this type; it is folded
/// into the `error` field of a degraded record.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("oEmbed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("oEmbed API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse oEmbed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised while building a fetcher.
#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
