// src/config.rs
use std::env;
use std::time::Duration;

use crate::error::FetcherError;

pub const DEFAULT_OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";
pub const DEFAULT_WATCH_BASE_URL: &str = "https://www.youtube.com/watch";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Settings for `MetadataFetcher`.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub oembed_endpoint: String,
    pub watch_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Upper bound on in-flight lookups for one `extract_many` batch.
    pub max_concurrency: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            oembed_endpoint: DEFAULT_OEMBED_ENDPOINT.to_string(),
            watch_base_url: DEFAULT_WATCH_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl FetcherConfig {
    /// Read settings from the process environment, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, FetcherError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, FetcherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("OEMBED_ENDPOINT") {
            config.oembed_endpoint = endpoint;
        }
        if let Some(base) = lookup("WATCH_BASE_URL") {
            config.watch_base_url = base;
        }
        if let Some(raw) = lookup("METADATA_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_positive("METADATA_TIMEOUT_SECS", &raw)?);
        }
        if let Some(user_agent) = lookup("METADATA_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Some(raw) = lookup("METADATA_MAX_CONCURRENCY") {
            config.max_concurrency = parse_positive("METADATA_MAX_CONCURRENCY", &raw)? as usize;
        }

        Ok(config)
    }

    pub fn with_oembed_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.oembed_endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, FetcherError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(FetcherError::InvalidConfig(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}

fn default_user_agent() -> String {
    format!("video-metadata/{}", env!("CARGO_PKG_VERSION"))
}
