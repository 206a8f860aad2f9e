// src/metadata_client.rs
// oEmbed-backed metadata lookups for the ingestion pipeline
// Docs: https://oembed.com

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use reqwest::{Client, Response};

use crate::config::FetcherConfig;
use crate::error::{FetcherError, LookupError};
use crate::models::{OEmbedResponse, VideoMetadata};
use crate::observer::{MetadataObserver, TracingObserver};

/// Longest upstream error body excerpt carried into a degraded record.
pub const ERROR_EXCERPT_CHARS: usize = 256;

// Bytes of an error body read before giving up on the rest.
const ERROR_BODY_READ_LIMIT: usize = 4096;

/// Resolves video identifiers into [`VideoMetadata`] through a keyless
/// oEmbed endpoint.
///
/// Each `extract` call makes exactly one request and always yields a
/// record; failures come back as degraded records rather than errors.
/// Dropping the returned future aborts the in-flight request.
#[derive(Clone)]
pub struct MetadataFetcher {
    client: Client,
    config: FetcherConfig,
    observer: Arc<dyn MetadataObserver>,
}

impl MetadataFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetcherError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            config,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Route diagnostics to `observer` instead of `tracing`.
    pub fn with_observer(mut self, observer: Arc<dyn MetadataObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Canonical watch-page URL for a video.
    pub fn watch_url(&self, video_id: &str) -> String {
        format!(
            "{}?v={}",
            self.config.watch_base_url,
            urlencoding::encode(video_id)
        )
    }

    /// Look up metadata for `video_id`. Never fails: any lookup error is
    /// reported to the observer and turned into a degraded record.
    pub async fn extract(&self, video_id: &str) -> VideoMetadata {
        match self.lookup(video_id).await {
            Ok(response) => {
                let metadata = VideoMetadata::from_oembed(video_id, response);
                self.observer.on_success(video_id, &metadata.title);
                metadata
            }
            Err(e) => {
                let message = e.to_string();
                self.observer.on_failure(video_id, &message);
                VideoMetadata::degraded(video_id, message)
            }
        }
    }

    /// Run `extract` for every id, at most `max_concurrency` at a time.
    /// Results keep input order.
    pub async fn extract_many<S: AsRef<str>>(&self, video_ids: &[S]) -> Vec<VideoMetadata> {
        let lookups: Vec<_> = video_ids.iter().map(|id| self.extract(id.as_ref())).collect();
        stream::iter(lookups)
            .buffered(self.config.max_concurrency)
            .collect()
            .await
    }

    async fn lookup(&self, video_id: &str) -> Result<OEmbedResponse, LookupError> {
        let watch_url = self.watch_url(video_id);

        let response = self
            .client
            .get(&self.config.oembed_endpoint)
            .query(&[("url", watch_url.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: error_excerpt(response).await,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

async fn error_excerpt(mut response: Response) -> String {
    let mut buf = Vec::new();
    while buf.len() < ERROR_BODY_READ_LIMIT {
        match response.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            _ => break,
        }
    }
    excerpt(&String::from_utf8_lossy(&buf), ERROR_EXCERPT_CHARS)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.trim().chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}
