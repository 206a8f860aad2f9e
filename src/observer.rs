// src/observer.rs
//! Diagnostics sink for metadata lookups.
//!
//! The fetcher reports each lookup outcome here instead of writing to a
//! global logger, so tests can swap in their own sink.

/// Receives exactly one notification per `extract` call.
pub trait MetadataObserver: Send + Sync {
    fn on_success(&self, video_id: &str, title: &str);
    fn on_failure(&self, video_id: &str, error: &str);
}

/// Default sink that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MetadataObserver for TracingObserver {
    fn on_success(&self, video_id: &str, title: &str) {
        tracing::info!(video_id = %video_id, title = %title, "✅ Extracted video metadata");
    }

    fn on_failure(&self, video_id: &str, error: &str) {
        tracing::error!(video_id = %video_id, error = %error, "Failed to extract video metadata");
    }
}
