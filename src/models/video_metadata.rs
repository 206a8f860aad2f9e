// Normalized metadata record handed to the ingestion pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::oembed::OEmbedResponse;

/// Channel name used when a lookup succeeds but carries no author.
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Channel name used on degraded records.
pub const UNKNOWN_CHANNEL_DEGRADED: &str = "Unknown";

/// Title used whenever the upstream title is missing or empty.
pub fn placeholder_title(video_id: &str) -> String {
    format!("Video {}", video_id)
}

/// Metadata for a single video.
///
/// Built fresh for every lookup and never mutated afterwards. A lookup that
/// failed still yields a complete record; callers check `error` (or
/// [`VideoMetadata::is_degraded`]) to tell the two apart.
///
/// `description`, `duration` and `upload_date` stay at their defaults: the
/// oEmbed endpoint does not expose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub description: String,
    pub duration: u64,
    pub upload_date: String,
    pub thumbnail_url: String,
    pub extracted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoMetadata {
    /// Map an oEmbed payload onto a record. Each field falls back on its own.
    pub fn from_oembed(video_id: &str, response: OEmbedResponse) -> Self {
        let OEmbedResponse {
            title,
            author_name,
            thumbnail_url,
        } = response;

        Self {
            video_id: video_id.to_string(),
            title: non_empty(title).unwrap_or_else(|| placeholder_title(video_id)),
            channel_name: non_empty(author_name).unwrap_or_else(|| UNKNOWN_CHANNEL.to_string()),
            description: String::new(),
            duration: 0,
            upload_date: String::new(),
            thumbnail_url: thumbnail_url.unwrap_or_default(),
            extracted_at: Utc::now(),
            error: None,
        }
    }

    /// Placeholder record for a failed lookup.
    pub fn degraded(video_id: &str, error: impl Into<String>) -> Self {
        Self {
            video_id: video_id.to_string(),
            title: placeholder_title(video_id),
            channel_name: UNKNOWN_CHANNEL_DEGRADED.to_string(),
            description: String::new(),
            duration: 0,
            upload_date: String::new(),
            thumbnail_url: String::new(),
            extracted_at: Utc::now(),
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
