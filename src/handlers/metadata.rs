// src/handlers/metadata.rs
//! Metadata endpoints used by the pipeline orchestrator.
//!
//! A degraded record is still a 200: the `error` field carries the failure.

use axum::{
    extract::{Extension, Path},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::metadata_client::MetadataFetcher;
use crate::models::VideoMetadata;

#[derive(Debug, Deserialize)]
pub struct BatchMetadataRequest {
    pub video_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchMetadataResponse {
    pub items: Vec<VideoMetadata>,
}

pub fn metadata_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/videos/metadata", post(get_batch_metadata))
        .route("/api/videos/:video_id/metadata", get(get_video_metadata))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/videos/:video_id/metadata
async fn get_video_metadata(
    Path(video_id): Path<String>,
    Extension(fetcher): Extension<Arc<MetadataFetcher>>,
) -> Json<VideoMetadata> {
    Json(fetcher.extract(&video_id).await)
}

/// POST /api/videos/metadata
async fn get_batch_metadata(
    Extension(fetcher): Extension<Arc<MetadataFetcher>>,
    Json(request): Json<BatchMetadataRequest>,
) -> Json<BatchMetadataResponse> {
    tracing::info!("Extracting metadata for {} videos", request.video_ids.len());
    let items = fetcher.extract_many(&request.video_ids).await;
    Json(BatchMetadataResponse { items })
}
