// src/handlers/mod.rs
pub mod metadata;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::metadata_client::MetadataFetcher;
use crate::middleware;

/// Full application router with shared state and request logging.
pub fn app(fetcher: Arc<MetadataFetcher>) -> Router {
    Router::new()
        .merge(metadata::metadata_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(fetcher))
}
