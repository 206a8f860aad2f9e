// lib.rs - Video metadata lookup for the ingestion pipeline
pub mod config;
pub mod error;
pub mod handlers;
pub mod metadata_client;
pub mod middleware;
pub mod models;
pub mod observer;

// Re-export commonly used types for convenience
pub use config::FetcherConfig;
pub use error::{FetcherError, LookupError};
pub use metadata_client::MetadataFetcher;
pub use models::{OEmbedResponse, VideoMetadata};
pub use observer::{MetadataObserver, TracingObserver};
