// src/models/mod.rs
pub mod oembed;
pub mod video_metadata;

pub use oembed::OEmbedResponse;
pub use video_metadata::VideoMetadata;
