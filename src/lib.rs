//! # ytthumb - YouTube thumbnail fetcher
//!
//! Finds the highest-resolution thumbnail of a YouTube video and saves it.
//!
//! ## Features
//!
//! - Video ID extraction from `watch?v=`, `youtu.be/` and similar links
//! - `maxresdefault` with automatic fallback to `hqdefault`
//! - Image validation before saving
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytthumb::ThumbnailDownloader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = ThumbnailDownloader::new().with_output_path("./thumbnails");
//!
//!     let saved = downloader.download("https://youtu.be/dQw4w9WgXcQ").await?;
//!     println!("Saved {} ({})", saved.path.display(), saved.image.tier);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod utils;

// Re-export main types
pub use core::{
    FetcherConfig, ResolutionTier, SavedThumbnail, ThumbnailDownloader, ThumbnailFetcher,
    ThumbnailImage, ThumbnailSummary, VideoId,
};
pub use error::ThumbError;

/// Result type alias for ytthumb operations
pub type Result<T> = std::result::Result<T, ThumbError>;
