//! Error types for ytthumb

use crate::core::thumbnail::VideoId;
use thiserror::Error;

/// Main error type for ytthumb operations
#[derive(Debug, Error)]
pub enum ThumbError {
    #[error("Empty input")]
    InvalidInput,

    #[error("No video ID found in: {0}")]
    MalformedUrl(String),

    #[error("No thumbnail available for video {0}")]
    ThumbnailUnavailable(VideoId),

    #[error("Image decode error: {0}")]
    DecodeFailure(#[from] image::ImageError),

    #[error("JPEG encode error: {0}")]
    EncodeFailure(image::ImageError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ThumbError {
    /// Check if error should be shown as a warning rather than an error
    pub fn is_warning(&self) -> bool {
        matches!(self, ThumbError::InvalidInput)
    }

    /// Check if error was caused by the input alone (no network call was made)
    pub fn is_user_error(&self) -> bool {
        matches!(self, ThumbError::InvalidInput | ThumbError::MalformedUrl(_))
    }

    /// Message shown to the user at the top level
    pub fn user_message(&self) -> String {
        match self {
            ThumbError::InvalidInput => "Please enter a link!".to_string(),
            ThumbError::MalformedUrl(_) => {
                "Invalid YouTube link. Please check it again.".to_string()
            }
            ThumbError::ThumbnailUnavailable(_) => {
                "Could not find a thumbnail image. Check whether the video is private or deleted."
                    .to_string()
            }
            ThumbError::DecodeFailure(e) => {
                format!("The thumbnail server returned something that is not an image: {}", e)
            }
            ThumbError::EncodeFailure(e) => {
                format!("Could not convert the thumbnail to JPEG: {}", e)
            }
            ThumbError::Timeout(url) => format!("Timed out while fetching {}", url),
            other => other.to_string(),
        }
    }
}
