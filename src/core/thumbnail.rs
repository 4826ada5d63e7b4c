//! Thumbnail data types

use crate::error::ThumbError;
use crate::utils::mime::mime_from_ext;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Length of a YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

/// 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Validate and wrap a raw video ID
    pub fn parse(raw: &str) -> Result<Self, ThumbError> {
        let valid = raw.len() == VIDEO_ID_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ThumbError::MalformedUrl(raw.to_string()))
        }
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = ThumbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Thumbnail resolution variant served by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    /// maxresdefault.jpg
    Max,
    /// hqdefault.jpg
    High,
}

impl ResolutionTier {
    /// Order in which tiers are requested
    pub const FALLBACK_ORDER: [ResolutionTier; 2] = [ResolutionTier::Max, ResolutionTier::High];

    /// Short name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionTier::Max => "max",
            ResolutionTier::High => "high",
        }
    }

    /// File stem used by the CDN for this tier
    pub fn file_stem(&self) -> &'static str {
        match self {
            ResolutionTier::Max => "maxresdefault",
            ResolutionTier::High => "hqdefault",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fetched, JPEG-encoded thumbnail
#[derive(Debug, Clone)]
pub struct ThumbnailImage {
    /// Video the thumbnail belongs to
    pub video_id: VideoId,
    /// Tier that answered
    pub tier: ResolutionTier,
    /// URL the image was served from
    pub source_url: String,
    /// JPEG bytes
    pub bytes: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ThumbnailImage {
    /// Suggested download filename
    pub fn file_name(&self) -> String {
        format!("thumbnail_{}.jpg", self.video_id)
    }

    /// MIME type of the bytes
    pub fn mime_type(&self) -> &'static str {
        mime_from_ext("jpg")
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Build a serializable summary
    pub fn summary(&self) -> ThumbnailSummary {
        ThumbnailSummary {
            video_id: self.video_id.clone(),
            tier: self.tier,
            source_url: self.source_url.clone(),
            width: self.width,
            height: self.height,
            size: self.bytes.len(),
            mime_type: self.mime_type(),
            file_name: self.file_name(),
            saved_to: None,
            fetched_at: Utc::now(),
        }
    }
}

/// Metadata describing a fetched thumbnail, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailSummary {
    pub video_id: VideoId,
    pub tier: ResolutionTier,
    pub source_url: String,
    pub width: u32,
    pub height: u32,
    pub size: usize,
    pub mime_type: &'static str,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
    pub fetched_at: DateTime<Utc>,
}

impl ThumbnailSummary {
    /// Record where the thumbnail was written
    pub fn with_saved_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.saved_to = Some(path.into());
        self
    }
}
