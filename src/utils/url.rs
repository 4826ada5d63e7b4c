//! URL utilities for extracting video IDs and building thumbnail URLs

use crate::core::thumbnail::{ResolutionTier, VideoId};
use crate::error::ThumbError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Default thumbnail CDN
pub const DEFAULT_THUMBNAIL_HOST: &str = "https://img.youtube.com";

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11}).*").expect("video ID pattern is valid")
    })
}

/// Extract the 11-character video ID from a URL-like string.
///
/// The first `v=XXXXXXXXXXX` or `/XXXXXXXXXXX` occurrence wins. The host is not
/// checked, so any string carrying such a token is accepted.
pub fn extract_video_id(url: &str) -> Result<VideoId, ThumbError> {
    video_id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId::parse(m.as_str()))
        .unwrap_or_else(|| Err(ThumbError::MalformedUrl(url.to_string())))
}

/// Parse and normalize a thumbnail host base URL
pub fn parse_base_url(base: &str) -> Result<Url, ThumbError> {
    Ok(Url::parse(base)?)
}

/// Build the thumbnail URL for a video ID and tier
pub fn thumbnail_url(base: &Url, video_id: &VideoId, tier: ResolutionTier) -> String {
    format!(
        "{}/vi/{}/{}.jpg",
        base.as_str().trim_end_matches('/'),
        video_id,
        tier.file_stem()
    )
}
