//! HTTP client for the thumbnail CDN

use crate::core::thumbnail::{ResolutionTier, ThumbnailImage, VideoId};
use crate::error::ThumbError;
use crate::utils::mime::{is_image_mime, mime_from_format};
use crate::utils::url::{parse_base_url, thumbnail_url, DEFAULT_THUMBNAIL_HOST};
use image::{DynamicImage, ImageFormat, ImageOutputFormat};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::io::Cursor;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("ytthumb/", env!("CARGO_PKG_VERSION"));

/// Quality used when a non-JPEG body has to be re-encoded
const JPEG_QUALITY: u8 = 90;

/// Fetcher configuration
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Thumbnail host, e.g. `https://img.youtube.com`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: Option<String>,
    /// Proxy URL
    pub proxy_url: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_THUMBNAIL_HOST.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: None,
            proxy_url: None,
        }
    }
}

/// Fetches the best available thumbnail for a video
pub struct ThumbnailFetcher {
    client: Client,
    base_url: Url,
    config: FetcherConfig,
}

impl ThumbnailFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self, ThumbError> {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetcherConfig) -> Result<Self, ThumbError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = ClientBuilder::new()
            .timeout(config.timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            config,
        })
    }

    /// Get fetcher configuration
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Thumbnail URL for a given tier
    pub fn url_for(&self, video_id: &VideoId, tier: ResolutionTier) -> String {
        thumbnail_url(&self.base_url, video_id, tier)
    }

    /// Fetch the thumbnail, trying `maxresdefault` first and `hqdefault` second.
    ///
    /// Only a non-200 status moves on to the next tier; transport errors are
    /// returned as-is.
    pub async fn fetch(&self, video_id: &VideoId) -> Result<ThumbnailImage, ThumbError> {
        for tier in ResolutionTier::FALLBACK_ORDER {
            let url = self.url_for(video_id, tier);
            debug!("Requesting {} thumbnail: {}", tier, url);

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| request_error(e, &url))?;

            let status = response.status();
            if status != StatusCode::OK {
                info!("{} thumbnail not available ({}), trying next tier", tier, status);
                continue;
            }

            if let Some(content_type) = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
            {
                if !is_image_mime(content_type) {
                    warn!("Unexpected content type for {}: {}", url, content_type);
                }
            }

            let body = response.bytes().await.map_err(|e| request_error(e, &url))?;
            let (bytes, width, height) = to_jpeg(&body)?;

            info!(
                "Found {} thumbnail for {} ({}x{}, {} bytes)",
                tier,
                video_id,
                width,
                height,
                bytes.len()
            );

            return Ok(ThumbnailImage {
                video_id: video_id.clone(),
                tier,
                source_url: url,
                bytes,
                width,
                height,
            });
        }

        Err(ThumbError::ThumbnailUnavailable(video_id.clone()))
    }
}

fn request_error(error: reqwest::Error, url: &str) -> ThumbError {
    if error.is_timeout() {
        ThumbError::Timeout(url.to_string())
    } else {
        ThumbError::Request(error)
    }
}

/// Decode a response body and return JPEG bytes with the image dimensions.
///
/// JPEG bodies are passed through untouched.
fn to_jpeg(body: &[u8]) -> Result<(Vec<u8>, u32, u32), ThumbError> {
    let format = image::guess_format(body)?;
    let decoded = image::load_from_memory_with_format(body, format)?;
    let (width, height) = (decoded.width(), decoded.height());

    if format == ImageFormat::Jpeg {
        return Ok((body.to_vec(), width, height));
    }

    debug!("Re-encoding {} body as JPEG", mime_from_format(format));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(decoded.to_rgb8())
        .write_to(
            &mut Cursor::new(&mut buf),
            ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )
        .map_err(ThumbError::EncodeFailure)?;
    Ok((buf, width, height))
}
