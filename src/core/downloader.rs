//! Request handler: input string in, thumbnail (and optionally a file) out

use crate::core::fetcher::{FetcherConfig, ThumbnailFetcher};
use crate::core::thumbnail::ThumbnailImage;
use crate::error::ThumbError;
use crate::utils::{extract_video_id, resolve_output_path, unique_path};
use std::path::PathBuf;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Output path (file or directory)
    pub output_path: Option<PathBuf>,
    /// Pick a fresh name instead of overwriting an existing file
    pub no_clobber: bool,
}

/// A thumbnail written to disk
#[derive(Debug, Clone)]
pub struct SavedThumbnail {
    pub image: ThumbnailImage,
    pub path: PathBuf,
}

/// Main downloader struct
#[derive(Debug, Clone, Default)]
pub struct ThumbnailDownloader {
    options: DownloadOptions,
    fetcher: FetcherConfig,
}

impl ThumbnailDownloader {
    /// Create a new downloader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = Some(path.into());
        self
    }

    /// Set HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.fetcher.timeout = timeout;
        self
    }

    /// Set thumbnail host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.fetcher.base_url = base_url.into();
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.fetcher.user_agent = Some(user_agent.into());
        self
    }

    /// Set proxy
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.fetcher.proxy_url = Some(proxy_url.into());
        self
    }

    /// Never overwrite existing files
    pub fn with_no_clobber(mut self, no_clobber: bool) -> Self {
        self.options.no_clobber = no_clobber;
        self
    }

    /// Get output options
    pub fn options(&self) -> &DownloadOptions {
        &self.options
    }

    /// Get fetcher configuration
    pub fn fetcher_config(&self) -> &FetcherConfig {
        &self.fetcher
    }

    /// Turn user input into a thumbnail.
    ///
    /// Empty input and inputs without a video ID fail before any network call.
    pub async fn resolve(&self, input: &str) -> Result<ThumbnailImage, ThumbError> {
        if input.is_empty() {
            return Err(ThumbError::InvalidInput);
        }

        let video_id = extract_video_id(input)?;
        info!("Extracted video ID: {}", video_id);

        let fetcher = ThumbnailFetcher::with_config(self.fetcher.clone())?;
        fetcher.fetch(&video_id).await
    }

    /// Resolve the thumbnail and write it to the configured output path
    pub async fn download(&self, input: &str) -> Result<SavedThumbnail, ThumbError> {
        let image = self.resolve(input).await?;
        let path = self.save(&image).await?;
        Ok(SavedThumbnail { image, path })
    }

    /// Write an already fetched thumbnail to disk
    pub async fn save(&self, image: &ThumbnailImage) -> Result<PathBuf, ThumbError> {
        let mut path = resolve_output_path(self.options.output_path.as_deref(), &image.file_name());
        if self.options.no_clobber {
            path = unique_path(&path)?;
        }
        debug!("Writing {} bytes to {}", image.len(), path.display());

        let tmp_path = path.with_extension("tmp");
        let written = match write_file(&tmp_path, &image.bytes).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &path)
                .await
                .map_err(ThumbError::from),
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => {
                info!("Saved thumbnail to {}", path.display());
                Ok(path)
            }
            Err(e) => {
                warn!("Saving thumbnail failed: {}, cleaning up temp file", e);
                let _ = tokio::fs::remove_file(&tmp_path).await;
                Err(e)
            }
        }
    }
}

async fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<(), ThumbError> {
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}
