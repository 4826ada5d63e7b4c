//! Output formatting and progress display

use crate::cli::args::VerbosityLevel;
use crate::core::thumbnail::{ThumbnailImage, ThumbnailSummary};
use crate::error::ThumbError;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Output formatter for ytthumb
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
    spinner: Option<ProgressBar>,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            spinner: None,
        }
    }

    /// Show a spinner while the thumbnail is fetched
    pub fn start_spinner(&mut self, message: &str) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        self.spinner = Some(spinner);
    }

    /// Remove the spinner
    pub fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            println!("✅ {}", message);
        }
    }

    /// Print warning message
    pub fn warning(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }

    /// Print debug message
    pub fn debug(&self, message: &str) {
        if self.verbosity == VerbosityLevel::Verbose {
            println!("🐛 {}", message);
        }
    }

    /// Report a failed request the way the user should see it
    pub fn report_error(&self, error: &ThumbError) {
        if error.is_warning() {
            self.warning(&error.user_message());
        } else {
            self.error(&error.user_message());
        }
        self.debug(&format!("{:?}", error));
    }

    /// Print thumbnail information
    pub fn print_thumbnail_info(&self, image: &ThumbnailImage) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        self.success(&format!("Found the thumbnail! (ID: {})", image.video_id));
        println!(
            "🖼️  {} resolution, {}x{}",
            image.tier, image.width, image.height
        );
        println!("📦 {} ({})", format_bytes(image.len() as u64), image.mime_type());
        println!("🔗 {}", image.source_url);
    }

    /// Print download complete message
    pub fn print_saved(&self, path: &Path, duration: Duration) {
        if self.verbosity == VerbosityLevel::Quiet {
            return;
        }

        println!("💾 Saved to: {}", path.display());
        println!("⏱️  Time: {}", format_duration(duration));
    }

    /// Print a JSON summary to stdout
    pub fn print_json(&self, summary: &ThumbnailSummary) -> Result<(), ThumbError> {
        let json = serde_json::to_string_pretty(summary)?;
        println!("{}", json);
        Ok(())
    }

    /// Write raw image bytes to stdout
    pub fn write_image(&self, image: &ThumbnailImage) -> Result<(), ThumbError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&image.bytes)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Format bytes as human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let bytes_f64 = bytes as f64;
    let exp = (bytes_f64.ln() / THRESHOLD.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);

    let value = bytes_f64 / THRESHOLD.powi(exp as i32);

    if exp == 0 {
        format!("{} {}", bytes, UNITS[exp])
    } else {
        format!("{:.1} {}", value, UNITS[exp])
    }
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();

    if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    }
}
