//! Command line argument parsing

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::utils::url::DEFAULT_THUMBNAIL_HOST;

/// YouTube thumbnail extractor - finds the highest-resolution thumbnail of a video
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube video URL (watch?v=..., youtu.be/..., shorts/...)
    #[arg(default_value = "")]
    pub url: String,

    /// Output path (file or directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// HTTP timeout (e.g., 10s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "10s")]
    pub timeout: humantime::Duration,

    /// Thumbnail host
    #[arg(long, value_name = "URL", default_value = DEFAULT_THUMBNAIL_HOST)]
    pub base_url: String,

    /// Override User-Agent header
    #[arg(long, value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Proxy URL (http/https/socks)
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Do not overwrite an existing file; pick a numbered name instead
    #[arg(long)]
    pub no_clobber: bool,

    /// Write the image bytes to stdout instead of a file
    #[arg(long, conflicts_with_all = ["output", "print_url", "json"])]
    pub stdout: bool,

    /// Print the resolved thumbnail URL and exit (no download)
    #[arg(short = 'g', long, conflicts_with = "json")]
    pub print_url: bool,

    /// Print a JSON summary instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (only errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }

    /// Get output verbosity level
    pub fn verbosity_level(&self) -> VerbosityLevel {
        // stdout carries image bytes or JSON, keep human output off it
        if self.quiet || self.stdout || self.json {
            VerbosityLevel::Quiet
        } else if self.verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Quiet (only errors)
    Quiet,
    /// Normal
    Normal,
    /// Verbose (debug info)
    Verbose,
}

// Implement Default for Args to make tests work
impl Default for Args {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: None,
            timeout: humantime::Duration::from(Duration::from_secs(10)),
            base_url: DEFAULT_THUMBNAIL_HOST.to_string(),
            user_agent: None,
            proxy: None,
            no_clobber: false,
            stdout: false,
            print_url: false,
            json: false,
            verbose: false,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["ytthumb", "https://youtu.be/dQw4w9WgXcQ"]).unwrap();
        assert_eq!(args.url, "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(args.timeout_duration(), Duration::from_secs(10));
        assert_eq!(args.base_url, "https://img.youtube.com");
        assert_eq!(args.output, None);
        assert!(!args.stdout);
    }

    #[test]
    fn test_parse_empty_url() {
        let args = Args::try_parse_from(["ytthumb"]).unwrap();
        assert_eq!(args.url, "");
    }

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "ytthumb",
            "-o",
            "/tmp/thumbs",
            "--timeout",
            "1m",
            "--base-url",
            "http://localhost:9000",
            "--user-agent",
            "agent",
            "--proxy",
            "http://proxy:8080",
            "--no-clobber",
            "--json",
            "-v",
            "https://youtu.be/dQw4w9WgXcQ",
        ])
        .unwrap();

        assert_eq!(args.output, Some(PathBuf::from("/tmp/thumbs")));
        assert_eq!(args.timeout_duration(), Duration::from_secs(60));
        assert_eq!(args.base_url, "http://localhost:9000");
        assert_eq!(args.user_agent.as_deref(), Some("agent"));
        assert_eq!(args.proxy.as_deref(), Some("http://proxy:8080"));
        assert!(args.no_clobber);
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(Args::try_parse_from(["ytthumb", "--stdout", "-o", "x.jpg", "url"]).is_err());
        assert!(Args::try_parse_from(["ytthumb", "--stdout", "-g", "url"]).is_err());
        assert!(Args::try_parse_from(["ytthumb", "--stdout", "--json", "url"]).is_err());
    }

    #[test]
    fn test_print_url_conflicts_with_json() {
        assert!(Args::try_parse_from(["ytthumb", "-g", "--json", "url"]).is_err());
        assert!(Args::try_parse_from(["ytthumb", "--print-url", "--json", "url"]).is_err());
        assert!(Args::try_parse_from(["ytthumb", "-g", "url"]).is_ok());
    }

    #[test]
    fn test_args_verbosity_level() {
        let args = Args::default();
        assert_eq!(args.verbosity_level(), VerbosityLevel::Normal);

        let args = Args {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Quiet);

        let args = Args {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Verbose);

        let args = Args {
            verbose: true,
            stdout: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Quiet);

        let args = Args {
            json: true,
            ..Default::default()
        };
        assert_eq!(args.verbosity_level(), VerbosityLevel::Quiet);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Args::default().log_level(), "warn");
        let args = Args {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(args.log_level(), "debug");
    }
}
