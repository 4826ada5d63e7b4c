//! Main entry point for ytthumb CLI

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytthumb::cli::{Args, OutputFormatter};
use ytthumb::ThumbnailDownloader;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.log_level());

    debug!("Starting ytthumb with args: {:?}", args);

    let mut formatter = OutputFormatter::new(args.verbosity_level());

    match run(&args, &mut formatter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            formatter.finish_spinner();
            formatter.report_error(&e);
            if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Build the downloader from CLI options
fn build_downloader(args: &Args) -> ThumbnailDownloader {
    let mut downloader = ThumbnailDownloader::new()
        .with_timeout(args.timeout_duration())
        .with_base_url(args.base_url.as_str())
        .with_no_clobber(args.no_clobber);

    if let Some(output) = &args.output {
        downloader = downloader.with_output_path(output);
    }

    if let Some(user_agent) = &args.user_agent {
        downloader = downloader.with_user_agent(user_agent.as_str());
    }

    if let Some(proxy) = &args.proxy {
        downloader = downloader.with_proxy(proxy.as_str());
    }

    downloader
}

/// Handle one request: extract, fetch, then present and save
async fn run(args: &Args, formatter: &mut OutputFormatter) -> ytthumb::Result<()> {
    let start_time = Instant::now();
    let downloader = build_downloader(args);

    formatter.start_spinner("Fetching thumbnail...");
    let result = downloader.resolve(&args.url).await;
    formatter.finish_spinner();
    let image = result?;

    // Print URL only mode
    if args.print_url {
        debug!("Print URL mode enabled");
        println!("{}", image.source_url);
        return Ok(());
    }

    if args.stdout {
        debug!("Writing {} bytes to stdout", image.len());
        return formatter.write_image(&image);
    }

    formatter.print_thumbnail_info(&image);

    let path = downloader.save(&image).await?;
    info!("Request completed in {:?}", start_time.elapsed());

    if args.json {
        formatter.print_json(&image.summary().with_saved_to(&path))?;
    } else {
        formatter.print_saved(&path, start_time.elapsed());
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(default_level: &str) {
    // RUST_LOG wins over the CLI-derived default
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr; stdout may carry image bytes or JSON
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}
