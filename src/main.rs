//! CLI entry point for the emoji importer.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use emoji_importer_core::ImportConfig;
use emoji_importer_core::import::run_import;
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // stdout carries the per-emoji report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(server = %args.server, file = %args.file.display(), "CLI arguments parsed");

    let config = ImportConfig::new(&args.server, &args.token, args.file.clone())
        .context("invalid configuration")?
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .context("invalid configuration")?;

    let report = run_import(&config, &mut std::io::stdout().lock())
        .await
        .context("import aborted")?;

    info!(
        uploaded = report.uploaded(),
        duplicates = report.duplicates(),
        aliases = report.aliases(),
        failed = report.failed(),
        total = report.total(),
        "Emoji import finished"
    );

    Ok(())
}
