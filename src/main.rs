//! Quote-Scrape main entry point
//!
//! This is the command-line interface for the quote listing scraper.

use clap::Parser;
use quote_scrape::{config, scrape_quotes, write_quotes_csv};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Quote-Scrape: scrape the paginated quote listing into a CSV file
///
/// Walks the listing page by page, following the pager's next link until
/// it disappears, and writes every quote found to the output file.
#[derive(Parser, Debug)]
#[command(name = "quote_scrape")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes the quote listing into a CSV file", long_about = None)]
struct Cli {
    /// Path of the CSV file to write
    #[arg(value_name = "OUTPUT", default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(Path::new(config::LOG_FILE_PATH))?;

    let base_url = Url::parse(config::QUOTES_URL)?;

    let quotes = match scrape_quotes(base_url).await {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = write_quotes_csv(&quotes, &cli.output) {
        tracing::error!("Failed to write {}: {}", cli.output.display(), e);
        return Err(e.into());
    }

    tracing::info!("Wrote {} quotes to {}", quotes.len(), cli.output.display());
    Ok(())
}

/// Sets up the tracing subscriber once at process entry
///
/// Status lines go to stdout and to the persistent log file at the same
/// time: two fmt layers behind one filter, with ANSI escapes disabled on
/// the file side. The log file is opened in append mode so it survives
/// across runs.
fn setup_logging(log_path: &Path) -> std::io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::new("quote_scrape=info,warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stdout),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    Ok(())
}
