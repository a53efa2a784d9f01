//! Quote-Scrape: a paginated quote listing scraper
//!
//! This crate walks the paginated listing at quotes.toscrape.com one page
//! at a time, extracts (text, author, tags) records from each page, and
//! writes the full result set to a CSV file.

pub mod config;
pub mod output;
pub mod quote;
pub mod scrape;

use thiserror::Error;

/// Main error type for scrape operations
///
/// Nothing in the pipeline recovers from these; every variant propagates
/// to the process boundary and aborts the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid selector {css:?}: {message}")]
    Selector { css: &'static str, message: String },

    #[error("Malformed quote block on page {page}: missing {field}")]
    MalformedQuote { page: u32, field: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use output::write_quotes_csv;
pub use quote::Quote;
pub use scrape::{scrape_quotes, Driver};
