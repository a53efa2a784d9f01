//! Pagination driver - main scrape orchestration
//!
//! This module owns the page loop: fetch page N, extract a record from
//! every quote block on it, and continue exactly while the pager reports
//! a next page.

use crate::scrape::extract::extract_quote;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::scrape::parser::ListingPage;
use crate::{Quote, Result};
use reqwest::Client;
use url::Url;

/// Sequential pagination driver
pub struct Driver {
    client: Client,
    base_url: Url,
}

impl Driver {
    /// Creates a driver targeting `base_url`
    ///
    /// # Returns
    ///
    /// * `Ok(Driver)` - Ready to run
    /// * `Err(ScrapeError)` - Failed to build the HTTP client
    pub fn new(base_url: Url) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self { client, base_url })
    }

    /// Runs the scrape to completion and returns every quote found
    ///
    /// Pages are processed strictly in order with one request in flight
    /// at a time. A page with zero quote blocks does not terminate the
    /// loop; only a missing next-page link does, so the quote order in
    /// the result is page-then-document order. Any fetch or extraction
    /// error aborts the whole run with no partial result.
    pub async fn run(&self) -> Result<Vec<Quote>> {
        tracing::info!("Start parsing quotes from {}", self.base_url);

        let mut page = 1u32;
        let mut quotes = Vec::new();

        loop {
            let body = fetch_page(&self.client, &self.base_url, page).await?;
            let listing = ListingPage::parse(&body);

            let blocks = listing.quote_blocks()?;
            let found = blocks.len();
            for block in blocks {
                quotes.push(extract_quote(block, page)?);
            }

            let has_next = listing.has_next_page()?;
            tracing::info!("Page {}: {} quotes ({} total)", page, found, quotes.len());

            if !has_next {
                break;
            }
            page += 1;
        }

        tracing::info!(
            "Scrape complete: {} quotes from {} pages",
            quotes.len(),
            page
        );
        Ok(quotes)
    }
}

/// Scrapes every page reachable from `base_url` and returns the quotes
///
/// This is the main entry point of the pipeline; it wraps driver
/// construction and the full pagination run.
pub async fn scrape_quotes(base_url: Url) -> Result<Vec<Quote>> {
    Driver::new(base_url)?.run().await
}
