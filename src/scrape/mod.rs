//! Scrape module for page fetching and record extraction
//!
//! This module contains the pipeline, including:
//! - HTTP fetching of listing pages
//! - HTML parsing and quote block selection
//! - Record extraction
//! - Pagination driving

mod driver;
mod extract;
mod fetcher;
mod parser;

pub use driver::{scrape_quotes, Driver};
pub use extract::extract_quote;
pub use fetcher::{build_http_client, fetch_page, page_url};
pub use parser::ListingPage;
