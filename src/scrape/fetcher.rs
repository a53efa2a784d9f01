//! HTTP fetcher for listing pages
//!
//! This module handles the HTTP side of the scrape:
//! - Building the HTTP client with a proper user agent string
//! - Constructing per-page URLs
//! - GET requests for page bodies
//! - Error classification

use crate::{config, Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for every page request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    // Format: name/version
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(config::CONNECT_TIMEOUT_SECS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Constructs the URL of listing page `page` under `base`
///
/// Page indices start at 1; the listing exposes them as `page/<n>/`
/// path segments.
pub fn page_url(base: &Url, page: u32) -> Result<Url> {
    Ok(base.join(&format!("page/{}/", page))?)
}

/// Fetches one listing page and returns its body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base` - The base endpoint of the listing
/// * `page` - 1-based page index
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - The request could not be completed: connection
///   failure, timeout, body read failure, or a non-success status
pub async fn fetch_page(client: &Client, base: &Url, page: u32) -> Result<String> {
    let url = page_url(base, page)?;
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(&url, e))
}

/// Classifies a transport error, separating timeouts from other failures
fn classify_error(url: &Url, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
