//! Record extraction from quote blocks

use crate::scrape::parser::compile_selector;
use crate::{Quote, Result, ScrapeError};
use scraper::ElementRef;

/// CSS selector for the quoted text within a block
const TEXT_SELECTOR: &str = ".text";

/// CSS selector for the attribution within a block
const AUTHOR_SELECTOR: &str = ".author";

/// CSS selector for the tag links within a block
const TAG_SELECTOR: &str = ".tags .tag";

/// Extracts one `Quote` from a quote block
///
/// The text and author elements are mandatory; tags are optional and
/// default to an empty list, in document order with duplicates kept.
/// `page` is carried only for error context.
///
/// # Returns
///
/// * `Ok(Quote)` - The extracted record
/// * `Err(ScrapeError::MalformedQuote)` - Text or author element missing
pub fn extract_quote(block: ElementRef<'_>, page: u32) -> Result<Quote> {
    let text = select_first_text(block, TEXT_SELECTOR)?
        .ok_or(ScrapeError::MalformedQuote { page, field: "text" })?;

    let author = select_first_text(block, AUTHOR_SELECTOR)?.ok_or(ScrapeError::MalformedQuote {
        page,
        field: "author",
    })?;

    let tags = select_all_text(block, TAG_SELECTOR)?;

    Ok(Quote { text, author, tags })
}

/// Text content of the first element matching `css`, if any
fn select_first_text(block: ElementRef<'_>, css: &'static str) -> Result<Option<String>> {
    let selector = compile_selector(css)?;
    Ok(block.select(&selector).next().map(element_text))
}

/// Text contents of all elements matching `css`, document order preserved
fn select_all_text(block: ElementRef<'_>, css: &'static str) -> Result<Vec<String>> {
    let selector = compile_selector(css)?;
    Ok(block.select(&selector).map(element_text).collect())
}

/// Concatenated text nodes of an element, trimmed of surrounding whitespace
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
