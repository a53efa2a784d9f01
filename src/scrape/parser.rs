//! HTML parser for listing pages
//!
//! This module locates the two structural anchors of a listing page:
//! - The quote container blocks, one per record
//! - The pager's next-page link, whose presence drives pagination
//!
//! Parsing is tolerant: malformed markup still yields a document, and
//! missing nodes yield empty results rather than errors.

use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// CSS selector for one quote container
const QUOTE_SELECTOR: &str = ".quote";

/// CSS selector for the pager's next-page link
const NEXT_PAGE_SELECTOR: &str = ".pager > .next a";

/// One parsed listing page
pub struct ListingPage {
    document: Html,
}

impl ListingPage {
    /// Parses raw HTML into a queryable listing page.
    ///
    /// `Html::parse_document` accepts any input, so a page without the
    /// expected structure simply contains no quote blocks and no pager.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Returns the quote container elements in document order.
    pub fn quote_blocks(&self) -> Result<Vec<ElementRef<'_>>> {
        let selector = compile_selector(QUOTE_SELECTOR)?;
        Ok(self.document.select(&selector).collect())
    }

    /// Reports whether the pager contains a next-page link.
    ///
    /// Absence of this link is the sole termination signal of the scrape.
    pub fn has_next_page(&self) -> Result<bool> {
        let selector = compile_selector(NEXT_PAGE_SELECTOR)?;
        Ok(self.document.select(&selector).next().is_some())
    }
}

/// Compiles a CSS selector, mapping failure into the crate error type
pub(crate) fn compile_selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUOTE_PAGE: &str = r#"
        <html><body>
            <div class="quote">
                <span class="text">First</span>
                <small class="author">A</small>
            </div>
            <div class="quote">
                <span class="text">Second</span>
                <small class="author">B</small>
            </div>
            <ul class="pager">
                <li class="next"><a href="/page/2/">Next</a></li>
            </ul>
        </body></html>
    "#;

    #[test]
    fn test_quote_blocks_in_document_order() {
        let page = ListingPage::parse(TWO_QUOTE_PAGE);
        let blocks = page.quote_blocks().unwrap();
        assert_eq!(blocks.len(), 2);

        let texts: Vec<String> = blocks
            .iter()
            .map(|b| b.text().collect::<String>())
            .collect();
        assert!(texts[0].contains("First"));
        assert!(texts[1].contains("Second"));
    }

    #[test]
    fn test_next_page_link_present() {
        let page = ListingPage::parse(TWO_QUOTE_PAGE);
        assert!(page.has_next_page().unwrap());
    }

    #[test]
    fn test_next_page_link_absent() {
        let html = r#"
            <html><body>
                <div class="quote"><span class="text">Only</span></div>
                <ul class="pager">
                    <li class="previous"><a href="/page/1/">Previous</a></li>
                </ul>
            </body></html>
        "#;
        let page = ListingPage::parse(html);
        assert!(!page.has_next_page().unwrap());
    }

    #[test]
    fn test_next_link_outside_pager_ignored() {
        let html = r#"
            <html><body>
                <div class="next"><a href="/elsewhere">Not a pager</a></div>
            </body></html>
        "#;
        let page = ListingPage::parse(html);
        assert!(!page.has_next_page().unwrap());
    }

    #[test]
    fn test_empty_page() {
        let page = ListingPage::parse("<html><body></body></html>");
        assert!(page.quote_blocks().unwrap().is_empty());
        assert!(!page.has_next_page().unwrap());
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let page = ListingPage::parse("<div class=\"quote\"><span class=\"text\">Unclosed");
        assert_eq!(page.quote_blocks().unwrap().len(), 1);
    }
}
