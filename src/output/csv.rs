//! CSV serialization of scraped quotes
//!
//! Writes one header row taken from `Quote::FIELDS` followed by one row
//! per quote. The tags column holds the whole list in a single cell.

use crate::{Quote, Result};
use csv::Writer;
use std::path::Path;

/// Writes `quotes` to `path` as CSV, truncating any existing file
///
/// # Arguments
///
/// * `quotes` - The records to serialize, already in output order
/// * `path` - Target file path; created or overwritten
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(ScrapeError)` - The path could not be opened or a write failed
pub fn write_quotes_csv(quotes: &[Quote], path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record(Quote::FIELDS)?;
    for quote in quotes {
        writer.write_record([
            quote.text.as_str(),
            quote.author.as_str(),
            format_tags(&quote.tags).as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Formats the tags list for a single CSV cell
///
/// Two tags become `['life', 'truth']`; no tags become `[]`.
pub fn format_tags(tags: &[String]) -> String {
    let inner: Vec<String> = tags.iter().map(|tag| format!("'{}'", tag)).collect();
    format!("[{}]", inner.join(", "))
}
