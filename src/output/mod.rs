//! Output module
//!
//! Serializes the accumulated quotes to their on-disk form.

mod csv;

pub use self::csv::{format_tags, write_quotes_csv};
