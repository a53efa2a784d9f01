//! The scraped record type

/// One quote extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The quoted text, whitespace-trimmed
    pub text: String,

    /// Attribution
    pub author: String,

    /// Tags in document order; may be empty, duplicates kept
    pub tags: Vec<String>,
}

impl Quote {
    /// CSV column names, in struct field declaration order.
    ///
    /// The output header is written from this constant; keep it in sync
    /// with the fields above.
    pub const FIELDS: [&'static str; 3] = ["text", "author", "tags"];
}
