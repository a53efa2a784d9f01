//! Fixed configuration for the scraper
//!
//! There is no config file and no environment lookup; the endpoint and
//! paths are constants, and the single output path can be overridden on
//! the command line.

// Net config
pub const QUOTES_URL: &str = "https://quotes.toscrape.com/";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

// Output
pub const DEFAULT_OUTPUT_PATH: &str = "quotes.csv";
pub const LOG_FILE_PATH: &str = "parser.log";
