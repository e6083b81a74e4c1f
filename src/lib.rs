//! evp-scrape: a scraper for the English Vocabulary Profile wordlists
//!
//! This crate scrapes the EVP reference site in two phases: discovering the
//! paginated word index into a list of preview records, then fetching each
//! word's detail page concurrently, in batches, and streaming the parsed
//! sense data to a JSON array on disk.

pub mod discover;
pub mod output;
pub mod scraper;
pub mod words;

use thiserror::Error;

/// Base URL that relative word-page links are resolved against.
pub const BASE_URL: &str = "https://www.englishprofile.org/";

/// Main error type for evp-scrape operations
#[derive(Debug, Error)]
pub enum EvpError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evp-scrape operations
pub type Result<T> = std::result::Result<T, EvpError>;

// Re-export commonly used types. The scraper module shadows the scraper
// crate in the root namespace, hence the self:: paths.
pub use self::discover::{discover_words, parse_word_index};
pub use self::output::JsonArrayWriter;
pub use self::scraper::{build_http_client, parse_word_page, scrape_words, ScrapeOptions};
pub use self::words::{WordData, WordPreview, WordSense};
