//! Scraper module for word detail pages
//!
//! This module contains the core scraping logic, including:
//! - HTTP client construction and single-page fetching
//! - Detail-page field extraction
//! - The batched concurrent scraping loop

mod batch;
mod extract;
mod fetcher;

pub use batch::{scrape_word_page, scrape_words, ScrapeOptions};
pub use extract::parse_word_page;
pub use fetcher::{build_http_client, fetch_page};
