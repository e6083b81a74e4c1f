//! Batched concurrent scraping - the core orchestration loop
//!
//! Transforms an ordered list of previews into full records, batch by batch:
//! - batches run strictly in sequence; a batch's fetches all complete before
//!   the next batch starts, so at most one batch of records is held in memory
//! - within a batch, fetches fan out with at most `connection_limit` in
//!   flight; the fan-in collects results in origin order
//! - each completed batch is appended to the output stream immediately
//! - any single fetch or parse failure aborts the whole run
//!
//! Nothing here spawns tasks: the run is one logical task whose in-flight
//! requests interleave cooperatively at the network awaits.

use crate::output::JsonArrayWriter;
use crate::scraper::extract::parse_word_page;
use crate::scraper::fetcher::fetch_page;
use crate::words::{WordData, WordPreview};
use crate::Result;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use std::io::Write;
use url::Url;

/// Tuning knobs for the batched scraper
///
/// `connection_limit` caps concurrent in-flight requests (politeness to the
/// under-provisioned upstream); `batch_size` caps how many records are held
/// before a flush (memory). The two are independent: a batch larger than the
/// connection limit simply queues within the batch.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub connection_limit: usize,
    pub batch_size: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            connection_limit: 4,
            batch_size: 12,
        }
    }
}

/// Fetches and parses one word's detail page
///
/// The relative preview URL is resolved against `base_url` before the fetch.
pub async fn scrape_word_page(
    client: &Client,
    base_url: &Url,
    word: &WordPreview,
) -> Result<WordData> {
    let url = base_url.join(&word.url)?;
    let body = fetch_page(client, &url).await?;
    Ok(parse_word_page(word, &body))
}

/// Scrapes all words in order, streaming each batch to `writer`
///
/// Records are written in input order (batch i before batch i+1, and within
/// a batch in the position the preview had, not completion order). On the
/// first failure the run aborts with that error and the array is left open
/// on disk; on success the array is closed.
///
/// # Arguments
///
/// * `client` - Shared HTTP client for the run
/// * `base_url` - Base URL that preview links are resolved against
/// * `words` - Ordered previews to scrape
/// * `writer` - Open JSON array writer; closed here on success
/// * `options` - Connection limit and batch size
pub async fn scrape_words<W: Write>(
    client: &Client,
    base_url: &Url,
    words: &[WordPreview],
    writer: &mut JsonArrayWriter<W>,
    options: &ScrapeOptions,
) -> Result<()> {
    // chunks() panics on zero and buffered(0) would never complete
    let connection_limit = options.connection_limit.max(1);
    let batch_size = options.batch_size.max(1);
    let total = words.len();

    for (batch_index, batch) in words.chunks(batch_size).enumerate() {
        let start = batch_index * batch_size;
        tracing::info!(
            "scraping [{}..{}] of {}",
            start,
            start + batch.len(),
            total
        );

        // buffered (not buffer_unordered): bounded fan-out, origin-order
        // fan-in. try_collect fails the whole batch on the first error.
        let records: Vec<WordData> = stream::iter(batch)
            .map(|word| scrape_word_page(client, base_url, word))
            .buffered(connection_limit)
            .try_collect()
            .await?;

        writer.write_batch(&records)?;
    }

    writer.finish()
}
