//! HTTP client construction and single-page fetching
//!
//! One client is built per run and shared across all fetches. The upstream
//! site runs on a small CMS instance, so the keepalive pool is sized to the
//! connection limit rather than reqwest's defaults.

use crate::{EvpError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for both discovery and word-page fetches
///
/// # Arguments
///
/// * `connection_limit` - Maximum concurrent requests the run will issue;
///   also used to size the keepalive pool
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(EvpError)` - Failed to build client
pub fn build_http_client(connection_limit: usize) -> Result<Client> {
    let user_agent = format!("evp-scrape/{}", env!("CARGO_PKG_VERSION"));

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(connection_limit)
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches one page and returns its body text
///
/// Non-success HTTP statuses count as fetch failures, so a single bad page
/// aborts the batch it belongs to. Errors carry the offending URL.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| EvpError::Http {
            url: url.to_string(),
            source,
        })?;

    let body = response.text().await.map_err(|source| EvpError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("fetched {} ({} bytes)", url, body.len());
    Ok(body)
}
