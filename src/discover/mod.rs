//! Word index discovery
//!
//! The EVP wordlist is served as one HTML table behind a filter form. One
//! POST with an empty filter and `limit=0` returns every row; each row is
//! parsed into a [`WordPreview`] pointing at the word's detail page.

use crate::words::WordPreview;
use crate::{EvpError, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Index endpoint path under the base URL
const WORDLIST_PATH: &str = "wordlists/evp";

/// The fixed filter form body, including the upstream form token. An empty
/// filter with `limit=0` makes the server return the full unpaginated table.
const EVP_FORM_BODY: &str = "filter_search=&filter_custom_Topic=&filter_custom_Parts=&filter_custom_Category=&filter_custom_Grammar=&filter_custom_Usage=&filter_custom_Prefix=&filter_custom_Suffix=&limit=0&directionTable=asc&sortTable=base&task=&boxchecked=0&filter_order=pos_rank&filter_order_Dir=asc&ce91224c5693e21d15ac97cc105e6520=1";

/// Discovers the full word preview list from the index endpoint
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - Base URL of the EVP site
///
/// # Returns
///
/// * `Ok(Vec<WordPreview>)` - One preview per index row, in table order
/// * `Err(EvpError)` - Request failed or returned a non-success status
pub async fn discover_words(client: &Client, base_url: &Url) -> Result<Vec<WordPreview>> {
    let endpoint = base_url.join(WORDLIST_PATH)?;
    tracing::info!("discovering word previews from {}", endpoint);

    let response = client
        .post(endpoint.clone())
        .header("content-type", "application/x-www-form-urlencoded")
        .body(EVP_FORM_BODY)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| EvpError::Http {
            url: endpoint.to_string(),
            source,
        })?;

    let body = response.text().await.map_err(|source| EvpError::Http {
        url: endpoint.to_string(),
        source,
    })?;

    let words = parse_word_index(&body);
    tracing::info!("discovered {} word previews", words.len());
    Ok(words)
}

/// Parses the index table into preview records, preserving row order
///
/// Cells 1-5 are raw text (null when the cell is empty); cell 6 holds the
/// link to the detail page. Rows without a link are skipped with a warning,
/// since such a preview could never be fetched.
pub fn parse_word_index(html: &str) -> Vec<WordPreview> {
    let document = Html::parse_document(html);
    let mut words = Vec::new();

    let Ok(row_selector) = Selector::parse("#reportList > tbody > tr") else {
        return words;
    };

    for row in document.select(&row_selector) {
        let Some(url) = cell_attr(row, "td:nth-child(6) a", "href") else {
            tracing::warn!("skipping index row without a detail link");
            continue;
        };

        words.push(WordPreview {
            baseword: cell_text(row, "td:nth-child(1)"),
            guideword: cell_text(row, "td:nth-child(2)"),
            level: cell_text(row, "td:nth-child(3) span"),
            partofspeech: cell_text(row, "td:nth-child(4)"),
            topic: cell_text(row, "td:nth-child(5)"),
            url,
        });
    }

    words
}

/// First text node under the first match, raw; None on miss or empty cell
fn cell_text(row: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    row.select(&selector)
        .flat_map(|element| element.text())
        .next()
        .map(str::to_string)
}

/// Attribute of the first match; None on miss
fn cell_attr(row: ElementRef, selector: &str, attribute: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    row.select(&selector)
        .next()
        .and_then(|element| element.value().attr(attribute))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_PAGE: &str = r#"
        <html><body>
        <table id="reportList">
        <tbody>
        <tr>
            <td>answer</td>
            <td>(REACT)</td>
            <td><span>A1</span></td>
            <td>verb</td>
            <td></td>
            <td><a href="/wordlists/answer_1">view</a></td>
        </tr>
        <tr>
            <td>answer</td>
            <td>(SOLUTION)</td>
            <td><span>A2</span></td>
            <td>noun</td>
            <td>communication</td>
            <td><a href="/wordlists/answer_2">view</a></td>
        </tr>
        </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_index_rows_in_order() {
        let words = parse_word_index(INDEX_PAGE);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].url, "/wordlists/answer_1");
        assert_eq!(words[1].url, "/wordlists/answer_2");
    }

    #[test]
    fn test_parse_index_cells() {
        let words = parse_word_index(INDEX_PAGE);
        let first = &words[0];
        assert_eq!(first.baseword.as_deref(), Some("answer"));
        assert_eq!(first.guideword.as_deref(), Some("(REACT)"));
        assert_eq!(first.level.as_deref(), Some("A1"));
        assert_eq!(first.partofspeech.as_deref(), Some("verb"));
        assert_eq!(first.topic, None);
        assert_eq!(words[1].topic.as_deref(), Some("communication"));
    }

    #[test]
    fn test_row_without_link_is_skipped() {
        let html = r#"
            <html><body>
            <table id="reportList"><tbody>
            <tr><td>orphan</td><td></td><td></td><td></td><td></td><td></td></tr>
            <tr>
                <td>kept</td><td></td><td></td><td></td><td></td>
                <td><a href="/wordlists/kept_1">view</a></td>
            </tr>
            </tbody></table>
            </body></html>
        "#;
        let words = parse_word_index(html);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].baseword.as_deref(), Some("kept"));
    }

    #[test]
    fn test_no_table_yields_empty_list() {
        let words = parse_word_index("<html><body><p>maintenance</p></body></html>");
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn test_discover_posts_filter_form() {
        use wiremock::matchers::{body_string_contains, header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wordlists/evp"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("limit=0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(INDEX_PAGE))
            .mount(&server)
            .await;

        let client = crate::scraper::build_http_client(1).unwrap();
        let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();
        let words = discover_words(&client, &base_url).await.unwrap();
        assert_eq!(words.len(), 2);
    }
}
