//! Word-page field extraction
//!
//! Pure functions mapping a detail page's HTML to the [`WordData`] fields.
//! Selector misses never raise: scalar fields degrade to the empty string,
//! the per-sense learner-example fields degrade to null, and a page without
//! sense blocks yields an empty sense list. That asymmetry matches what
//! downstream consumers of the artifact already expect.

use crate::words::{WordData, WordPreview, WordSense};
use scraper::{ElementRef, Html, Selector};

/// Parses a word detail page into a full record
///
/// All preview fields are copied through unchanged; the page only
/// contributes `pronunciation`, `word_type` and `senses`.
pub fn parse_word_page(preview: &WordPreview, html: &str) -> WordData {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let word_type = scalar_text(root, ".pos");
    let pronunciation = scalar_text(root, ".written");

    let mut senses = Vec::new();
    if let Ok(sense_selector) = Selector::parse(".info.sense") {
        for block in root.select(&sense_selector) {
            senses.push(parse_sense(block));
        }
    }

    WordData::from_preview(preview, pronunciation, word_type, senses)
}

/// Extracts one sense block's sub-fields independently of the others
fn parse_sense(block: ElementRef) -> WordSense {
    WordSense {
        definition: scalar_text(block, "span.definition"),
        label: scalar_text(block, ".label"),
        dict_example: collected_text(block, ".example p.blockquote"),
        learner_example: first_text(block, ".learnerexamp"),
        learner_example_cite: first_text(block, ".learnerexamp span"),
    }
}

/// First text node under any match of `selector`, untrimmed; None on miss
fn first_text(scope: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    scope
        .select(&selector)
        .flat_map(|element| element.text())
        .next()
        .map(str::to_string)
}

/// First-match-or-empty rule for scalar fields: trimmed, never null
fn scalar_text(scope: ElementRef, selector: &str) -> String {
    first_text(scope, selector)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Every descendant text node under every match, joined with no separator,
/// preserving document order
fn collected_text(scope: ElementRef, selector: &str) -> String {
    match Selector::parse(selector) {
        Ok(selector) => scope
            .select(&selector)
            .flat_map(|element| element.text())
            .collect(),
        Err(_) => String::new(),
    }
}
