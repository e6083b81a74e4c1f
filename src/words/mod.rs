//! Record types for the two scraping phases
//!
//! Discovery produces [`WordPreview`] records; the batched scraper extends
//! each preview into a [`WordData`] by copying every preview field and adding
//! the detail-page fields. Records are never mutated in place once built.

use serde::{Deserialize, Serialize};

/// Minimal metadata about a word, enough to locate its detail page.
///
/// The five descriptive fields come from index table cells and are null when
/// the upstream cell is empty. `url` is relative and must be resolved against
/// [`crate::BASE_URL`] before fetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPreview {
    pub baseword: Option<String>,
    pub guideword: Option<String>,
    pub level: Option<String>,
    pub partofspeech: Option<String>,
    pub topic: Option<String>,
    pub url: String,
}

/// One distinct meaning of a word, with its own definition and examples.
///
/// `definition`, `label` and `dict_example` are always present, degrading to
/// the empty string on a selector miss. The learner-example pair is null when
/// that markup section is missing entirely; downstream consumers rely on the
/// distinction, so it must not be collapsed into uniform null handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSense {
    pub definition: String,
    pub label: String,
    /// Concatenation of every text fragment inside the dictionary example
    /// block, document order, no separator.
    pub dict_example: String,
    pub learner_example: Option<String>,
    pub learner_example_cite: Option<String>,
}

/// A [`WordPreview`] extended with the fields parsed from its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordData {
    pub baseword: Option<String>,
    pub guideword: Option<String>,
    pub level: Option<String>,
    pub partofspeech: Option<String>,
    pub topic: Option<String>,
    pub url: String,
    /// Empty string if the page carries no pronunciation.
    pub pronunciation: String,
    /// Empty string if the page carries no part-of-speech marker.
    pub word_type: String,
    /// Senses in document order; empty if the page has no sense blocks.
    pub senses: Vec<WordSense>,
}

impl WordData {
    /// Builds a full record from a preview plus the detail-page fields.
    ///
    /// Every preview field is copied through unchanged.
    pub fn from_preview(
        preview: &WordPreview,
        pronunciation: String,
        word_type: String,
        senses: Vec<WordSense>,
    ) -> Self {
        Self {
            baseword: preview.baseword.clone(),
            guideword: preview.guideword.clone(),
            level: preview.level.clone(),
            partofspeech: preview.partofspeech.clone(),
            topic: preview.topic.clone(),
            url: preview.url.clone(),
            pronunciation,
            word_type,
            senses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_preview() -> WordPreview {
        WordPreview {
            baseword: Some("answer".to_string()),
            guideword: Some("(REACT)".to_string()),
            level: Some("A1".to_string()),
            partofspeech: Some("verb".to_string()),
            topic: None,
            url: "/british-and-american-english/answer_1".to_string(),
        }
    }

    #[test]
    fn test_from_preview_copies_all_fields() {
        let preview = sample_preview();
        let data = WordData::from_preview(
            &preview,
            "ˈɑːn.sər".to_string(),
            "verb".to_string(),
            vec![],
        );

        assert_eq!(data.baseword, preview.baseword);
        assert_eq!(data.guideword, preview.guideword);
        assert_eq!(data.level, preview.level);
        assert_eq!(data.partofspeech, preview.partofspeech);
        assert_eq!(data.topic, preview.topic);
        assert_eq!(data.url, preview.url);
        assert_eq!(data.pronunciation, "ˈɑːn.sər");
        assert_eq!(data.word_type, "verb");
        assert!(data.senses.is_empty());
    }

    #[test]
    fn test_missing_learner_example_serializes_as_null() {
        let sense = WordSense {
            definition: "to react".to_string(),
            label: "".to_string(),
            dict_example: "".to_string(),
            learner_example: None,
            learner_example_cite: None,
        };

        let json = serde_json::to_string(&sense).unwrap();
        assert!(json.contains("\"learner_example\":null"));
        assert!(json.contains("\"learner_example_cite\":null"));
        // Scalar misses stay empty strings, never null
        assert!(json.contains("\"label\":\"\""));
    }

    #[test]
    fn test_preview_round_trip() {
        let previews = vec![sample_preview()];
        let json = serde_json::to_string_pretty(&previews).unwrap();
        let parsed: Vec<WordPreview> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, previews);
    }
}
