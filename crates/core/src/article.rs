//! Extracted article representation.

use serde::Serialize;
use url::Url;

use crate::sentiment::split_sentences;

/// An article's text and structural facts, as pulled from one HTML page.
///
/// The word and sentence counts are derived from the body at construction
/// time so every downstream consumer sees the same numbers. `url` is `None`
/// when the HTML came from a file or stdin rather than the network.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDocument {
    /// Where the article was fetched from, if it was fetched at all.
    #[serde(serialize_with = "serialize_url")]
    pub url: Option<Url>,
    /// Page title, or the `"No title found"` placeholder.
    pub title: String,
    /// Paragraph text joined with single newlines.
    pub body: String,
    /// Distinct outbound links pointing at other hosts.
    pub external_link_count: usize,
    /// Whitespace-separated tokens in the body.
    pub word_count: usize,
    /// Sentences in the body, per [`split_sentences`].
    pub sentence_count: usize,
}

impl ArticleDocument {
    /// Builds a document and derives its word and sentence counts.
    pub fn new(url: Option<Url>, title: String, body: String, external_link_count: usize) -> Self {
        let word_count = body.split_whitespace().count();
        let sentence_count = split_sentences(&body).len();

        Self { url, title, body, external_link_count, word_count, sentence_count }
    }

    /// True when the body holds anything beyond whitespace.
    ///
    /// Every analyzer requires this to hold; see
    /// [`analyze_document`](crate::analysis::analyze_document).
    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

fn serialize_url<S>(url: &Option<Url>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match url {
        Some(u) => serializer.serialize_str(u.as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_counts() {
        let doc = ArticleDocument::new(
            None,
            "Title".to_string(),
            "First sentence here. Second one!\nThird line".to_string(),
            2,
        );
        assert_eq!(doc.word_count, 7);
        assert_eq!(doc.sentence_count, 3);
        assert_eq!(doc.external_link_count, 2);
    }

    #[test]
    fn test_has_content() {
        let doc = ArticleDocument::new(None, "T".to_string(), "Some text.".to_string(), 0);
        assert!(doc.has_content());

        let empty = ArticleDocument::new(None, "T".to_string(), "   \n  ".to_string(), 0);
        assert!(!empty.has_content());
        assert_eq!(empty.sentence_count, 0);
    }

    #[test]
    fn test_serializes_url_as_string() {
        let url = Url::parse("https://example.com/story").unwrap();
        let doc = ArticleDocument::new(Some(url), "T".to_string(), "Body.".to_string(), 0);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["url"], "https://example.com/story");
        assert_eq!(json["word_count"], 1);
    }

    #[test]
    fn test_serializes_missing_url_as_null() {
        let doc = ArticleDocument::new(None, "T".to_string(), "Body.".to_string(), 0);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["url"].is_null());
    }
}
