//! JSON analysis report.

use serde::Serialize;

use crate::Result;
use crate::analysis::AnalysisResult;
use crate::article::ArticleDocument;

#[derive(Serialize)]
struct Report<'a> {
    article: &'a ArticleDocument,
    analysis: &'a AnalysisResult,
}

/// Renders the document and its analysis as pretty-printed JSON.
///
/// The shape mirrors the crate types: an `article` object with the
/// extracted facts and an `analysis` object with one entry per analyzer.
///
/// # Example
///
/// ```rust
/// use newslens_core::analysis::{analyze_document, BiasLexicon, Taxonomy};
/// use newslens_core::formatters::render_json;
/// use newslens_core::sentiment::SentimentAnalyzer;
/// use newslens_core::ArticleDocument;
///
/// let doc = ArticleDocument::new(None, "T".to_string(), "The vote passed.".to_string(), 0);
/// let result = analyze_document(
///     &doc,
///     &Taxonomy::default(),
///     &BiasLexicon::default(),
///     &SentimentAnalyzer::default(),
/// )
/// .unwrap();
/// let json = render_json(&doc, &result).unwrap();
/// assert!(json.contains("\"topic\": \"Politics\""));
/// ```
pub fn render_json(document: &ArticleDocument, result: &AnalysisResult) -> Result<String> {
    let report = Report { article: document, analysis: result };

    Ok(serde_json::to_string_pretty(&report)?)
}
