//! Article analysis: topic, tone, loaded language, and credibility.
//!
//! Each analyzer is independent and pure, taking the extracted document and
//! its own configuration. [`analyze_document`] runs all four over one
//! document, sharing a single sentiment pass so the tone section and the
//! credibility formula always see the same subjectivity.

pub mod bias;
pub mod credibility;
pub mod sentiment;
pub mod topic;

pub use bias::{BiasLexicon, BiasReading};
pub use credibility::CredibilityReading;
pub use sentiment::{SentimentReading, Tone};
pub use topic::{Taxonomy, TopicCategory};

use serde::Serialize;

use crate::article::ArticleDocument;
use crate::sentiment::SentimentAnalyzer;
use crate::{NewslensError, Result};

/// Everything the analyzers concluded about one article.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub topic: String,
    pub sentiment: SentimentReading,
    pub bias: BiasReading,
    pub credibility: CredibilityReading,
}

/// Runs every analyzer over an extracted document.
///
/// # Errors
///
/// Returns [`NewslensError::EmptyBody`] when the document body is empty or
/// whitespace: scoring nothing would quietly report a neutral, objective,
/// uncategorized article, which is worse than failing.
///
/// # Example
///
/// ```rust
/// use newslens_core::analysis::{analyze_document, BiasLexicon, Taxonomy};
/// use newslens_core::sentiment::SentimentAnalyzer;
/// use newslens_core::ArticleDocument;
///
/// let doc = ArticleDocument::new(
///     None,
///     "Vote".to_string(),
///     "The senate election was a shocking disaster. Voters were angry.".to_string(),
///     0,
/// );
/// let result = analyze_document(
///     &doc,
///     &Taxonomy::default(),
///     &BiasLexicon::default(),
///     &SentimentAnalyzer::default(),
/// )
/// .unwrap();
/// assert_eq!(result.topic, "Politics");
/// assert!(result.bias.score >= 2);
/// ```
pub fn analyze_document(
    document: &ArticleDocument,
    taxonomy: &Taxonomy,
    bias_lexicon: &BiasLexicon,
    analyzer: &SentimentAnalyzer,
) -> Result<AnalysisResult> {
    if !document.has_content() {
        return Err(NewslensError::EmptyBody);
    }

    let scores = analyzer.analyze(&document.body);

    Ok(AnalysisResult {
        topic: taxonomy.classify(&document.body),
        sentiment: SentimentReading::from_scores(scores),
        bias: bias_lexicon.detect(&document.body),
        credibility: CredibilityReading::from_inputs(
            scores.subjectivity,
            document.sentence_count,
            document.external_link_count,
        ),
    })
}
