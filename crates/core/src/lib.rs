pub mod analysis;
pub mod article;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod formatters;
pub mod parse;
pub mod pipeline;
pub mod preprocess;
pub mod sentiment;

pub use analysis::{
    AnalysisResult, BiasLexicon, BiasReading, CredibilityReading, SentimentReading, Taxonomy, Tone,
    TopicCategory, analyze_document,
};
pub use article::ArticleDocument;
pub use error::{NewslensError, Result};
pub use extract::{ExtractConfig, extract_article};
pub use fetch::FetchConfig;
pub use fetch::{LimitedRetry, NoRetry, RetryFn, RetryPolicy, validate_url};
pub use fetch::{fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_url, fetch_with_retry};
pub use formatters::{render_json, render_report};
pub use parse::Document;
pub use pipeline::{
    AnalyzerConfig, AnalyzerConfigBuilder, MediaAnalyzer, analyze, analyze_with_url,
};
#[cfg(feature = "fetch")]
pub use pipeline::fetch_and_analyze;
#[doc(hidden)]
pub use preprocess::PreprocessConfig;
pub use preprocess::preprocess_html;
pub use sentiment::{SentimentAnalyzer, SentimentLexicon, TextSentiment, split_sentences};
