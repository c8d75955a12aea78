//! End-to-end analysis API.
//!
//! This module provides the primary API for turning a news page into an
//! analysis report. The main entry point is the [`MediaAnalyzer`] struct,
//! along with convenience functions like [`analyze`] and
//! [`fetch_and_analyze`].
//!
//! # Example
//!
//! ```rust
//! use newslens_core::pipeline::analyze;
//!
//! let html = r#"
//!     <html><head><title>Senate Vote</title></head>
//!     <body><article><p>The senate passed the election law.</p></article></body></html>
//! "#;
//! let (document, result) = analyze(html).unwrap();
//! assert_eq!(document.title, "Senate Vote");
//! assert_eq!(result.topic, "Politics");
//! ```

use url::Url;

use crate::analysis::{AnalysisResult, BiasLexicon, Taxonomy, analyze_document};
use crate::article::ArticleDocument;
use crate::extract::{ExtractConfig, extract_article};
use crate::fetch::FetchConfig;
#[cfg(feature = "fetch")]
use crate::fetch::{RetryPolicy, fetch_url, fetch_with_retry};
use crate::sentiment::{SentimentAnalyzer, SentimentLexicon};
use crate::{NewslensError, Result};

/// Configuration for the analysis pipeline.
///
/// Bundles the data every analyzer consumes: the topic taxonomy, the
/// loaded-word lexicon, the sentiment lexicon, and the extraction and fetch
/// settings. Swapping a field swaps the behavior; nothing else in the
/// pipeline hardcodes word lists.
///
/// # Example
///
/// ```rust
/// use newslens_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .timeout(30)
///     .build();
/// assert_eq!(config.fetch.timeout, 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Ordered topic categories used for classification.
    pub taxonomy: Taxonomy,

    /// Loaded words and phrases scanned during bias detection.
    pub bias_lexicon: BiasLexicon,

    /// Scored vocabulary for sentiment analysis.
    pub sentiment_lexicon: SentimentLexicon,

    /// HTML cleanup and extraction settings.
    pub extract: ExtractConfig,

    /// HTTP settings used by the fetching entry points.
    pub fetch: FetchConfig,
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
///
/// # Example
///
/// ```rust
/// use newslens_core::analysis::{Taxonomy, TopicCategory};
/// use newslens_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .taxonomy(Taxonomy::new(vec![TopicCategory::new("Weather", &["storm", "flood"])]))
///     .user_agent("newsbot/1.0")
///     .build();
/// ```
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the topic taxonomy.
    pub fn taxonomy(mut self, value: Taxonomy) -> Self {
        self.config.taxonomy = value;
        self
    }

    /// Sets the loaded-word lexicon.
    pub fn bias_lexicon(mut self, value: BiasLexicon) -> Self {
        self.config.bias_lexicon = value;
        self
    }

    /// Sets the sentiment lexicon.
    pub fn sentiment_lexicon(mut self, value: SentimentLexicon) -> Self {
        self.config.sentiment_lexicon = value;
        self
    }

    /// Sets the extraction settings.
    pub fn extract(mut self, value: ExtractConfig) -> Self {
        self.config.extract = value;
        self
    }

    /// Sets the HTTP fetch settings.
    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Sets the fetch timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent header for fetches.
    pub fn user_agent(mut self, value: &str) -> Self {
        self.config.fetch.user_agent = value.to_string();
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for article analysis.
///
/// Owns the configured lexicons and runs extraction plus all four analyzers
/// in one call. Reuse one instance across articles; construction compiles
/// the bias patterns.
///
/// # Example
///
/// ```rust
/// use newslens_core::MediaAnalyzer;
///
/// let analyzer = MediaAnalyzer::new();
/// let html = "<html><body><article><p>The stock market rallied.</p></article></body></html>";
/// let (_document, result) = analyzer.analyze_html(html).unwrap();
/// assert_eq!(result.topic, "Business");
/// ```
pub struct MediaAnalyzer {
    config: AnalyzerConfig,
    sentiment: SentimentAnalyzer,
}

impl MediaAnalyzer {
    /// Creates an analyzer with the default taxonomy and lexicons.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer from a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let sentiment = SentimentAnalyzer::new(config.sentiment_lexicon.clone());
        Self { config, sentiment }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Extracts and analyzes HTML with no source URL.
    ///
    /// Relative links cannot be resolved without a base, so only absolute
    /// outbound links contribute to the credibility bonus.
    pub fn analyze_html(&self, html: &str) -> Result<(ArticleDocument, AnalysisResult)> {
        self.run(html, None)
    }

    /// Extracts and analyzes HTML fetched from `url`.
    ///
    /// # Errors
    ///
    /// Returns [`NewslensError::InvalidUrl`] if `url` does not parse.
    pub fn analyze_html_with_url(
        &self,
        html: &str,
        url: &str,
    ) -> Result<(ArticleDocument, AnalysisResult)> {
        let base = Url::parse(url).map_err(|e| NewslensError::InvalidUrl(e.to_string()))?;
        self.run(html, Some(base))
    }

    /// Fetches `url` and analyzes the page in one step.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use newslens_core::MediaAnalyzer;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> newslens_core::Result<()> {
    /// let analyzer = MediaAnalyzer::new();
    /// let (document, result) = analyzer.fetch_and_analyze("https://example.com/story").await?;
    /// println!("{}: {}", document.title, result.topic);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze(&self, url: &str) -> Result<(ArticleDocument, AnalysisResult)> {
        let html = fetch_url(url, &self.config.fetch).await?;
        self.analyze_html_with_url(&html, url)
    }

    /// Fetches `url` with a retry policy, then analyzes the page.
    ///
    /// The policy is consulted after each failed attempt; see
    /// [`fetch_with_retry`] for the abort semantics.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_analyze_with_retry<P>(
        &self,
        url: &str,
        policy: &mut P,
    ) -> Result<(ArticleDocument, AnalysisResult)>
    where
        P: RetryPolicy,
    {
        let html = fetch_with_retry(url, &self.config.fetch, policy).await?;
        self.analyze_html_with_url(&html, url)
    }

    fn run(&self, html: &str, base: Option<Url>) -> Result<(ArticleDocument, AnalysisResult)> {
        let document = extract_article(html, base.as_ref(), &self.config.extract)?;
        let result = analyze_document(
            &document,
            &self.config.taxonomy,
            &self.config.bias_lexicon,
            &self.sentiment,
        )?;

        Ok((document, result))
    }
}

impl Default for MediaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for one-liner analysis with defaults.
///
/// # Errors
///
/// Returns [`NewslensError::NoParagraphs`] when the page yields no
/// paragraph text.
pub fn analyze(html: &str) -> Result<(ArticleDocument, AnalysisResult)> {
    MediaAnalyzer::new().analyze_html(html)
}

/// Convenience function for one-liner analysis with URL context.
pub fn analyze_with_url(html: &str, url: &str) -> Result<(ArticleDocument, AnalysisResult)> {
    MediaAnalyzer::new().analyze_html_with_url(html, url)
}

/// Convenience function: fetch a URL and analyze it with defaults.
#[cfg(feature = "fetch")]
pub async fn fetch_and_analyze(url: &str) -> Result<(ArticleDocument, AnalysisResult)> {
    MediaAnalyzer::new().fetch_and_analyze(url).await
}
