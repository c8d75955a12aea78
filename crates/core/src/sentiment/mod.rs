//! Rule-based sentiment scoring for article prose.
//!
//! The analyzer walks the text word by word against a weighted lexicon,
//! flipping polarity after negations ("not", "never", "n't" contractions)
//! and scaling it after intensifiers ("very", "slightly"). Scores are the
//! mean over matched words, so article length does not inflate them.
//!
//! This is a transparent approximation, not a language model: sarcasm,
//! idiom, and quoted speech will fool it. Scores are inputs to the report's
//! tone and credibility sections, never a verdict on their own.

pub mod lexicon;

pub use lexicon::{SentimentLexicon, WordSentiment};

use regex::Regex;

/// Polarity and subjectivity for a span of text.
///
/// Polarity runs from -1.0 (negative) to 1.0 (positive); subjectivity from
/// 0.0 (objective) to 1.0 (subjective). Text with no scored words reads as
/// `(0.0, 0.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl TextSentiment {
    pub const NEUTRAL: TextSentiment = TextSentiment { polarity: 0.0, subjectivity: 0.0 };
}

/// Scores text against a [`SentimentLexicon`].
///
/// # Example
///
/// ```rust
/// use newslens_core::sentiment::SentimentAnalyzer;
///
/// let analyzer = SentimentAnalyzer::default();
/// let upbeat = analyzer.analyze("An excellent result and a wonderful day.");
/// let grim = analyzer.analyze("A terrible failure and an awful outcome.");
/// assert!(upbeat.polarity > 0.0);
/// assert!(grim.polarity < 0.0);
/// ```
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
    token_re: Regex,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        // Words may carry internal apostrophes or hyphens ("don't", "so-called").
        let token_re = Regex::new(r"[a-z0-9]+(?:['’-][a-z0-9]+)*").unwrap();
        Self { lexicon, token_re }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Scores `text`, returning mean polarity and subjectivity over the
    /// words found in the lexicon.
    ///
    /// Negation and intensity carry forward to the next scored word within
    /// the same sentence only, so a trailing "not" never colors the next
    /// paragraph.
    pub fn analyze(&self, text: &str) -> TextSentiment {
        let lowered = text.to_lowercase();
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut hits = 0usize;

        for sentence in split_sentences(&lowered) {
            let mut negate_next = false;
            let mut intensity = 1.0f64;

            for token in self.token_re.find_iter(sentence).map(|m| m.as_str()) {
                if self.lexicon.negations.contains(token) || token.ends_with("n't") {
                    negate_next = true;
                    continue;
                }
                if let Some(multiplier) = self.lexicon.intensifiers.get(token) {
                    intensity *= multiplier;
                    continue;
                }
                if let Some(entry) = self.lexicon.words.get(token) {
                    let mut polarity = entry.polarity * intensity;
                    if negate_next {
                        polarity = -polarity;
                    }
                    polarity_sum += polarity.clamp(-1.0, 1.0);
                    subjectivity_sum += (entry.subjectivity * intensity).clamp(0.0, 1.0);
                    hits += 1;
                    negate_next = false;
                    intensity = 1.0;
                }
            }
        }

        if hits == 0 {
            return TextSentiment::NEUTRAL;
        }

        TextSentiment {
            polarity: (polarity_sum / hits as f64).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / hits as f64).clamp(0.0, 1.0),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(SentimentLexicon::default())
    }
}

/// Splits text into sentences on runs of `.`, `!`, `?`, or line breaks.
///
/// Whitespace-only segments are dropped, so an ellipsis or a blank line does
/// not produce a phantom sentence. Abbreviations ("U.S.") split too; counts
/// derived from this are approximate by design.
///
/// # Example
///
/// ```rust
/// use newslens_core::sentiment::split_sentences;
///
/// let sentences = split_sentences("One. Two! Three?\nFour");
/// assert_eq!(sentences.len(), 4);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let re = Regex::new(r"[.!?]+|\r?\n+").unwrap();
    re.split(text).map(str::trim).filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze("The team delivered an excellent and wonderful product.");
        assert!(result.polarity > 0.5);
        assert!(result.subjectivity > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze("A terrible disaster caused awful damage.");
        assert!(result.polarity < -0.5);
    }

    #[test]
    fn test_no_scored_words_is_neutral() {
        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze("The committee convened on Tuesday at noon.");
        assert_eq!(result, TextSentiment::NEUTRAL);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = SentimentAnalyzer::default();
        assert_eq!(analyzer.analyze(""), TextSentiment::NEUTRAL);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::default();
        let plain = analyzer.analyze("The plan is good.");
        let negated = analyzer.analyze("The plan is not good.");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert_eq!(plain.polarity, -negated.polarity);
    }

    #[test]
    fn test_contraction_negation() {
        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze("This isn't good.");
        assert!(result.polarity < 0.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let analyzer = SentimentAnalyzer::default();
        let plain = analyzer.analyze("A good decision.");
        let boosted = analyzer.analyze("A very good decision.");
        let softened = analyzer.analyze("A slightly good decision.");
        assert!(boosted.polarity > plain.polarity);
        assert!(softened.polarity < plain.polarity);
    }

    #[test]
    fn test_negation_does_not_cross_sentences() {
        let analyzer = SentimentAnalyzer::default();
        // "no" ends the first sentence; "good" in the second stays positive.
        let result = analyzer.analyze("The answer was no. The outcome was good.");
        assert!(result.polarity > 0.0);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let analyzer = SentimentAnalyzer::default();
        let result = analyzer.analyze(
            "Incredibly terrible, absolutely awful, extremely horrible, completely disgusting.",
        );
        assert!(result.polarity >= -1.0);
        assert!(result.subjectivity <= 1.0);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.insert("bullish", 0.8, 0.6);
        let analyzer = SentimentAnalyzer::new(lexicon);
        let result = analyzer.analyze("Traders turned bullish overnight.");
        assert!(result.polarity > 0.7);
    }

    #[test]
    fn test_split_sentences_basic() {
        assert_eq!(split_sentences("One. Two! Three?"), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_split_sentences_newlines_and_runs() {
        let sentences = split_sentences("First line\nSecond line...\n\nThird");
        assert_eq!(sentences, vec!["First line", "Second line", "Third"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }
}
