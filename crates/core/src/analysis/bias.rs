//! Loaded-language detection.
//!
//! Scans the article for emotionally charged or leading words. Each lexicon
//! entry counts at most once no matter how often it repeats, so the score
//! reflects vocabulary breadth rather than article length.

use regex::Regex;
use serde::Serialize;

/// One lexicon entry with its compiled whole-word pattern.
#[derive(Debug, Clone)]
struct BiasEntry {
    phrase: String,
    pattern: Regex,
}

/// Lexicon of loaded words and phrases.
///
/// Matching is case-insensitive and bounded at word edges, so "good" does
/// not fire inside "goods". Entries may span several words ("of course") or
/// carry hyphens ("so-called").
#[derive(Debug, Clone)]
pub struct BiasLexicon {
    entries: Vec<BiasEntry>,
}

impl BiasLexicon {
    /// Builds a lexicon from phrases, preserving their order.
    ///
    /// Entry order matters: found words are reported in lexicon order, and
    /// the report's sample shows the first few.
    pub fn new(phrases: &[&str]) -> Self {
        let entries = phrases
            .iter()
            .map(|phrase| {
                let pattern =
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap();
                BiasEntry { phrase: (*phrase).to_string(), pattern }
            })
            .collect();

        Self { entries }
    }

    /// Number of phrases in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores `text` for loaded language.
    ///
    /// # Example
    ///
    /// ```rust
    /// use newslens_core::analysis::BiasLexicon;
    ///
    /// let reading = BiasLexicon::default().detect("A shocking disaster, a miracle escape.");
    /// assert_eq!(reading.score, 3);
    /// assert_eq!(reading.assessment, "Low potential for bias");
    /// ```
    pub fn detect(&self, text: &str) -> BiasReading {
        let words_found: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.phrase.clone())
            .collect();

        let score = words_found.len();

        BiasReading { assessment: bias_assessment(score).to_string(), score, words_found }
    }
}

/// Result of a loaded-language scan.
#[derive(Debug, Clone, Serialize)]
pub struct BiasReading {
    /// Tier label derived from `score`.
    pub assessment: String,
    /// Distinct lexicon entries present in the text.
    pub score: usize,
    /// The entries that matched, in lexicon order.
    pub words_found: Vec<String>,
}

/// Maps a distinct-word score to its tier label.
pub fn bias_assessment(score: usize) -> &'static str {
    if score > 15 {
        "High potential for bias"
    } else if score > 7 {
        "Moderate potential for bias"
    } else if score > 0 {
        "Low potential for bias"
    } else {
        "Appears to be objective"
    }
}

impl Default for BiasLexicon {
    fn default() -> Self {
        Self::new(&[
            "alarming",
            "amazing",
            "appalling",
            "awful",
            "bad",
            "beautiful",
            "best",
            "blatant",
            "breakthrough",
            "catastrophe",
            "certainly",
            "chaotic",
            "clearly",
            "collusion",
            "conspiracy",
            "corrupt",
            "covert",
            "crisis",
            "danger",
            "deadly",
            "decent",
            "definitely",
            "disaster",
            "disgraceful",
            "disgusting",
            "drastic",
            "duty",
            "effective",
            "excellent",
            "exceptional",
            "extreme",
            "failure",
            "fair",
            "fantastic",
            "fear-mongering",
            "finally",
            "flawless",
            "foolish",
            "freedom",
            "frenzy",
            "frightening",
            "good",
            "great",
            "hate",
            "healthy",
            "heroic",
            "historic",
            "honest",
            "horrible",
            "huge",
            "immediately",
            "important",
            "impossible",
            "incompetent",
            "incredible",
            "inevitable",
            "inflammatory",
            "injustice",
            "inspirational",
            "irresponsible",
            "justice",
            "landmark",
            "likely",
            "looming",
            "massive",
            "masterpiece",
            "meaningful",
            "miracle",
            "misleading",
            "monumental",
            "must",
            "myth",
            "obviously",
            "of course",
            "outrageous",
            "panic",
            "patriotic",
            "perfect",
            "pivotal",
            "poor",
            "propaganda",
            "radical",
            "reasonable",
            "revolutionary",
            "rigged",
            "scandal",
            "scare",
            "secret",
            "shameful",
            "shocking",
            "significant",
            "smart",
            "so-called",
            "special",
            "stupid",
            "successful",
            "suddenly",
            "superb",
            "terrible",
            "terrifying",
            "threat",
            "timely",
            "tiny",
            "tragic",
            "tremendous",
            "true",
            "trust",
            "truth",
            "unacceptable",
            "unbelievable",
            "undoubtedly",
            "unfair",
            "unfortunate",
            "unprecedented",
            "urgent",
            "victory",
            "violent",
            "vital",
            "wonderful",
            "worst",
            "wrong",
        ])
    }
}
