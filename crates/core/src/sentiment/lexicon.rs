//! Lexicon data for sentiment scoring.
//!
//! Each entry carries a polarity in `[-1.0, 1.0]` and a subjectivity in
//! `[0.0, 1.0]`. The default lexicon covers general evaluative English as it
//! appears in news prose; domain-specific vocabularies can be layered on top
//! with [`SentimentLexicon::insert`].

use std::collections::{HashMap, HashSet};

/// Polarity and subjectivity weights for a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentiment {
    /// How positive or negative the word reads, from -1.0 to 1.0.
    pub polarity: f64,
    /// How opinionated the word is, from 0.0 (factual) to 1.0 (subjective).
    pub subjectivity: f64,
}

impl WordSentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self { polarity, subjectivity }
    }
}

/// Word lists consulted by the sentiment analyzer.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    /// Scored vocabulary.
    pub words: HashMap<String, WordSentiment>,
    /// Words that flip the polarity of the next scored word.
    pub negations: HashSet<String>,
    /// Words that scale the weight of the next scored word.
    pub intensifiers: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Creates an empty lexicon. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            words: HashMap::new(),
            negations: HashSet::new(),
            intensifiers: HashMap::new(),
        }
    }

    /// Adds or replaces a scored word. Lookup is lowercase.
    pub fn insert(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.words
            .insert(word.to_lowercase(), WordSentiment::new(polarity, subjectivity));
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        let mut words = HashMap::new();

        let entries: &[(&str, f64, f64)] = &[
            // strongly positive
            ("excellent", 1.0, 1.0),
            ("perfect", 1.0, 1.0),
            ("wonderful", 1.0, 1.0),
            ("best", 1.0, 0.3),
            ("outstanding", 0.9, 0.9),
            ("incredible", 0.9, 0.9),
            ("brilliant", 0.9, 0.9),
            ("superb", 0.9, 0.95),
            ("exceptional", 0.9, 0.9),
            ("amazing", 0.85, 0.9),
            ("fantastic", 0.8, 0.9),
            ("beautiful", 0.85, 1.0),
            ("great", 0.8, 0.75),
            ("remarkable", 0.75, 0.75),
            ("impressive", 0.75, 0.85),
            ("masterpiece", 0.9, 0.9),
            ("triumph", 0.8, 0.7),
            ("thrilled", 0.8, 0.9),
            ("delighted", 0.8, 0.9),
            ("flawless", 0.9, 0.95),
            ("heroic", 0.7, 0.8),
            ("miracle", 0.8, 0.9),
            ("breakthrough", 0.6, 0.5),
            ("revolutionary", 0.5, 0.7),
            ("inspirational", 0.7, 0.85),
            ("landmark", 0.4, 0.5),
            ("historic", 0.4, 0.5),
            // positive
            ("good", 0.7, 0.6),
            ("strong", 0.5, 0.5),
            ("success", 0.6, 0.5),
            ("successful", 0.65, 0.7),
            ("win", 0.6, 0.4),
            ("victory", 0.7, 0.5),
            ("gain", 0.4, 0.4),
            ("growth", 0.4, 0.3),
            ("improve", 0.45, 0.4),
            ("improved", 0.45, 0.4),
            ("improvement", 0.45, 0.4),
            ("benefit", 0.45, 0.4),
            ("positive", 0.5, 0.6),
            ("progress", 0.4, 0.4),
            ("promising", 0.5, 0.7),
            ("popular", 0.45, 0.6),
            ("praise", 0.5, 0.6),
            ("praised", 0.5, 0.6),
            ("hope", 0.4, 0.6),
            ("hopeful", 0.5, 0.7),
            ("optimistic", 0.5, 0.7),
            ("confident", 0.5, 0.65),
            ("happy", 0.8, 1.0),
            ("celebrate", 0.6, 0.6),
            ("celebrated", 0.6, 0.6),
            ("love", 0.5, 0.6),
            ("support", 0.3, 0.3),
            ("safe", 0.5, 0.5),
            ("healthy", 0.5, 0.5),
            ("effective", 0.6, 0.9),
            ("efficient", 0.5, 0.7),
            ("innovative", 0.5, 0.7),
            ("fair", 0.45, 0.7),
            ("honest", 0.6, 0.8),
            ("smart", 0.6, 0.8),
            ("reasonable", 0.4, 0.7),
            ("decent", 0.35, 0.6),
            ("stable", 0.3, 0.4),
            ("record", 0.3, 0.4),
            ("boost", 0.4, 0.4),
            ("surge", 0.3, 0.4),
            ("tremendous", 0.7, 0.8),
            ("meaningful", 0.4, 0.6),
            ("special", 0.4, 0.6),
            ("timely", 0.3, 0.6),
            ("vital", 0.4, 0.6),
            ("valuable", 0.5, 0.6),
            ("trust", 0.4, 0.5),
            ("true", 0.35, 0.55),
            ("truth", 0.3, 0.5),
            ("justice", 0.3, 0.4),
            ("freedom", 0.4, 0.5),
            ("patriotic", 0.3, 0.6),
            // mildly subjective, near-neutral polarity
            ("important", 0.4, 1.0),
            ("significant", 0.3, 0.6),
            ("major", 0.2, 0.4),
            ("huge", 0.2, 0.7),
            ("massive", 0.1, 0.6),
            ("big", 0.1, 0.4),
            ("new", 0.1, 0.3),
            ("likely", 0.0, 0.7),
            ("possible", 0.0, 0.6),
            ("certainly", 0.2, 0.8),
            ("clearly", 0.1, 0.8),
            ("obviously", 0.1, 0.9),
            ("definitely", 0.2, 0.85),
            ("undoubtedly", 0.2, 0.9),
            ("surprising", 0.1, 0.85),
            ("unprecedented", 0.1, 0.7),
            ("controversial", -0.2, 0.75),
            ("urgent", -0.1, 0.6),
            ("pivotal", 0.2, 0.6),
            ("monumental", 0.3, 0.7),
            ("drastic", -0.2, 0.6),
            ("radical", -0.2, 0.65),
            ("tiny", -0.1, 0.5),
            ("extreme", -0.2, 0.6),
            // negative
            ("bad", -0.7, 0.65),
            ("poor", -0.4, 0.6),
            ("weak", -0.4, 0.5),
            ("loss", -0.4, 0.4),
            ("lose", -0.4, 0.4),
            ("fail", -0.6, 0.6),
            ("failed", -0.6, 0.6),
            ("failure", -0.65, 0.75),
            ("decline", -0.4, 0.4),
            ("drop", -0.3, 0.35),
            ("problem", -0.4, 0.4),
            ("concern", -0.3, 0.5),
            ("concerned", -0.35, 0.55),
            ("worried", -0.45, 0.65),
            ("fear", -0.6, 0.8),
            ("afraid", -0.55, 0.75),
            ("risk", -0.3, 0.4),
            ("threat", -0.55, 0.6),
            ("warning", -0.35, 0.45),
            ("crisis", -0.6, 0.7),
            ("danger", -0.6, 0.7),
            ("dangerous", -0.6, 0.7),
            ("damage", -0.5, 0.5),
            ("harm", -0.5, 0.5),
            ("hurt", -0.5, 0.55),
            ("wrong", -0.5, 0.7),
            ("unfair", -0.6, 0.8),
            ("injustice", -0.6, 0.75),
            ("negative", -0.5, 0.6),
            ("criticism", -0.4, 0.6),
            ("criticized", -0.45, 0.6),
            ("blame", -0.45, 0.6),
            ("accuse", -0.4, 0.6),
            ("accused", -0.4, 0.6),
            ("scandal", -0.7, 0.75),
            ("corrupt", -0.85, 0.9),
            ("corruption", -0.8, 0.85),
            ("fraud", -0.75, 0.8),
            ("collusion", -0.6, 0.75),
            ("conspiracy", -0.6, 0.75),
            ("propaganda", -0.6, 0.8),
            ("misleading", -0.6, 0.8),
            ("rigged", -0.7, 0.85),
            ("myth", -0.3, 0.6),
            ("panic", -0.6, 0.7),
            ("chaos", -0.6, 0.65),
            ("chaotic", -0.6, 0.7),
            ("violent", -0.8, 0.85),
            ("violence", -0.7, 0.7),
            ("deadly", -0.9, 0.9),
            ("death", -0.6, 0.5),
            ("killed", -0.7, 0.55),
            ("disaster", -0.8, 0.9),
            ("catastrophe", -0.9, 0.95),
            ("catastrophic", -0.9, 0.95),
            ("tragic", -0.9, 0.95),
            ("tragedy", -0.8, 0.85),
            ("terrible", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("worst", -1.0, 1.0),
            ("disgusting", -0.9, 0.95),
            ("disgraceful", -0.85, 0.95),
            ("shameful", -0.8, 0.9),
            ("shocking", -0.5, 0.9),
            ("appalling", -0.9, 0.95),
            ("alarming", -0.6, 0.8),
            ("outrageous", -0.8, 0.95),
            ("frightening", -0.7, 0.85),
            ("terrifying", -0.9, 0.95),
            ("hate", -0.8, 0.9),
            ("angry", -0.6, 0.75),
            ("furious", -0.75, 0.85),
            ("stupid", -0.8, 0.9),
            ("foolish", -0.7, 0.85),
            ("incompetent", -0.7, 0.85),
            ("irresponsible", -0.6, 0.8),
            ("reckless", -0.6, 0.75),
            ("unacceptable", -0.7, 0.85),
            ("unbelievable", -0.3, 0.9),
            ("impossible", -0.5, 0.7),
            ("unfortunate", -0.5, 0.7),
            ("sad", -0.6, 0.8),
            ("grim", -0.55, 0.65),
            ("bleak", -0.55, 0.65),
            ("looming", -0.3, 0.5),
            ("inflammatory", -0.5, 0.75),
            ("blatant", -0.5, 0.8),
            ("covert", -0.3, 0.5),
            ("secret", -0.2, 0.4),
        ];

        for (word, polarity, subjectivity) in entries {
            words.insert((*word).to_string(), WordSentiment::new(*polarity, *subjectivity));
        }

        let negations =
            ["not", "no", "never", "neither", "nor", "cannot", "without", "hardly", "scarcely"]
                .iter()
                .map(|w| (*w).to_string())
                .collect();

        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("incredibly", 1.6),
            ("absolutely", 1.5),
            ("completely", 1.4),
            ("totally", 1.4),
            ("highly", 1.3),
            ("deeply", 1.3),
            ("particularly", 1.2),
            ("especially", 1.2),
            ("quite", 1.1),
            ("so", 1.2),
            ("too", 1.2),
            ("rather", 0.9),
            ("fairly", 0.9),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("mildly", 0.7),
            ("barely", 0.5),
        ]
        .iter()
        .map(|(w, m)| ((*w).to_string(), *m))
        .collect();

        Self { words, negations, intensifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_is_populated() {
        let lexicon = SentimentLexicon::default();
        assert!(lexicon.len() > 150);
        assert!(!lexicon.negations.is_empty());
        assert!(!lexicon.intensifiers.is_empty());
    }

    #[test]
    fn test_default_entries_in_range() {
        let lexicon = SentimentLexicon::default();
        for (word, entry) in &lexicon.words {
            assert!(
                (-1.0..=1.0).contains(&entry.polarity),
                "polarity out of range for {word}"
            );
            assert!(
                (0.0..=1.0).contains(&entry.subjectivity),
                "subjectivity out of range for {word}"
            );
        }
    }

    #[test]
    fn test_known_word_polarities() {
        let lexicon = SentimentLexicon::default();
        assert!(lexicon.words["excellent"].polarity > 0.9);
        assert!(lexicon.words["terrible"].polarity < -0.9);
        assert!(lexicon.words["likely"].polarity.abs() < 0.01);
    }

    #[test]
    fn test_insert_lowercases() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.insert("Stellar", 0.9, 0.8);
        assert!(lexicon.words.contains_key("stellar"));
        assert_eq!(lexicon.words["stellar"], WordSentiment::new(0.9, 0.8));
    }
}
