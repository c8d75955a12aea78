//! Tone labeling over raw sentiment scores.

use std::fmt;

use serde::Serialize;

use crate::sentiment::TextSentiment;

/// Overall tone of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Labels a polarity: above `0.1` is positive, below `-0.1` is
    /// negative, and the band between them (boundaries included) is
    /// neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            Tone::Positive
        } else if polarity < -0.1 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Negative => "Negative",
            Tone::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sentiment scores plus their tone label.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReading {
    pub tone: Tone,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentReading {
    pub fn from_scores(scores: TextSentiment) -> Self {
        Self {
            tone: Tone::from_polarity(scores.polarity),
            polarity: scores.polarity,
            subjectivity: scores.subjectivity,
        }
    }
}
