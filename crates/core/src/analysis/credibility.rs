//! Source credibility scoring.
//!
//! The score is a transparent proxy, not a truth meter: objective-sounding
//! prose earns the base, very short pieces pay a depth penalty, and outbound
//! citations earn a capped bonus.

use serde::Serialize;

/// Minimum sentence count before the short-article penalty applies.
const MIN_SENTENCES: usize = 8;
/// Deducted when the article is shorter than [`MIN_SENTENCES`].
const SHORT_ARTICLE_PENALTY: f64 = 25.0;
/// Points per distinct external link.
const LINK_BONUS_PER_LINK: f64 = 3.0;
/// Ceiling on the total link bonus.
const LINK_BONUS_CAP: f64 = 30.0;

/// Computes the 0-100 credibility score.
///
/// Starts from `(1 - subjectivity) * 100`, subtracts the short-article
/// penalty when there are fewer than eight sentences, adds three points per
/// external link capped at thirty, and clamps the result to `[0, 100]`.
///
/// # Example
///
/// ```rust
/// use newslens_core::analysis::credibility::credibility_score;
///
/// assert_eq!(credibility_score(0.4, 10, 4), 72.0);
/// assert_eq!(credibility_score(1.0, 1, 0), 0.0);
/// assert_eq!(credibility_score(0.0, 20, 100), 100.0);
/// ```
pub fn credibility_score(
    subjectivity: f64,
    sentence_count: usize,
    external_link_count: usize,
) -> f64 {
    let mut score = (1.0 - subjectivity) * 100.0;

    if sentence_count < MIN_SENTENCES {
        score -= SHORT_ARTICLE_PENALTY;
    }

    score += f64::min(external_link_count as f64 * LINK_BONUS_PER_LINK, LINK_BONUS_CAP);

    score.clamp(0.0, 100.0)
}

/// Maps a score to its tier label.
pub fn credibility_assessment(score: f64) -> &'static str {
    if score > 80.0 {
        "Appears highly credible"
    } else if score > 60.0 {
        "Appears credible"
    } else if score > 40.0 {
        "Moderate credibility"
    } else {
        "Low credibility (review with caution)"
    }
}

/// Credibility score and its tier label.
#[derive(Debug, Clone, Serialize)]
pub struct CredibilityReading {
    pub assessment: String,
    /// Score in `[0, 100]`.
    pub score: f64,
}

impl CredibilityReading {
    /// Scores the inputs and attaches the tier label.
    pub fn from_inputs(
        subjectivity: f64,
        sentence_count: usize,
        external_link_count: usize,
    ) -> Self {
        let score = credibility_score(subjectivity, sentence_count, external_link_count);

        Self { assessment: credibility_assessment(score).to_string(), score }
    }
}
