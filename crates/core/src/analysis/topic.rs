//! Keyword-based topic classification.

/// Category name reported when no keyword matches at all.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A named topic and the keywords that signal it.
///
/// Keywords are matched as lowercase substrings of the article body, so
/// "camp" also fires inside "campaign". Short keywords therefore trade
/// recall for precision; multi-word entries like "wall street" are matched
/// as-is.
#[derive(Debug, Clone)]
pub struct TopicCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TopicCategory {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// An ordered list of topic categories.
///
/// Order is the tie-break rule: when two categories reach the same score,
/// the one declared earlier wins. Callers composing their own taxonomy
/// should list the categories they prefer first.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<TopicCategory>,
}

impl Taxonomy {
    pub fn new(categories: Vec<TopicCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[TopicCategory] {
        &self.categories
    }

    /// Names the best-scoring category for `text`.
    ///
    /// Each category scores the total number of keyword occurrences in the
    /// lowercased text. Returns [`UNCATEGORIZED`] when every category scores
    /// zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use newslens_core::analysis::Taxonomy;
    ///
    /// let taxonomy = Taxonomy::default();
    /// let topic = taxonomy.classify("The government passed a new election law.");
    /// assert_eq!(topic, "Politics");
    /// ```
    pub fn classify(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let mut best: Option<(&TopicCategory, usize)> = None;

        for category in &self.categories {
            let score: usize = category
                .keywords
                .iter()
                .map(|keyword| lower.matches(keyword.as_str()).count())
                .sum();

            // Strictly-greater keeps the earliest category on ties.
            let replace = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if replace {
                best = Some((category, score));
            }
        }

        match best {
            Some((category, score)) if score > 0 => category.name.clone(),
            _ => UNCATEGORIZED.to_string(),
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new(vec![
            TopicCategory::new(
                "Technology",
                &[
                    "ai",
                    "software",
                    "hardware",
                    "apple",
                    "google",
                    "data",
                    "cloud",
                    "startup",
                    "algorithm",
                    "cybersecurity",
                    "innovation",
                    "robotics",
                    "crypto",
                    "samsung",
                    "processor",
                    "graphics",
                    "performance",
                ],
            ),
            TopicCategory::new(
                "Politics",
                &[
                    "government",
                    "election",
                    "senate",
                    "law",
                    "policy",
                    "president",
                    "congress",
                    "political",
                    "legislation",
                    "democracy",
                    "ballot",
                    "vote",
                ],
            ),
            TopicCategory::new(
                "Sports",
                &[
                    "game", "team", "player", "season", "score", "nba", "football", "olympics",
                    "champion", "athlete", "stadium", "playoffs", "goal", "soccer",
                ],
            ),
            TopicCategory::new(
                "Business",
                &[
                    "company",
                    "market",
                    "stock",
                    "economy",
                    "ceo",
                    "finance",
                    "investment",
                    "revenue",
                    "quarterly",
                    "wall street",
                    "ipo",
                    "earnings",
                ],
            ),
            TopicCategory::new(
                "Health",
                &[
                    "health",
                    "sleep",
                    "medical",
                    "doctor",
                    "hospital",
                    "fda",
                    "virus",
                    "pandemic",
                    "vaccine",
                    "research",
                    "disease",
                    "wellness",
                    "nutrition",
                ],
            ),
            TopicCategory::new(
                "Entertainment",
                &[
                    "movie",
                    "music",
                    "singer",
                    "box office",
                    "celebrity",
                    "film",
                    "hollywood",
                    "nollywood",
                    "bollywood",
                    "award",
                    "series",
                    "netflix",
                    "actor",
                    "actress",
                    "director",
                    "album",
                    "concert",
                ],
            ),
            TopicCategory::new(
                "Education",
                &[
                    "course",
                    "student",
                    "test",
                    "exam",
                    "school",
                    "university",
                    "scholarship",
                    "hostel",
                    "bootcamp",
                    "camp",
                ],
            ),
        ])
    }
}
