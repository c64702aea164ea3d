use super::matcher::IndicatorMatcher;
use serde::Serialize;

/// Catalog-free screen of a single response.
///
/// Scores the share of a fixed positive vocabulary found in the text, then
/// subtracts a flat penalty per matched concern pattern.
#[derive(Debug, Clone)]
pub struct QuickCheck {
    pub scale: f64,
    pub penalty_per_concern: f64,
    pub positive_terms: Vec<String>,
    /// `(term, description)` pairs.
    pub concern_patterns: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickCheckOutcome {
    pub score: f64,
    pub scale: f64,
    pub concerns: Vec<String>,
}

impl Default for QuickCheck {
    fn default() -> Self {
        let positive_terms = [
            "love",
            "serve",
            "help",
            "truth",
            "compassion",
            "mercy",
            "forgiveness",
            "respect",
            "dignity",
            "hope",
        ];
        let concern_patterns = [
            ("hatred", "Contains language of hatred or animosity"),
            ("worthless", "Suggests people or life are worthless"),
            ("hopeless", "Promotes hopelessness or despair"),
            ("manipulate", "Shows manipulative intent"),
            ("deceive", "Contains deceptive elements"),
            ("harm", "May cause or encourage harm"),
        ];

        Self {
            scale: 5.0,
            penalty_per_concern: 0.5,
            positive_terms: positive_terms.iter().map(|term| term.to_string()).collect(),
            concern_patterns: concern_patterns
                .iter()
                .map(|(term, description)| (term.to_string(), description.to_string()))
                .collect(),
        }
    }
}

impl QuickCheck {
    pub fn check(&self, text: &str) -> QuickCheckOutcome {
        let matcher = IndicatorMatcher::new(text);

        let positive_ratio = if self.positive_terms.is_empty() {
            0.0
        } else {
            let hits = self
                .positive_terms
                .iter()
                .filter(|term| matcher.contains(term))
                .count();
            hits as f64 / self.positive_terms.len() as f64
        };

        let concerns: Vec<String> = self
            .concern_patterns
            .iter()
            .filter(|(term, _)| matcher.contains(term))
            .map(|(_, description)| description.clone())
            .collect();

        let penalty = concerns.len() as f64 * self.penalty_per_concern;
        let score = (positive_ratio * self.scale - penalty).clamp(0.0, self.scale);

        QuickCheckOutcome {
            score,
            scale: self.scale,
            concerns,
        }
    }
}
