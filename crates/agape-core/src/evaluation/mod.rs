mod aggregate;
mod insights;
mod level;
pub mod matcher;
pub mod quick;
mod recommendations;
mod rules;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate;
pub use insights::MAX_INSIGHTS;
pub use level::{classify, Level};
pub use matcher::{IndicatorMatcher, KEYWORDS_PER_INDICATOR};
pub use quick::{QuickCheck, QuickCheckOutcome};
pub use recommendations::MAX_RECOMMENDATIONS;

use crate::catalog::Catalog;
use insights::extract_insights;
use recommendations::generate_recommendations;
use rules::score_criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Stateless evaluator over one shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    catalog: Arc<Catalog>,
}

impl EvaluationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn evaluate(&self, text: &str) -> EvaluationResult {
        self.evaluate_with_context(text, &BTreeMap::new())
    }

    /// Context values are appended to `text` (in key order) for scoring only;
    /// the literal safety net inspects `text` alone.
    pub fn evaluate_with_context(
        &self,
        text: &str,
        context: &BTreeMap<String, String>,
    ) -> EvaluationResult {
        let catalog = self.catalog.as_ref();
        if catalog.is_empty() {
            return EvaluationResult::neutral(catalog);
        }

        let combined = combine(text, context);
        let matcher = IndicatorMatcher::new(&combined);
        let scores: Vec<CriterionScore> = catalog
            .criteria()
            .iter()
            .map(|criterion| score_criterion(criterion, &matcher, catalog.policy()))
            .collect();

        let overall_score = aggregate(&scores, catalog);
        let level = classify(overall_score, catalog.levels());
        let insights = extract_insights(&scores, catalog, text);
        let recommendations =
            generate_recommendations(&level, &scores, &insights.concerns, catalog);

        debug!(
            catalog = catalog.name(),
            overall_score,
            level = %level,
            "text evaluated"
        );

        EvaluationResult {
            catalog: catalog.name().to_string(),
            scale: catalog.policy().scale,
            scores,
            overall_score,
            level,
            strengths: insights.strengths,
            concerns: insights.concerns,
            recommendations,
        }
    }
}

fn combine(text: &str, context: &BTreeMap<String, String>) -> String {
    std::iter::once(text)
        .chain(context.values().map(String::as_str))
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Per-criterion contribution, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub name: String,
    pub label: String,
    pub weight: f64,
    pub score: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

/// Outcome of one evaluation call, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub catalog: String,
    pub scale: f64,
    /// Catalog order.
    pub scores: Vec<CriterionScore>,
    pub overall_score: f64,
    pub level: Level,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

impl EvaluationResult {
    fn neutral(catalog: &Catalog) -> Self {
        Self {
            catalog: catalog.name().to_string(),
            scale: catalog.policy().scale,
            scores: Vec::new(),
            overall_score: 0.0,
            level: level::lowest(catalog.levels()),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn score_of(&self, name: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.score)
    }

    /// Overall score as a fraction of the catalog scale.
    pub fn compatibility(&self) -> f64 {
        if self.scale > 0.0 {
            self.overall_score / self.scale
        } else {
            0.0
        }
    }
}
