use super::{CriterionScore, Level};
use crate::catalog::Catalog;
use std::collections::HashSet;

pub const MAX_RECOMMENDATIONS: usize = 7;

/// How many leading concerns receive a mitigating action.
const ADDRESSED_CONCERNS: usize = 2;

pub(crate) fn generate_recommendations(
    level: &Level,
    scores: &[CriterionScore],
    concerns: &[String],
    catalog: &Catalog,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(band) = catalog.levels().band(level.rank) {
        recommendations.extend(band.guidance.iter().cloned());
    }

    let improvement_threshold = catalog.policy().improvement_threshold();
    for entry in scores
        .iter()
        .filter(|entry| entry.score < improvement_threshold)
    {
        let suggestion = catalog
            .criterion(&entry.name)
            .and_then(|criterion| criterion.improvement.clone())
            .unwrap_or_else(|| format!("Strengthen {} in future responses", entry.label));
        recommendations.push(suggestion);
    }

    for concern in concerns.iter().take(ADDRESSED_CONCERNS) {
        let concern = concern.to_lowercase();
        if let Some(rule) = catalog
            .mitigations()
            .iter()
            .find(|rule| concern.contains(&rule.needle.to_lowercase()))
        {
            recommendations.push(rule.suggestion.clone());
        }
    }

    let mut seen = HashSet::new();
    recommendations.retain(|entry| seen.insert(entry.clone()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
