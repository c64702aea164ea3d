use super::matcher::IndicatorMatcher;
use super::CriterionScore;
use crate::catalog::Catalog;

pub const MAX_INSIGHTS: usize = 5;

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Insights {
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

/// Ranks criteria into strengths and concerns, then runs the catalog's
/// literal strength and safety nets over `raw_text`.
///
/// `raw_text` is the caller's text without any folded-in context; neither net
/// sees context values.
pub(crate) fn extract_insights(
    scores: &[CriterionScore],
    catalog: &Catalog,
    raw_text: &str,
) -> Insights {
    let policy = catalog.policy();
    let strength_threshold = policy.strength_threshold();
    let concern_threshold = policy.concern_threshold();
    let matcher = IndicatorMatcher::new(raw_text);

    let mut strengths: Vec<String> = scores
        .iter()
        .filter(|entry| entry.score >= strength_threshold)
        .map(|entry| format!("Strong {} alignment", entry.label))
        .collect();
    strengths.extend(strength_net_strengths(catalog, &matcher));
    strengths.truncate(MAX_INSIGHTS);

    let mut concerns: Vec<String> = scores
        .iter()
        .filter(|entry| entry.score < concern_threshold)
        .map(|entry| format!("Weak {} — needs improvement", entry.label))
        .collect();
    concerns.extend(safety_net_concerns(catalog, &matcher));
    concerns.truncate(MAX_INSIGHTS);

    Insights {
        strengths,
        concerns,
    }
}

fn strength_net_strengths(catalog: &Catalog, matcher: &IndicatorMatcher) -> Vec<String> {
    catalog
        .strength_net()
        .iter()
        .filter(|pattern| pattern.terms.iter().any(|term| matcher.contains(term)))
        .map(|pattern| pattern.strength.clone())
        .collect()
}

fn safety_net_concerns(catalog: &Catalog, matcher: &IndicatorMatcher) -> Vec<String> {
    catalog
        .safety_net()
        .iter()
        .filter(|pattern| pattern.terms.iter().any(|term| matcher.contains(term)))
        .map(|pattern| pattern.concern.clone())
        .collect()
}
