use super::matcher::IndicatorMatcher;
use super::CriterionScore;
use crate::catalog::{Criterion, ScoringPolicy};

/// Scores a single criterion against already-normalized text.
///
/// Blank indicator phrases are skipped entirely: they neither match nor count
/// towards the ratio denominators.
pub(crate) fn score_criterion(
    criterion: &Criterion,
    matcher: &IndicatorMatcher,
    policy: &ScoringPolicy,
) -> CriterionScore {
    let (positive_hits, positive_total) = count_hits(&criterion.positive_indicators, matcher);
    let (negative_hits, negative_total) = count_hits(&criterion.negative_indicators, matcher);

    let score = if positive_total == 0 && negative_total == 0 {
        policy.neutral_score
    } else {
        let raw = ratio(positive_hits, positive_total) - ratio(negative_hits, negative_total);
        policy.score_floor.project(raw, policy.scale)
    };

    CriterionScore {
        name: criterion.name.clone(),
        label: criterion.label.clone(),
        weight: criterion.weight,
        score,
        positive_hits,
        negative_hits,
    }
}

fn count_hits(indicators: &[String], matcher: &IndicatorMatcher) -> (usize, usize) {
    indicators
        .iter()
        .filter(|indicator| !indicator.trim().is_empty())
        .fold((0, 0), |(hits, total), indicator| {
            let hit = usize::from(matcher.present(indicator));
            (hits + hit, total + 1)
        })
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}
