use super::CriterionScore;
use crate::catalog::Catalog;

/// Weighted mean of the scores of every catalog criterion that was scored.
///
/// Criteria missing from `scores` drop out of both sums, and the weights are
/// re-normalized by their current total. Returns `0.0` when nothing was
/// scored. The result is pinned inside `[min, max]` of the contributing
/// scores so float rounding cannot push it outside that hull.
pub fn aggregate(scores: &[CriterionScore], catalog: &Catalog) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;

    for criterion in catalog.criteria() {
        let Some(entry) = scores.iter().find(|entry| entry.name == criterion.name) else {
            continue;
        };
        weighted_sum += entry.score * criterion.weight;
        weight_sum += criterion.weight;
        lowest = lowest.min(entry.score);
        highest = highest.max(entry.score);
    }

    if weight_sum <= 0.0 {
        return 0.0;
    }

    (weighted_sum / weight_sum).clamp(lowest, highest)
}
