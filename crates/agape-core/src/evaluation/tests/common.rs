use std::sync::Arc;

use crate::catalog::{
    Boundary, Catalog, Criterion, LevelBand, LevelScale, MitigationRule, ScoringPolicy,
};
use crate::evaluation::EvaluationEngine;

pub(super) fn truth_criterion() -> Criterion {
    Criterion::new("truth", 1.0)
        .with_positive(["honest", "truth"])
        .with_negative(["lie"])
}

pub(super) fn goodness_levels() -> LevelScale {
    LevelScale::new(
        vec![1.6, 2.4, 3.2, 4.0],
        vec![
            LevelBand::new(
                "Harmful",
                &[
                    "Fundamental redesign required",
                    "Ground every answer in care for people",
                ],
            ),
            LevelBand::new("Concerning", &["Significant changes needed"]),
            LevelBand::new("Neutral Tool", &["Good foundation, keep building"]),
            LevelBand::new("Good Servant", &["Continue strengthening"]),
            LevelBand::new("Exemplary", &["Exemplary, help others achieve this"]),
        ],
        Boundary::InclusiveLower,
    )
    .expect("valid level scale")
}

pub(super) fn truth_catalog() -> Catalog {
    Catalog::builder("truth")
        .levels(goodness_levels())
        .criterion(truth_criterion())
        .build()
        .expect("truth catalog builds")
}

/// Four criteria with unequal weights over the default five-point policy.
pub(super) fn service_catalog() -> Catalog {
    Catalog::builder("service")
        .policy(ScoringPolicy {
            improvement_cutoff: Some(0.5),
            ..ScoringPolicy::default()
        })
        .levels(goodness_levels())
        .criterion(truth_criterion())
        .criterion(
            Criterion::new("compassion", 2.0)
                .with_positive(["compassion", "mercy", "kindness"])
                .with_negative(["cruel"])
                .with_improvement("Answer with more compassion"),
        )
        .criterion(
            Criterion::new("service_to_others", 1.5)
                .with_positive(["serve", "help others", "volunteer"])
                .with_negative(["selfish"]),
        )
        .criterion(
            Criterion::new("hope", 0.5)
                .with_positive(["hope", "future"])
                .with_negative(["hopeless", "doomed"]),
        )
        .mitigations(MitigationRule::defaults())
        .build()
        .expect("service catalog builds")
}

pub(super) fn engine(catalog: Catalog) -> EvaluationEngine {
    EvaluationEngine::new(Arc::new(catalog))
}

/// `count` criteria that each match nothing in ordinary text.
pub(super) fn wide_catalog(count: usize) -> Catalog {
    (0..count)
        .fold(Catalog::builder("wide").levels(goodness_levels()), |builder, index| {
            builder.criterion(
                Criterion::new(format!("criterion_{index}"), 1.0 + index as f64)
                    .with_positive([format!("qqq{index}")])
                    .with_negative(["zzz"]),
            )
        })
        .build()
        .expect("wide catalog builds")
}
