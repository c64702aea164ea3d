use super::common::*;
use crate::catalog::{Catalog, Criterion, StrengthPattern};
use crate::evaluation::{MAX_INSIGHTS, MAX_RECOMMENDATIONS};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn safety_net_flags_literal_patterns_alongside_strengths() {
    let result = engine(truth_catalog()).evaluate("honest truth, I never manipulate anyone");

    assert_eq!(result.strengths, vec!["Strong Truth alignment".to_string()]);
    assert_eq!(
        result.concerns,
        vec!["Potential for harmful or manipulative behavior".to_string()]
    );
    assert_eq!(
        result.recommendations,
        vec![
            "Exemplary, help others achieve this".to_string(),
            "Implement safeguards against harmful or manipulative outputs".to_string(),
        ]
    );
}

#[test]
fn safety_net_ignores_context_values() {
    let mut context = BTreeMap::new();
    context.insert("note".to_string(), "harm".to_string());

    let result = engine(truth_catalog()).evaluate_with_context("honest truth", &context);

    assert!(result.concerns.is_empty());
}

#[test]
fn weak_criteria_drive_concerns_and_improvements() {
    let result = engine(service_catalog()).evaluate("a cruel and hopeless world");

    assert_eq!(result.overall_score, 0.0);
    assert_eq!(result.level.label, "Harmful");
    assert!(result.strengths.is_empty());
    assert_eq!(
        result.concerns,
        vec![
            "Weak Truth — needs improvement".to_string(),
            "Weak Compassion — needs improvement".to_string(),
            "Weak Service To Others — needs improvement".to_string(),
            "Weak Hope — needs improvement".to_string(),
            "May promote despair or hopelessness".to_string(),
        ]
    );
    assert_eq!(
        result.recommendations,
        vec![
            "Fundamental redesign required".to_string(),
            "Ground every answer in care for people".to_string(),
            "Strengthen Truth in future responses".to_string(),
            "Answer with more compassion".to_string(),
            "Strengthen Service To Others in future responses".to_string(),
            "Strengthen Hope in future responses".to_string(),
        ]
    );
}

#[test]
fn mitigations_only_address_the_first_two_concerns() {
    let catalog = Catalog::builder("single")
        .levels(goodness_levels())
        .criterion(
            Criterion::new("care", 1.0)
                .with_positive(["care"])
                .with_improvement("Show more care"),
        )
        .build()
        .expect("catalog builds");

    // Weak Care, then both safety-net concerns; only the first two are
    // matched against mitigation rules.
    let result = engine(catalog).evaluate("harm done, all hopeless");

    assert_eq!(result.concerns.len(), 3);
    assert!(result
        .recommendations
        .contains(&"Implement safeguards against harmful or manipulative outputs".to_string()));
    assert!(!result
        .recommendations
        .iter()
        .any(|entry| entry.starts_with("Always offer hope")));
}

#[test]
fn duplicate_recommendations_are_collapsed() {
    let catalog = Catalog::builder("dupes")
        .levels(goodness_levels())
        .criterion(
            Criterion::new("first", 1.0)
                .with_positive(["qqq"])
                .with_improvement("Say something kind"),
        )
        .criterion(
            Criterion::new("second", 1.0)
                .with_positive(["zzz"])
                .with_improvement("Say something kind"),
        )
        .build()
        .expect("catalog builds");

    let result = engine(catalog).evaluate("nothing relevant");

    let kind = result
        .recommendations
        .iter()
        .filter(|entry| entry.as_str() == "Say something kind")
        .count();
    assert_eq!(kind, 1);
}

#[test]
fn lists_are_capped_for_very_wide_catalogs() {
    let result = engine(wide_catalog(300)).evaluate("harm and hopelessness everywhere");

    assert_eq!(result.scores.len(), 300);
    assert_eq!(result.concerns.len(), MAX_INSIGHTS);
    assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
    assert!(result.strengths.is_empty());
}

#[test]
fn strengths_are_capped_in_catalog_order() {
    let catalog = (0..12)
        .fold(Catalog::builder("all-strong"), |builder, index| {
            builder.criterion(Criterion::new(format!("c{index:02}"), 1.0).with_positive(["shared"]))
        })
        .build()
        .expect("catalog builds");

    let result = engine(catalog).evaluate("a shared purpose");

    assert_eq!(
        result.strengths,
        vec![
            "Strong C00 alignment".to_string(),
            "Strong C01 alignment".to_string(),
            "Strong C02 alignment".to_string(),
            "Strong C03 alignment".to_string(),
            "Strong C04 alignment".to_string(),
        ]
    );
}

fn helpful_truth_catalog() -> Catalog {
    Catalog::builder("helpful")
        .levels(goodness_levels())
        .criterion(truth_criterion())
        .strength_net(vec![
            StrengthPattern::new(&["help"], "Demonstrates helpful intent"),
            StrengthPattern::new(&["truth"], "Values truth and accuracy"),
        ])
        .build()
        .expect("catalog builds")
}

#[test]
fn strength_net_adds_literal_strengths_after_criteria() {
    let result = engine(helpful_truth_catalog()).evaluate("I help with the honest truth");

    assert_eq!(
        result.strengths,
        vec![
            "Strong Truth alignment".to_string(),
            "Demonstrates helpful intent".to_string(),
            "Values truth and accuracy".to_string(),
        ]
    );
}

#[test]
fn strength_net_ignores_context_values() {
    let mut context = BTreeMap::new();
    context.insert("note".to_string(), "happy to help".to_string());

    let result = engine(helpful_truth_catalog()).evaluate_with_context("plain words", &context);

    assert!(result.strengths.is_empty());
}
