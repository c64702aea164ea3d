use super::policy::{
    Boundary, LevelBand, LevelScale, MitigationRule, SafetyPattern, ScoringPolicy, StrengthPattern,
};
use super::{display_label, Catalog, CatalogError, Criterion};
use serde::{Deserialize, Serialize};

/// On-disk shape of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub policy: ScoringPolicy,
    #[serde(default)]
    pub levels: Option<LevelScaleDefinition>,
    #[serde(default)]
    pub criteria: Vec<CriterionDefinition>,
    /// `None` keeps the stock patterns; an explicit empty list disables them.
    #[serde(default)]
    pub safety_net: Option<Vec<SafetyPattern>>,
    #[serde(default)]
    pub strength_net: Vec<StrengthPattern>,
    #[serde(default)]
    pub mitigations: Option<Vec<MitigationRule>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelScaleDefinition {
    #[serde(default)]
    pub boundary: Boundary,
    pub thresholds: Vec<f64>,
    pub bands: Vec<LevelBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDefinition {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub weight: f64,
    #[serde(default)]
    pub positive_indicators: Vec<String>,
    #[serde(default)]
    pub negative_indicators: Vec<String>,
    #[serde(default)]
    pub improvement: Option<String>,
}

impl From<CriterionDefinition> for Criterion {
    fn from(definition: CriterionDefinition) -> Self {
        let label = definition
            .label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| display_label(&definition.name));

        Criterion {
            name: definition.name,
            label,
            description: definition.description,
            weight: definition.weight,
            positive_indicators: definition.positive_indicators,
            negative_indicators: definition.negative_indicators,
            improvement: definition.improvement,
        }
    }
}

impl CatalogDefinition {
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut builder = Catalog::builder(self.name)
            .description(self.description)
            .policy(self.policy);

        if let Some(levels) = self.levels {
            let scale = LevelScale::new(levels.thresholds, levels.bands, levels.boundary)
                .map_err(CatalogError::InvalidLevelScale)?;
            builder = builder.levels(scale);
        }
        if let Some(patterns) = self.safety_net {
            builder = builder.safety_net(patterns);
        }
        if !self.strength_net.is_empty() {
            builder = builder.strength_net(self.strength_net);
        }
        if let Some(rules) = self.mitigations {
            builder = builder.mitigations(rules);
        }

        self.criteria
            .into_iter()
            .map(Criterion::from)
            .fold(builder, |builder, criterion| builder.criterion(criterion))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogLoadError, CriterionDefect, ScoreFloor};

    const DOCUMENT: &str = r#"{
        "name": "honesty",
        "description": "Truthfulness screen",
        "policy": { "scale": 1.0, "score_floor": "signed" },
        "levels": {
            "boundary": "inclusive_upper",
            "thresholds": [0.5],
            "bands": [
                { "label": "Doubtful", "guidance": ["Verify every claim"] },
                { "label": "Credible" }
            ]
        },
        "criteria": [
            {
                "name": "plain_speech",
                "weight": 2.0,
                "positive_indicators": ["honest", "truth"],
                "negative_indicators": ["lie"]
            }
        ],
        "safety_net": []
    }"#;

    #[test]
    fn definition_fills_defaults_and_labels() {
        let catalog = Catalog::from_reader(DOCUMENT.as_bytes()).expect("document parses");

        assert_eq!(catalog.name(), "honesty");
        assert_eq!(catalog.policy().scale, 1.0);
        assert_eq!(catalog.policy().score_floor, ScoreFloor::Signed);
        assert_eq!(catalog.policy().strength_cutoff, 0.7);
        assert_eq!(catalog.levels().boundary(), Boundary::InclusiveUpper);
        assert_eq!(catalog.levels().bands()[0].guidance.len(), 1);
        assert!(catalog.levels().bands()[1].guidance.is_empty());
        assert!(catalog.safety_net().is_empty());
        assert_eq!(catalog.mitigations().len(), 2);

        let criterion = catalog.criterion("plain_speech").expect("criterion present");
        assert_eq!(criterion.label, "Plain Speech");
        assert_eq!(criterion.weight, 2.0);
    }

    #[test]
    fn invalid_weights_surface_as_catalog_errors() {
        let document = r#"{
            "name": "bad",
            "criteria": [{ "name": "negative", "weight": -1.0, "positive_indicators": ["x"] }]
        }"#;

        let err = Catalog::from_reader(document.as_bytes()).expect_err("negative weight");
        match err {
            CatalogLoadError::Catalog(CatalogError::InvalidCriterion { name, defect }) => {
                assert_eq!(name, "negative");
                assert_eq!(defect, CriterionDefect::NonPositiveWeight(-1.0));
            }
            other => panic!("expected invalid criterion, got {other:?}"),
        }
    }

    #[test]
    fn malformed_levels_are_rejected() {
        let document = r#"{
            "name": "bad-levels",
            "levels": { "thresholds": [1.0, 1.0], "bands": [{"label": "a"}, {"label": "b"}, {"label": "c"}] }
        }"#;

        let err = Catalog::from_reader(document.as_bytes()).expect_err("flat thresholds");
        assert!(matches!(
            err,
            CatalogLoadError::Catalog(CatalogError::InvalidLevelScale(_))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Catalog::from_reader("{ not json".as_bytes()).expect_err("bad json");
        assert!(matches!(err, CatalogLoadError::Json(_)));
    }
}
