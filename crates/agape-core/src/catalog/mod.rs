//! Criterion catalogs: weighted indicator data the evaluation engine scores
//! text against.
//!
//! Catalogs are validated once at construction and never mutated afterwards,
//! so a single `Arc<Catalog>` can back any number of evaluations.

pub mod builtin;
mod definition;
mod policy;

pub use definition::{CatalogDefinition, CriterionDefinition, LevelScaleDefinition};
pub use policy::{
    Boundary, LevelBand, LevelScale, MitigationRule, SafetyPattern, ScoreFloor, ScoringPolicy,
    StrengthPattern,
};

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// One weighted dimension of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub weight: f64,
    pub positive_indicators: Vec<String>,
    pub negative_indicators: Vec<String>,
    /// Recommendation emitted when the criterion scores below the
    /// improvement threshold.
    pub improvement: Option<String>,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        let name = name.into();
        Self {
            label: display_label(&name),
            name,
            description: None,
            weight,
            positive_indicators: Vec::new(),
            negative_indicators: Vec::new(),
            improvement: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_positive<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positive_indicators
            .extend(indicators.into_iter().map(Into::into));
        self
    }

    pub fn with_negative<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negative_indicators
            .extend(indicators.into_iter().map(Into::into));
        self
    }

    pub fn with_improvement(mut self, improvement: impl Into<String>) -> Self {
        self.improvement = Some(improvement.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// `"great_commandments_adherence"` becomes `"Great Commandments Adherence"`.
pub fn display_label(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Validated, immutable set of criteria plus the policy used to score them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    name: String,
    description: String,
    criteria: Vec<Criterion>,
    policy: ScoringPolicy,
    levels: LevelScale,
    safety_net: Vec<SafetyPattern>,
    strength_net: Vec<StrengthPattern>,
    mitigations: Vec<MitigationRule>,
}

impl Catalog {
    pub fn builder(name: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder::new(name)
    }

    /// A catalog without criteria. Evaluating against it always yields the
    /// neutral result.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            criteria: Vec::new(),
            policy: ScoringPolicy::default(),
            levels: LevelScale::standard(ScoringPolicy::default().scale),
            safety_net: Vec::new(),
            strength_net: Vec::new(),
            mitigations: Vec::new(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let definition: CatalogDefinition = serde_json::from_reader(reader)?;
        let catalog = definition.into_catalog()?;
        info!(
            catalog = %catalog.name,
            criteria = catalog.criteria.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn levels(&self) -> &LevelScale {
        &self.levels
    }

    pub fn safety_net(&self) -> &[SafetyPattern] {
        &self.safety_net
    }

    pub fn strength_net(&self) -> &[StrengthPattern] {
        &self.strength_net
    }

    pub fn mitigations(&self) -> &[MitigationRule] {
        &self.mitigations
    }
}

/// Assembles a [`Catalog`], rejecting malformed criteria at `build` time.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    name: String,
    description: String,
    criteria: Vec<Criterion>,
    policy: ScoringPolicy,
    levels: Option<LevelScale>,
    safety_net: Option<Vec<SafetyPattern>>,
    strength_net: Vec<StrengthPattern>,
    mitigations: Option<Vec<MitigationRule>>,
}

impl CatalogBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            criteria: Vec::new(),
            policy: ScoringPolicy::default(),
            levels: None,
            safety_net: None,
            strength_net: Vec::new(),
            mitigations: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn levels(mut self, levels: LevelScale) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn safety_net(mut self, patterns: Vec<SafetyPattern>) -> Self {
        self.safety_net = Some(patterns);
        self
    }

    /// Literal patterns that add a strength when found in the raw text.
    /// Empty unless set.
    pub fn strength_net(mut self, patterns: Vec<StrengthPattern>) -> Self {
        self.strength_net = patterns;
        self
    }

    pub fn mitigations(mut self, rules: Vec<MitigationRule>) -> Self {
        self.mitigations = Some(rules);
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        self.policy.validate().map_err(CatalogError::InvalidPolicy)?;

        let mut seen = HashSet::new();
        for criterion in &self.criteria {
            if criterion.name.trim().is_empty() {
                return Err(CatalogError::InvalidCriterion {
                    name: criterion.name.clone(),
                    defect: CriterionDefect::BlankName,
                });
            }
            if !criterion.weight.is_finite() || criterion.weight <= 0.0 {
                return Err(CatalogError::InvalidCriterion {
                    name: criterion.name.clone(),
                    defect: CriterionDefect::NonPositiveWeight(criterion.weight),
                });
            }
            if !seen.insert(criterion.name.as_str()) {
                return Err(CatalogError::InvalidCriterion {
                    name: criterion.name.clone(),
                    defect: CriterionDefect::DuplicateName,
                });
            }
        }

        let scale = self.policy.scale;
        let levels = self
            .levels
            .unwrap_or_else(|| LevelScale::standard(scale));
        levels
            .check_range(scale)
            .map_err(CatalogError::InvalidLevelScale)?;

        let safety_net = self.safety_net.unwrap_or_else(SafetyPattern::defaults);
        for pattern in &safety_net {
            pattern.validate().map_err(CatalogError::InvalidPattern)?;
        }
        for pattern in &self.strength_net {
            pattern.validate().map_err(CatalogError::InvalidPattern)?;
        }
        let mitigations = self.mitigations.unwrap_or_else(MitigationRule::defaults);
        for rule in &mitigations {
            rule.validate().map_err(CatalogError::InvalidMitigation)?;
        }

        Ok(Catalog {
            name: self.name,
            description: self.description,
            criteria: self.criteria,
            policy: self.policy,
            levels,
            safety_net,
            strength_net: self.strength_net,
            mitigations,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CriterionDefect {
    NonPositiveWeight(f64),
    DuplicateName,
    BlankName,
}

impl fmt::Display for CriterionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionDefect::NonPositiveWeight(weight) => {
                write!(f, "weight must be positive, got {weight}")
            }
            CriterionDefect::DuplicateName => write!(f, "name is already used in this catalog"),
            CriterionDefect::BlankName => write!(f, "name must not be blank"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid criterion '{name}': {defect}")]
    InvalidCriterion {
        name: String,
        defect: CriterionDefect,
    },
    #[error("invalid scoring policy: {0}")]
    InvalidPolicy(String),
    #[error("invalid level scale: {0}")]
    InvalidLevelScale(String),
    #[error("invalid literal pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid mitigation rule: {0}")]
    InvalidMitigation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unknown catalog '{0}'")]
    UnknownCatalog(String),
}

/// Resolves a catalog reference given on the command line or in config.
pub struct CatalogSource;

impl CatalogSource {
    /// Tries, in order: `reference` as a `.json` file path, `<dir>/<reference>.json`,
    /// then the built-in catalog of that name.
    pub fn resolve(reference: &str, dir: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
        let reference = reference.trim();
        let as_path = Path::new(reference);
        if as_path.extension().is_some_and(|ext| ext == "json") {
            return Catalog::from_path(as_path);
        }

        if let Some(dir) = dir {
            let candidate = dir.join(format!("{reference}.json"));
            if candidate.is_file() {
                return Catalog::from_path(candidate);
            }
        }

        builtin::load(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn truth() -> Criterion {
        Criterion::new("truth", 1.0)
            .with_positive(["honest", "truth"])
            .with_negative(["lie"])
    }

    #[test]
    fn labels_are_title_cased_from_names() {
        assert_eq!(
            display_label("great_commandments_adherence"),
            "Great Commandments Adherence"
        );
        assert_eq!(display_label("track-record"), "Track Record");
        assert_eq!(Criterion::new("truth", 1.0).label, "Truth");
    }

    #[test]
    fn builder_rejects_non_positive_weight() {
        let err = Catalog::builder("broken")
            .criterion(Criterion::new("zero", 0.0).with_positive(["x"]))
            .build()
            .expect_err("zero weight rejected");
        assert_eq!(
            err,
            CatalogError::InvalidCriterion {
                name: "zero".to_string(),
                defect: CriterionDefect::NonPositiveWeight(0.0),
            }
        );

        let err = Catalog::builder("broken")
            .criterion(Criterion::new("nan", f64::NAN))
            .build()
            .expect_err("nan weight rejected");
        assert!(matches!(err, CatalogError::InvalidCriterion { .. }));
    }

    #[test]
    fn builder_rejects_duplicate_names() {
        let err = Catalog::builder("dupes")
            .criterion(truth())
            .criterion(truth())
            .build()
            .expect_err("duplicate rejected");
        assert!(matches!(
            err,
            CatalogError::InvalidCriterion {
                defect: CriterionDefect::DuplicateName,
                ..
            }
        ));
    }

    #[test]
    fn builder_applies_default_safety_net_and_mitigations() {
        let catalog = Catalog::builder("defaults")
            .criterion(truth())
            .build()
            .expect("catalog builds");
        assert_eq!(catalog.safety_net().len(), 2);
        assert_eq!(catalog.mitigations().len(), 2);
        assert_eq!(catalog.levels().bands().len(), 5);
        assert!(catalog.criterion("truth").is_some());
    }

    #[test]
    fn default_levels_follow_a_unit_scale() {
        let catalog = Catalog::builder("unit")
            .policy(ScoringPolicy {
                scale: 1.0,
                ..ScoringPolicy::default()
            })
            .criterion(truth())
            .build()
            .expect("catalog builds");

        let thresholds = catalog.levels().thresholds();
        assert!(thresholds.iter().all(|threshold| *threshold <= 1.0));
        assert!(catalog
            .levels()
            .bands()
            .iter()
            .all(|band| !band.guidance.is_empty()));
    }

    #[test]
    fn explicit_levels_must_fit_the_scale() {
        let err = Catalog::builder("unit")
            .policy(ScoringPolicy {
                scale: 1.0,
                ..ScoringPolicy::default()
            })
            .levels(LevelScale::five_point(["a", "b", "c", "d", "e"]))
            .criterion(truth())
            .build()
            .expect_err("five-point cut points exceed a unit scale");
        assert!(matches!(err, CatalogError::InvalidLevelScale(_)));
    }

    #[test]
    fn builder_rejects_blank_needles_and_termless_patterns() {
        let err = Catalog::builder("catch-all")
            .criterion(truth())
            .mitigations(vec![MitigationRule::new("", "Always say this")])
            .build()
            .expect_err("blank needle rejected");
        assert!(matches!(err, CatalogError::InvalidMitigation(_)));

        let err = Catalog::builder("silent")
            .criterion(truth())
            .safety_net(vec![SafetyPattern::new(&["  "], "Never fires")])
            .build()
            .expect_err("termless pattern rejected");
        assert!(matches!(err, CatalogError::InvalidPattern(_)));

        let err = Catalog::builder("unnamed")
            .criterion(truth())
            .strength_net(vec![StrengthPattern::new(&["help"], " ")])
            .build()
            .expect_err("blank strength rejected");
        assert!(matches!(err, CatalogError::InvalidPattern(_)));
    }

    #[test]
    fn empty_catalog_has_no_safety_net() {
        let catalog = Catalog::empty("nothing");
        assert!(catalog.is_empty());
        assert!(catalog.safety_net().is_empty());
    }

    #[test]
    fn resolve_prefers_catalog_directory_over_builtin() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ai-goodness.json");
        let mut file = std::fs::File::create(&path).expect("create catalog file");
        write!(
            file,
            r#"{{"name": "local-goodness", "criteria": [{{"name": "truth", "weight": 1.0, "positive_indicators": ["truth"]}}]}}"#
        )
        .expect("write catalog");

        let catalog =
            CatalogSource::resolve("ai-goodness", Some(dir.path())).expect("local catalog loads");
        assert_eq!(catalog.name(), "local-goodness");

        let catalog = CatalogSource::resolve("ai-goodness", None).expect("builtin loads");
        assert_eq!(catalog.name(), "ai-goodness");
    }

    #[test]
    fn resolve_reports_unknown_catalogs() {
        let err = CatalogSource::resolve("no-such-catalog", None).expect_err("unknown");
        assert!(matches!(err, CatalogLoadError::UnknownCatalog(name) if name == "no-such-catalog"));
    }
}
