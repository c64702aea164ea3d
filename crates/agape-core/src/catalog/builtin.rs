//! Catalogs shipped with the crate.

use super::{Catalog, CatalogLoadError};

const BUILTIN: &[(&str, &str)] = &[
    ("ai-goodness", include_str!("../../catalogs/ai-goodness.json")),
    (
        "advice-credibility",
        include_str!("../../catalogs/advice-credibility.json"),
    ),
    ("glory-to-god", include_str!("../../catalogs/glory-to-god.json")),
    (
        "family-proclamation",
        include_str!("../../catalogs/family-proclamation.json"),
    ),
];

pub const DEFAULT_CATALOG: &str = "ai-goodness";

pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(name, _)| *name)
}

pub fn load(name: &str) -> Result<Catalog, CatalogLoadError> {
    let (_, document) = BUILTIN
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .ok_or_else(|| CatalogLoadError::UnknownCatalog(name.to_string()))?;
    Catalog::from_reader(document.as_bytes())
}

/// Every built-in catalog, in registry order.
pub fn all() -> Result<Vec<Catalog>, CatalogLoadError> {
    names().map(load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_catalog_loads_under_its_registry_name() {
        let catalogs = all().expect("builtin catalogs are valid");
        assert_eq!(catalogs.len(), BUILTIN.len());
        for (catalog, name) in catalogs.iter().zip(names()) {
            assert_eq!(catalog.name(), name);
            assert!(!catalog.is_empty(), "{name} has criteria");
        }
    }

    #[test]
    fn ai_goodness_uses_the_five_point_scale() {
        let catalog = load(DEFAULT_CATALOG).expect("default catalog");
        assert_eq!(catalog.policy().scale, 5.0);
        assert_eq!(catalog.levels().thresholds(), &[1.6, 2.4, 3.2, 4.0]);
        assert_eq!(catalog.levels().bands()[4].label, "Christ-like");
        let weights: f64 = catalog.criteria().iter().map(|c| c.weight).sum();
        assert!((weights - 1.0).abs() < 1e-9);
    }
}
