//! Weighted multi-criteria evaluation of free text.
//!
//! A [`Catalog`] declares weighted criteria, each carrying positive and
//! negative indicator phrases. The [`EvaluationEngine`] scores text against
//! every criterion, folds the scores into a weighted overall score, classifies
//! that score into a qualitative level and derives strengths, concerns and
//! recommendations.

pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod probe;
pub mod report;
pub mod telemetry;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, CatalogLoadError, Criterion};
pub use evaluation::{CriterionScore, EvaluationEngine, EvaluationResult, Level};
