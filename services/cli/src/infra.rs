use agape_core::catalog::CatalogSource;
use agape_core::config::AppConfig;
use agape_core::error::AppError;
use agape_core::telemetry;
use agape_core::EvaluationEngine;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Loads configuration and installs the subscriber; every command starts here.
pub(crate) fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

/// A `--catalog` flag overrides the configured catalog.
pub(crate) fn load_engine(
    config: &AppConfig,
    catalog_override: Option<&str>,
) -> Result<EvaluationEngine, AppError> {
    let reference = catalog_override.unwrap_or(&config.evaluation.catalog);
    let catalog = CatalogSource::resolve(reference, config.evaluation.catalog_dir.as_deref())?;
    info!(
        catalog = catalog.name(),
        criteria = catalog.criteria().len(),
        "catalog ready"
    );
    Ok(EvaluationEngine::new(Arc::new(catalog)))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_context_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("context entry '{raw}' must look like key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("context entry '{raw}' is missing a key"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_pairs_split_on_the_first_equals_sign() {
        assert_eq!(
            parse_context_pair(" note = a=b ").expect("pair parses"),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_context_pair("no separator").is_err());
        assert!(parse_context_pair("=value").is_err());
    }

    #[test]
    fn dates_use_iso_format() {
        assert_eq!(
            parse_date("2025-09-24").expect("date parses"),
            NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
        );
        assert!(parse_date("09/24/2025").is_err());
    }
}
