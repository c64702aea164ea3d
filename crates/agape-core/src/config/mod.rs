use crate::catalog::builtin::DEFAULT_CATALOG;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("AGAPE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("AGAPE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog = env::var("AGAPE_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.to_string());
        if catalog.trim().is_empty() {
            return Err(ConfigError::BlankCatalog);
        }

        let catalog_dir = match env::var("AGAPE_CATALOG_DIR") {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value.trim());
                if !path.is_dir() {
                    return Err(ConfigError::InvalidCatalogDir { path });
                }
                Some(path)
            }
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation: EvaluationSettings {
                catalog: catalog.trim().to_string(),
                catalog_dir,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Which catalog to evaluate against and where custom catalogs live.
#[derive(Debug, Clone)]
pub struct EvaluationSettings {
    /// Builtin name, file stem inside `catalog_dir`, or a path to a `.json` file.
    pub catalog: String,
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    BlankCatalog,
    InvalidCatalogDir { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BlankCatalog => write!(f, "AGAPE_CATALOG must not be blank"),
            ConfigError::InvalidCatalogDir { path } => write!(
                f,
                "AGAPE_CATALOG_DIR must point to a directory (got {})",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
