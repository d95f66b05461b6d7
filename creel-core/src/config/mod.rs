//! Configuration with layered resolution: compiled defaults, then a
//! `creel.toml` project file, then `CREEL_*` environment variables.

pub mod recidivism_config;
pub mod reporting_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use recidivism_config::RecidivismConfig;
pub use reporting_config::ReportingConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CreelConfig {
    pub recidivism: RecidivismConfig,
    pub reporting: ReportingConfig,
    pub storage: StorageConfig,
}

impl CreelConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`CREEL_*`)
    /// 2. Project config (`creel.toml` in `root`)
    /// 3. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("creel.toml");
        if project_config_path.exists() {
            let raw = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ReadError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            config = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: project_config_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CREEL_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var("CREEL_LOOKBACK_MONTHS") {
            self.recidivism.default_lookback_months =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "CREEL_LOOKBACK_MONTHS".to_string(),
                    message: format!("expected a non-negative integer, got '{value}'"),
                })?;
        }
        if let Ok(value) = std::env::var("CREEL_REPORT_TOP_LIMIT") {
            self.reporting.top_limit = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "CREEL_REPORT_TOP_LIMIT".to_string(),
                message: format!("expected a positive integer, got '{value}'"),
            })?;
        }
        if let Ok(value) = std::env::var("CREEL_DB_PATH") {
            self.storage.db_path = value.into();
        }
        Ok(())
    }

    /// Reject configurations that cannot work.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.reporting.top_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "reporting.top_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.read_pool_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CreelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.recidivism.default_lookback_months, 12);
        assert_eq!(config.reporting.top_limit, 5);
    }

    #[test]
    fn project_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("creel.toml"),
            "[recidivism]\ndefault_lookback_months = 24\n",
        )
        .unwrap();

        let config = CreelConfig::load(dir.path()).unwrap();
        assert_eq!(config.recidivism.default_lookback_months, 24);
        // Untouched sections keep their defaults.
        assert_eq!(config.reporting.top_limit, 5);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("creel.toml"), "not valid [[ toml").unwrap();

        let err = CreelConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
