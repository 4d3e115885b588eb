//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file via the
//! `config` crate, overlaid with `FOLDERHUB__*` environment variables.
//! Every field has a default, so running without a file is valid.

pub mod data;
pub mod generator;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::generator::GeneratorConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Folder data source settings.
    #[serde(default)]
    pub data: DataConfig,
    /// Random sample generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `FOLDERHUB` (double underscore as the section separator, e.g.
    /// `FOLDERHUB_GENERATOR__MAX_DEPTH=3`) override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FOLDERHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.generator.validate()?;
        tracing::debug!(path = %path, "Configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_ORG_ID;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist.toml").expect("defaults");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.data.sample_path, "data/sample.json");
        assert_eq!(config.data.default_org_id, DEFAULT_ORG_ID);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("folderhub.toml");
        std::fs::write(
            &path,
            "[generator]\nmax_depth = 3\n\n[data]\nsample_path = \"other.json\"\n",
        )
        .expect("write");

        let config = AppConfig::load(path.to_str().expect("utf-8 path")).expect("load");
        assert_eq!(config.generator.max_depth, 3);
        assert_eq!(config.generator.max_child, 4);
        assert_eq!(config.data.sample_path, "other.json");
    }

    #[test]
    fn test_invalid_generator_bounds_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("folderhub.toml");
        std::fs::write(&path, "[generator]\nmax_child = 0\n").expect("write");

        let err = AppConfig::load(path.to_str().expect("utf-8 path")).expect_err("invalid");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
