//! Top-level Folio configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RecommendConfig;
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FOLIO_*`)
/// 3. Project config (`folio.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub recommend: RecommendConfig,
}

/// Caller-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub top_n: Option<usize>,
    pub min_ratings: Option<usize>,
    pub min_support: Option<f64>,
    pub min_lift: Option<f64>,
}

impl FolioConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
        let r = &config.recommend;
        if r.effective_top_n() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if r.effective_min_ratings() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.min_ratings".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let support = r.effective_min_support();
        if !(support > 0.0 && support <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.min_support".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }
        let lift = r.effective_min_lift();
        if !(lift > 1.0 && lift.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: "recommend.min_lift".to_string(),
                message: "must be a finite value greater than 1.0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut FolioConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FolioConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut FolioConfig, other: &FolioConfig) {
        let (b, o) = (&mut base.recommend, &other.recommend);
        if o.top_n.is_some() {
            b.top_n = o.top_n;
        }
        if o.min_ratings.is_some() {
            b.min_ratings = o.min_ratings;
        }
        if o.min_support.is_some() {
            b.min_support = o.min_support;
        }
        if o.min_lift.is_some() {
            b.min_lift = o.min_lift;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FOLIO_TOP_N`, `FOLIO_MIN_RATINGS`, `FOLIO_MIN_SUPPORT`, `FOLIO_MIN_LIFT`.
    fn apply_env_overrides(config: &mut FolioConfig) {
        if let Ok(val) = std::env::var("FOLIO_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.recommend.top_n = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FOLIO_MIN_RATINGS") {
            if let Ok(v) = val.parse::<usize>() {
                config.recommend.min_ratings = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FOLIO_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.recommend.min_support = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FOLIO_MIN_LIFT") {
            if let Ok(v) = val.parse::<f64>() {
                config.recommend.min_lift = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut FolioConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.top_n {
            config.recommend.top_n = Some(v);
        }
        if let Some(v) = overrides.min_ratings {
            config.recommend.min_ratings = Some(v);
        }
        if let Some(v) = overrides.min_support {
            config.recommend.min_support = Some(v);
        }
        if let Some(v) = overrides.min_lift {
            config.recommend.min_lift = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
