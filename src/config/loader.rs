//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! rule set from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{LegislationMetadata, SeveranceConfig, StatutoryRules};

/// Loads and provides access to the severance rule set.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the legislation metadata and statutory parameters.
///
/// # Directory Structure
///
/// ```text
/// config/clt/
/// ├── legislation.yaml   # Legislation metadata
/// └── rules.yaml         # Statutory parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use severance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt").unwrap();
/// println!("Loaded rule set: {}", loader.legislation().name);
/// println!("Fund penalty: {}", loader.rules().fund.without_cause_penalty_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SeveranceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/clt")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rule set contains unusable values (zero divisors, rates outside `[0, 1]`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use severance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt")?;
    /// # Ok::<(), severance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<LegislationMetadata>(&path.join("legislation.yaml"))?;
        let rules = Self::load_yaml::<StatutoryRules>(&path.join("rules.yaml"))?;
        rules.validate()?;

        info!(
            code = %metadata.code,
            version = %metadata.version,
            path = %path.display(),
            "Loaded statutory rule set"
        );

        Ok(Self {
            config: SeveranceConfig::new(metadata, rules),
        })
    }

    /// Returns a loader holding the built-in rule set.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// assert_eq!(loader.legislation().code, "CLT");
    /// ```
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying severance configuration.
    pub fn config(&self) -> &SeveranceConfig {
        &self.config
    }

    /// Returns the legislation metadata.
    pub fn legislation(&self) -> &LegislationMetadata {
        self.config.legislation()
    }

    /// Returns the statutory parameters.
    pub fn rules(&self) -> &StatutoryRules {
        self.config.rules()
    }
}
