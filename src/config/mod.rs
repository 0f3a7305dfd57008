//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FinderError, Result};
use crate::matcher::{PipelineOptions, DEFAULT_PARALLEL_THRESHOLD};
use crate::render::OutputFormat;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".trait-finder.json";

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_color() -> bool {
    true
}

/// @acp:summary "Main trait-finder configuration structure"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog file replacing the built-in one (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Catalog size at which matching runs in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            parallel_threshold: default_parallel_threshold(),
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, otherwise use defaults"
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(FinderError::Config(
                "parallelThreshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Pipeline tuning derived from this config
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = Config {
            catalog: Some(PathBuf::from("my-catalog.yaml")),
            parallel_threshold: 128,
            format: OutputFormat::Json,
            color: false,
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "format": "json" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.color);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "parallelThreshold": 0 }"#).unwrap();

        assert!(matches!(Config::load(&path), Err(FinderError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, r#"{ "color": false }"#).unwrap();

        assert!(!Config::load_or_default(&path).unwrap().color);

        std::fs::write(&path, r#"{ "parallelThreshold": 0 }"#).unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
