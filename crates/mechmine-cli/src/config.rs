//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem locations
    #[serde(default)]
    pub paths: Paths,

    /// Scoring and selection settings
    #[serde(default)]
    pub scoring: ScoringSettings,
}

/// Filesystem locations for the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    /// Papers database path
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Directory where JSON artifacts are written
    #[serde(default = "default_artifacts")]
    pub artifacts: PathBuf,
}

/// Scoring and selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Score threshold counted as high-value in corpus statistics
    #[serde(default = "default_threshold")]
    pub high_value_threshold: u8,

    /// Papers to select per category
    #[serde(default = "default_per_category")]
    pub target_per_category: usize,
}

fn default_database() -> PathBuf {
    PathBuf::from("database/papers.db")
}

fn default_artifacts() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_threshold() -> u8 {
    5
}

fn default_per_category() -> usize {
    20
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            database: default_database(),
            artifacts: default_artifacts(),
        }
    }
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            high_value_threshold: default_threshold(),
            target_per_category: default_per_category(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Paths::default(),
            scoring: ScoringSettings::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".mechmine").join("config.toml"))
    }

    /// Load configuration from file, or defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.database, PathBuf::from("database/papers.db"));
        assert_eq!(config.scoring.high_value_threshold, 5);
        assert_eq!(config.scoring.target_per_category, 20);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            database = "/data/papers.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.paths.database, PathBuf::from("/data/papers.db"));
        assert_eq!(config.paths.artifacts, PathBuf::from("artifacts"));
        assert_eq!(config.scoring.target_per_category, 20);
    }

    #[test]
    fn test_load_from_missing_file_is_config_error() {
        let result = Config::load_from(&PathBuf::from("/nonexistent/config.toml"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
