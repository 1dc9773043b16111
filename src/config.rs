//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use crate::matching::factors::{default_factors, MotivationFactor, MAX_WEIGHT, MIN_WEIGHT};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// The motivation matrix, in reporting order.
    pub factors: Vec<MotivationFactor>,
    /// Results below this percentage are left out of reports.
    pub min_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                factors: default_factors(),
                min_score: 0.0,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Loads the per-user config file, writing the defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::read(&config_path)
        } else {
            info!("No config at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Loads an explicitly named config file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeMatcherError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::read(path)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// The explicitly named config file, or the per-user default.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Overwrites `path` with the default configuration.
    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        info!("Reset config at {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    /// Rejects factor weights outside 1..=10 and a minimum score outside 0..=100.
    pub fn validate(&self) -> Result<()> {
        if let Some(factor) = self
            .matching
            .factors
            .iter()
            .find(|f| !(MIN_WEIGHT..=MAX_WEIGHT).contains(&f.weight))
        {
            return Err(ResumeMatcherError::Configuration(format!(
                "Weight {} for factor '{}' is outside {}..={}",
                factor.weight, factor.name, MIN_WEIGHT, MAX_WEIGHT
            )));
        }

        if !(0.0..=100.0).contains(&self.matching.min_score) {
            return Err(ResumeMatcherError::Configuration(format!(
                "Minimum score {} is outside 0..=100",
                self.matching.min_score
            )));
        }

        Ok(())
    }

    pub fn factors(&self) -> &[MotivationFactor] {
        &self.matching.factors
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.matching.min_score = 40.0;
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_reset_overwrites_named_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let resolved = Config::resolve_path(Some(&path));
        assert_eq!(resolved, path);

        let config = Config::reset_at(&resolved).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_resolve_path_defaults_to_user_config() {
        assert_eq!(Config::resolve_path(None), Config::config_path());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::Configuration(_)));
    }

    #[test]
    fn test_weight_out_of_range_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let toml = r#"
[matching]
min_score = 0.0

[[matching.factors]]
name = "Salary"
weight = 11

[output]
format = "Console"
detailed = false
color_output = false
"#;
        std::fs::write(&path, toml).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Salary"));
    }

    #[test]
    fn test_malformed_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "matching = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeMatcherError::Configuration(_))
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.factors().len(), 6);
    }
}
