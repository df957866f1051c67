//! Configuration management for the job matcher

use crate::error::{JobMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Tunable scoring policy. The dimension weights themselves are a fixed,
/// version-controlled constant (see `engine::weights`); this section holds
/// the secondary knobs around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum bonus points awarded for matched nice-to-have skills.
    pub nice_to_have_bonus: u8,
    /// Maximum number of improvement suggestions per result.
    pub suggestion_limit: usize,
    /// Sub-score threshold below which the skills dimension triggers a suggestion.
    pub skill_suggestion_threshold: u8,
    /// Sub-score threshold for the remaining dimensions.
    pub dimension_suggestion_threshold: u8,
    /// Minimum token similarity for a fuzzy title-token match.
    pub title_fuzzy_threshold: f64,
    /// Default result ceiling when the caller does not pass a limit.
    pub default_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                nice_to_have_bonus: 10,
                suggestion_limit: 5,
                skill_suggestion_threshold: 70,
                dimension_suggestion_threshold: 50,
                title_fuzzy_threshold: 0.9,
                default_limit: 50,
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
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path (the CLI `--config` flag).
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| JobMatcherError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sane() {
        let config = Config::default();
        assert_eq!(config.scoring.suggestion_limit, 5);
        assert_eq!(config.scoring.default_limit, 50);
        assert!(config.scoring.title_fuzzy_threshold > 0.0);
        assert!(config.scoring.title_fuzzy_threshold <= 1.0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring.nice_to_have_bonus, config.scoring.nice_to_have_bonus);
        assert_eq!(parsed.output.format, config.output.format);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.scoring.suggestion_limit = 3;
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.scoring.suggestion_limit, 3);
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
