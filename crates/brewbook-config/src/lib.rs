//! Configuration management for brewbook
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (BREWBOOK_* prefix, `__` between keys)
//! 2. brewbook.local.toml (gitignored, local overrides)
//! 3. brewbook.toml (git-tracked, project config)
//! 4. ~/.config/brewbook/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! CLI flags are applied on top by the caller.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main brewbook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewbookConfig {
    pub output: OutputConfig,
    pub quirks: QuirksConfig,
    pub lessons: LessonsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Reproduction of authoring slips in the original lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuirksConfig {
    /// Keep the order confirmation that always names chai.
    pub faithful_order_confirmation: bool,
}

impl Default for QuirksConfig {
    fn default() -> Self {
        Self {
            faithful_order_confirmation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonsConfig {
    /// Lesson names run when none are given explicitly.
    pub enabled: Vec<String>,
}

impl Default for LessonsConfig {
    fn default() -> Self {
        Self {
            enabled: vec!["functions".to_string(), "objects".to_string()],
        }
    }
}

impl BrewbookConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Checks invariants the type system does not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lessons.enabled.is_empty() {
            return Err(ConfigError::ValidationError(
                "lessons.enabled must name at least one lesson".to_string(),
            ));
        }
        if let Some(blank) = self.lessons.enabled.iter().find(|l| l.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "lessons.enabled contains a blank entry: {blank:?}"
            )));
        }
        Ok(())
    }

    /// Writes this configuration as `brewbook.toml` into `project_dir`.
    ///
    /// Refuses to overwrite an existing file.
    pub fn write_project_file(&self, project_dir: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
        let path = Paths::project_config_file(project_dir);
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path));
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|source| ConfigError::WriteError {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "wrote project config");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BrewbookConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(config.quirks.faithful_order_confirmation);
        assert_eq!(config.lessons.enabled, ["functions", "objects"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_lessons_rejected() {
        let mut config = BrewbookConfig::default();
        config.lessons.enabled.clear();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_blank_lesson_rejected() {
        let mut config = BrewbookConfig::default();
        config.lessons.enabled.push("  ".to_string());

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_write_project_file_round_trips() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let mut config = BrewbookConfig::default();
        config.output.format = OutputFormat::Json;

        let path = config
            .write_project_file(temp_dir.path())
            .expect("Failed to write config");
        assert!(Paths::is_initialized(temp_dir.path()));

        let written: BrewbookConfig =
            toml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written, config);
    }

    #[test]
    fn test_write_project_file_refuses_overwrite() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = BrewbookConfig::default();

        config.write_project_file(temp_dir.path()).unwrap();
        let err = config.write_project_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }
}
