//! Per-project settings
//!
//! An optional `vivalux-setup.toml` at the project root supplies output
//! defaults. Command-line flags take precedence over anything set here.
//!
//! ```toml
//! [output]
//! quiet = false
//! json = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults::PROJECT_CONFIG_FILE;
use crate::error::ConfigError;

/// Contents of `vivalux-setup.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputPreferences,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputPreferences {
    /// Suppress everything but errors
    pub quiet: Option<bool>,

    /// Print a JSON summary instead of progress output
    pub json: Option<bool>,
}

impl ProjectConfig {
    /// Load settings from the project root
    ///
    /// A missing file yields the defaults.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path,
            error: e.message().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_output_preferences_parsed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[output]\nquiet = true\n",
        )
        .unwrap();

        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config.output.quiet, Some(true));
        assert_eq!(config.output.json, None);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[output\n").unwrap();

        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[output]\ncolour = true\n",
        )
        .unwrap();

        assert!(ProjectConfig::load(dir.path()).is_err());
    }
}
