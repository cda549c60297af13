// src/config.rs
// Application configuration persisted as JSON under ~/.tally/

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, Result};

pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_MAX_HISTORY: usize = 100;
pub const MAX_PRECISION: usize = 15;
pub const MAX_HISTORY_LIMIT: usize = 10_000;

const DATA_DIR: &str = ".tally";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.json";

/// Application configuration.
///
/// The file paths are computed at startup and never serialized; `None`
/// means "use the computed default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Display settings
    pub precision: usize,
    pub show_welcome: bool,
    pub clear_screen: bool,
    pub color_output: bool,

    // Behavior settings
    pub save_history: bool,
    pub max_history: usize,
    pub auto_save: bool,
    pub confirm_exit: bool,

    // Reserved for future features
    pub use_radians: bool,
    pub scientific_mode: bool,
    pub thousand_sep: bool,

    #[serde(skip)]
    pub config_path: Option<PathBuf>,
    #[serde(skip)]
    pub history_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let dir = data_dir();
        Config {
            precision: DEFAULT_PRECISION,
            show_welcome: true,
            clear_screen: true,
            color_output: false,
            save_history: true,
            max_history: DEFAULT_MAX_HISTORY,
            auto_save: true,
            confirm_exit: false,
            use_radians: false,
            scientific_mode: false,
            thousand_sep: false,
            config_path: Some(dir.join(CONFIG_FILE)),
            history_path: Some(dir.join(HISTORY_FILE)),
        }
    }
}

/// Directory holding the config and history files, `~/.tally` with a
/// fallback to the current directory when no home is available.
fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR)
}

impl Config {
    /// Load the configuration from the default location. A missing file
    /// yields the defaults and is not an error.
    pub fn load() -> Result<Config> {
        let path = data_dir().join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Config> {
        let mut config = Config {
            config_path: Some(path.to_path_buf()),
            ..Config::default()
        };

        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(config);
        }

        let data =
            std::fs::read_to_string(path).map_err(|e| CalcError::file(path, "read", e))?;

        let loaded: Config =
            serde_json::from_str(&data).map_err(|e| CalcError::file(path, "parse", e))?;

        debug!(path = %path.display(), "loaded config from file");

        // The paths are computed, not stored in the file.
        config = Config {
            config_path: config.config_path.take(),
            history_path: config.history_path.take(),
            ..loaded
        };

        Ok(config)
    }

    /// Write the configuration back to its file, overwriting it.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Err(CalcError::validation(
                "config_path",
                "none",
                "no config path set",
            ));
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| CalcError::file(parent, "create", e))?;
            }
        }

        let data = serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::file(path, "serialize", e))?;

        std::fs::write(path, data).map_err(|e| CalcError::file(path, "write", e))?;

        Ok(())
    }

    /// Check that all values are within their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(CalcError::validation(
                "precision",
                self.precision.to_string(),
                format!("must be between 0 and {MAX_PRECISION}"),
            ));
        }

        if self.max_history > MAX_HISTORY_LIMIT {
            return Err(CalcError::validation(
                "max_history",
                self.max_history.to_string(),
                format!("must be between 0 and {MAX_HISTORY_LIMIT}"),
            ));
        }

        Ok(())
    }

    /// Restore default values, keeping the computed file paths.
    pub fn reset(&mut self) {
        let config_path = self.config_path.take();
        let history_path = self.history_path.take();
        *self = Config::default();
        self.config_path = config_path;
        self.history_path = history_path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert!(config.show_welcome);
        assert!(config.save_history);
        assert!(config.auto_save);
        assert!(!config.confirm_exit);
        assert!(!config.color_output);
        assert!(config.config_path.is_some());
        assert!(config.history_path.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config {
            config_path: Some(path.clone()),
            ..Config::default()
        };
        config.precision = 6;
        config.confirm_exit = true;
        config.max_history = 250;
        config.save().unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.precision, 6);
        assert!(loaded.confirm_exit);
        assert_eq!(loaded.max_history, 250);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"precision": 5}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.precision, 5);
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert!(config.save_history);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "precision = 5").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::File);
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = Config::default();
        config.precision = 15;
        assert!(config.validate().is_ok());
        config.precision = 16;
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Validation);

        config.precision = 2;
        config.max_history = 10_000;
        assert!(config.validate().is_ok());
        config.max_history = 10_001;
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_reset_preserves_paths() {
        let mut config = Config {
            config_path: Some(PathBuf::from("/tmp/custom/config.json")),
            history_path: Some(PathBuf::from("/tmp/custom/history.json")),
            ..Config::default()
        };
        config.precision = 9;
        config.reset();

        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(
            config.config_path.as_deref(),
            Some(Path::new("/tmp/custom/config.json"))
        );
        assert_eq!(
            config.history_path.as_deref(),
            Some(Path::new("/tmp/custom/history.json"))
        );
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config {
            config_path: None,
            ..Config::default()
        };
        let err = config.save().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_paths_not_serialized() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("config_path"));
        assert!(!json.contains("history_path"));
    }
}
