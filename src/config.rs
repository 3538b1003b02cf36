//! Agent configuration.
//!
//! Loaded from `<config_dir>/deskmon/config.json` when present; every field
//! has a default so a missing file is not an error. Times are stored as
//! plain seconds/minutes and exposed as `Duration` helpers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration for the monitoring agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of one interaction sampling window, in seconds.
    pub sample_window_secs: u64,

    /// How often the foreground window is polled, in seconds.
    pub poll_interval_secs: u64,

    /// Minimum segment length, in minutes, to count as a focus session.
    pub focus_minutes: u64,

    /// How long a failed monitoring unit sleeps before restarting.
    pub retry_cooldown_secs: u64,

    /// Database location. Defaults to `<data_dir>/deskmon/activity.db`.
    pub database_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_window_secs: 60,
            poll_interval_secs: 5,
            focus_minutes: 10,
            retry_cooldown_secs: 60,
            database_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::Io(e.to_string()))?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        Ok(())
    }

    /// Path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deskmon")
            .join("config.json")
    }

    /// Resolved database file location.
    pub fn database_file(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("deskmon")
                .join("activity.db")
        })
    }

    pub fn sample_window(&self) -> Duration {
        Duration::from_secs(self.sample_window_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Focus threshold derived from `focus_minutes`.
    pub fn focus_threshold(&self) -> Duration {
        Duration::from_secs(self.focus_minutes * 60)
    }

    pub fn retry_cooldown(&self) -> Duration {
        Duration::from_secs(self.retry_cooldown_secs)
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sample_window(), Duration::from_secs(60));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.focus_threshold(), Duration::from_secs(600));
        assert_eq!(config.retry_cooldown(), Duration::from_secs(60));
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_focus_threshold_converts_minutes() {
        let config = Config {
            focus_minutes: 3,
            ..Default::default()
        };
        assert_eq!(config.focus_threshold(), Duration::from_secs(180));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config.sample_window_secs, 60);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deskmon").join("config.json");

        let config = Config {
            sample_window_secs: 30,
            poll_interval_secs: 2,
            focus_minutes: 25,
            retry_cooldown_secs: 15,
            database_path: Some(PathBuf::from("/tmp/activity.db")),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.sample_window_secs, 30);
        assert_eq!(loaded.poll_interval_secs, 2);
        assert_eq!(loaded.focus_minutes, 25);
        assert_eq!(loaded.retry_cooldown_secs, 15);
        assert_eq!(loaded.database_path, Some(PathBuf::from("/tmp/activity.db")));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "focus_minutes": 15 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.focus_minutes, 15);
        assert_eq!(config.sample_window_secs, 60);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
