//! Board Configuration
//!
//! Persistent settings for the interactive board, stored as TOML in the
//! platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::ColorChoice;
use crate::errors::BoardError;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Colored output (auto/always/never)
    pub color: ColorChoice,

    /// Print the board after every command that changes it
    pub auto_draw: bool,

    /// File for REPL line history
    pub history_file: Option<PathBuf>,

    /// Max history entries
    pub history_size: usize,

    /// Board file loaded at startup
    pub default_file: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::sensible_defaults()
    }
}

impl BoardConfig {
    /// Config with sensible defaults
    pub fn sensible_defaults() -> Self {
        Self {
            color: ColorChoice::Auto,
            auto_draw: false,
            history_file: Self::data_dir().map(|d| d.join("history.txt")),
            history_size: 500,
            default_file: None,
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "shape-board", "shape-board")
    }

    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Data directory (history)
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Path of the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration from the default location
pub fn load_config() -> Result<BoardConfig, BoardError> {
    let path = BoardConfig::config_path().ok_or_else(|| {
        BoardError::Configuration("Could not determine config path".to_string())
    })?;
    load_config_from(&path)
}

/// Load configuration from `path`; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<BoardConfig, BoardError> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(BoardConfig::sensible_defaults());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| BoardError::Configuration(format!("Failed to read config: {e}")))?;

    toml::from_str(&content)
        .map_err(|e| BoardError::Configuration(format!("Invalid TOML config: {e}")))
}

/// Save configuration to `path`
pub fn save_config_to(config: &BoardConfig, path: &Path) -> Result<(), BoardError> {
    // Create directory if it doesn't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BoardError::Configuration(format!("Failed to create config dir: {e}"))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| BoardError::Configuration(format!("Failed to serialize config: {e}")))?;

    fs::write(path, content)
        .map_err(|e| BoardError::Configuration(format!("Failed to write config: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sensible_defaults() {
        let config = BoardConfig::sensible_defaults();
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(!config.auto_draw);
        assert_eq!(config.history_size, 500);
        assert!(config.default_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, BoardConfig::sensible_defaults());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = \"never\"\nauto_draw = true\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.auto_draw);
        assert_eq!(config.history_size, 500);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = \"sometimes\"\n").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(BoardError::Configuration(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = BoardConfig {
            auto_draw: true,
            default_file: Some(PathBuf::from("board.txt")),
            ..BoardConfig::sensible_defaults()
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }
}
