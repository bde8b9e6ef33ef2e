//! Unified path management for hookline configuration and data files.
//!
//! Every storage component resolves its location through `HooklinePaths`
//! so that a single base path override (used by tests and portable installs)
//! relocates all of them together.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "hookline";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for hookline.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/hookline/          # Config directory (or the base override)
/// ├── config.toml              # Application configuration
/// ├── secret.json              # API keys
/// └── logs/                    # Application logs
///     └── hookline.log.YYYY-MM-DD
///
/// ~/.local/share/hookline/     # Data directory (or <base>/data)
/// └── history/                 # Snapshot files, one per storage key
///     └── reels_idea_history.json
/// ```
#[derive(Debug, Clone, Default)]
pub struct HooklinePaths {
    base: Option<PathBuf>,
}

impl HooklinePaths {
    /// Creates a path resolver.
    ///
    /// With `Some(base)`, everything lives under `base` instead of the
    /// platform config/data directories.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory (used for history snapshots).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the path to config.toml.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to secret.json.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    /// Returns the directory holding history snapshot files.
    pub fn history_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("history"))
    }

    /// Returns the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
