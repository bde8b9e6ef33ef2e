//! Config file storage with ACID guarantees.
//!
//! Returns data as `serde_json::Value` (intermediate format) to decouple the
//! typed config model from TOML specifics.

use super::atomic_file::{FileLock, atomic_write};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config storage operations.
#[derive(Error, Debug)]
pub enum ConfigStorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A config file storage.
///
/// Responsibilities:
/// - **File locking** (exclusive write lock around read-modify-write)
/// - **Atomic writes** (tmp file + fsync + rename)
/// - **Format conversion** (TOML ⇄ serde_json::Value)
///
/// Does NOT:
/// - Know about the typed config model (handled by `ConfigService`)
/// - Apply defaults to missing keys
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new config storage handle for the TOML file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config file as JSON.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(JsonValue))`: Loaded and converted
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<JsonValue>, ConfigStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let toml_value: toml::Value = toml::from_str(&content)?;
        Ok(Some(toml_to_json(toml_value)?))
    }

    /// Saves `data` to the config file atomically.
    pub fn save(&self, data: &JsonValue) -> Result<(), ConfigStorageError> {
        let toml_value = json_to_toml(data)?;
        let toml_string = toml::to_string_pretty(&toml_value)?;
        atomic_write(&self.path, toml_string.as_bytes())?;
        Ok(())
    }

    /// Performs a locked read-modify-write.
    ///
    /// `f` receives the current data (or `default_value` when the file is
    /// missing). If it returns `Ok(())`, the result is written back
    /// atomically and returned.
    pub fn update<F>(&self, default_value: JsonValue, f: F) -> Result<JsonValue, ConfigStorageError>
    where
        F: FnOnce(&mut JsonValue) -> Result<(), ConfigStorageError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;

        Ok(data)
    }
}

/// Converts a toml::Value to serde_json::Value.
fn toml_to_json(toml_value: toml::Value) -> Result<JsonValue, ConfigStorageError> {
    Ok(serde_json::to_value(toml_value)?)
}

/// Converts a serde_json::Value to toml::Value.
fn json_to_toml(json_value: &JsonValue) -> Result<toml::Value, ConfigStorageError> {
    let json_str = serde_json::to_string(json_value)?;
    Ok(serde_json::from_str(&json_str)?)
}
