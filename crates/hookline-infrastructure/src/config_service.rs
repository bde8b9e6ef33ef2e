//! Configuration service implementation.
//!
//! Loads the typed application configuration from config.toml
//! (~/.config/hookline/config.toml) through `ConfigStorage`.

use crate::paths::HooklinePaths;
use crate::storage::ConfigStorage;
use anyhow::{Context, Result, anyhow};
use hookline_core::config::AppConfig;
use std::path::PathBuf;

/// Configuration service backed by config.toml.
///
/// A missing file yields `AppConfig::default()`; keys absent from the file
/// fall back to their defaults individually.
pub struct ConfigService {
    storage: ConfigStorage,
}

impl ConfigService {
    /// Creates a service for the config file in the resolved config dir.
    pub fn new(paths: &HooklinePaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| anyhow!("Failed to get config path: {}", e))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service for the config file at `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: ConfigStorage::new(path),
        }
    }

    /// Loads the configuration.
    pub fn load(&self) -> Result<AppConfig> {
        let Some(value) = self
            .storage
            .load()
            .with_context(|| format!("Failed to read {}", self.storage.path().display()))?
        else {
            return Ok(AppConfig::default());
        };

        serde_json::from_value(value)
            .with_context(|| format!("Invalid config in {}", self.storage.path().display()))
    }

    /// Loads the configuration, writing the defaults first if no file exists.
    pub fn ensure_default(&self) -> Result<AppConfig> {
        if self.storage.path().exists() {
            return self.load();
        }

        let config = AppConfig::default();
        self.save(&config)?;
        tracing::info!(
            path = %self.storage.path().display(),
            "[Config] Wrote default configuration"
        );
        Ok(config)
    }

    /// Saves the configuration.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let value = serde_json::to_value(config)?;
        self.storage
            .save(&value)
            .with_context(|| format!("Failed to write {}", self.storage.path().display()))
    }

    /// Applies `f` to the stored configuration under the file lock.
    pub fn update<F>(&self, f: F) -> Result<AppConfig>
    where
        F: FnOnce(&mut AppConfig),
    {
        let default_value = serde_json::to_value(AppConfig::default())?;
        let updated = self.storage.update(default_value, |value| {
            let mut config: AppConfig = serde_json::from_value(value.clone())?;
            f(&mut config);
            *value = serde_json::to_value(&config)?;
            Ok(())
        })?;

        Ok(serde_json::from_value(updated)?)
    }
}
