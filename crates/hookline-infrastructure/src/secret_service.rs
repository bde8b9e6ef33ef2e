//! Credential source implementations.
//!
//! `SecretCredentialSource` reads API keys from secret.json with an
//! environment variable fallback; `StaticCredentialSource` holds them in
//! memory.

use crate::paths::HooklinePaths;
use crate::storage::{SecretStorage, SecretStorageError};
use anyhow::{Result, anyhow};
use hookline_core::secret::{CredentialSource, OPENAI_API_KEY_KEY};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when secret.json has no OpenAI key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Credential source backed by secret.json.
///
/// Priority:
/// 1. `openai.api_key` in secret.json
/// 2. The `OPENAI_API_KEY` environment variable (unless disabled)
///
/// The file is re-read on every lookup so edits made while the application
/// runs take effect on the next generation request.
pub struct SecretCredentialSource {
    storage: SecretStorage,
    env_fallback: Option<String>,
}

impl SecretCredentialSource {
    /// Creates a source reading secret.json from the resolved config dir.
    pub fn new(paths: &HooklinePaths) -> Result<Self> {
        let path = paths
            .secret_file()
            .map_err(|e| anyhow!("Failed to get secret path: {}", e))?;
        Ok(Self::with_path(path))
    }

    /// Creates a source reading the secret file at `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: SecretStorage::with_path(path),
            env_fallback: Some(OPENAI_API_KEY_ENV.to_string()),
        }
    }

    /// Disables the environment variable fallback.
    pub fn without_env_fallback(mut self) -> Self {
        self.env_fallback = None;
        self
    }

    fn openai_key_from_file(&self) -> Option<String> {
        match self.storage.load() {
            Ok(config) => config.openai.map(|openai| openai.api_key),
            Err(SecretStorageError::NotFound(_)) => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.storage.path().display(),
                    "[Secrets] Failed to load secret file: {}",
                    e
                );
                None
            }
        }
    }

    fn openai_key_from_env(&self) -> Option<String> {
        self.env_fallback
            .as_deref()
            .and_then(|var| env::var(var).ok())
    }
}

impl CredentialSource for SecretCredentialSource {
    fn get(&self, key: &str) -> Option<String> {
        if key != OPENAI_API_KEY_KEY {
            return None;
        }

        non_blank(self.openai_key_from_file()).or_else(|| non_blank(self.openai_key_from_env()))
    }
}

/// In-memory credential source.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialSource {
    values: HashMap<String, String>,
}

impl StaticCredentialSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a credential.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentialSource {
    fn get(&self, key: &str) -> Option<String> {
        non_blank(self.values.get(key).cloned())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
