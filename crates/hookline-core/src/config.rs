use crate::history::{DEFAULT_HISTORY_KEY, EvictionPolicy};
use serde::{Deserialize, Serialize};

/// Default capacity of the history snapshot medium (5 MiB).
pub const DEFAULT_HISTORY_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "hookline=info";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[history]` section.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Key of the history blob in the snapshot medium.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Capacity of the snapshot medium in bytes.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
    #[serde(default)]
    pub eviction: EvictionPolicy,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
            eviction: EvictionPolicy::default(),
        }
    }
}

/// `[logging]` section.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `HOOKLINE_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Also write logs to a daily rolling file in the logs directory.
    #[serde(default)]
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            log_to_file: false,
        }
    }
}

fn default_storage_key() -> String {
    DEFAULT_HISTORY_KEY.to_string()
}

fn default_quota_bytes() -> usize {
    DEFAULT_HISTORY_QUOTA_BYTES
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Contents of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAIConfig>,
}

/// OpenAI credentials.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}
