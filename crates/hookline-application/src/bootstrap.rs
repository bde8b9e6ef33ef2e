//! Composition root.
//!
//! Wires configuration, persistence, credentials and strategies into an
//! `IdeaGenerationUseCase`. The host supplies the collaborators that live
//! outside this workspace (the backend client, its response parser and the
//! notification front end).

use crate::generation::{DualTierStrategy, StrategyRegistry};
use crate::generation_usecase::IdeaGenerationUseCase;
use crate::history_store::HistoryStore;
use anyhow::{Result, anyhow};
use hookline_core::config::AppConfig;
use hookline_core::generation::{GenerationBackend, ResponseParser};
use hookline_core::notification::NotificationSink;
use hookline_infrastructure::paths::HooklinePaths;
use hookline_infrastructure::{ConfigService, FileSnapshotStorage, SecretCredentialSource};
use std::sync::Arc;

/// Collaborators provided by the host application.
pub struct Collaborators {
    pub backend: Arc<dyn GenerationBackend>,
    pub parser: Arc<dyn ResponseParser>,
    pub notifier: Arc<dyn NotificationSink>,
}

pub struct AppBootstrap {
    /// Configuration the use case was built from.
    pub config: AppConfig,
    pub usecase: IdeaGenerationUseCase,
}

impl AppBootstrap {
    /// Builds the application rooted at `paths`.
    ///
    /// Writes a default config.toml on first run and loads the persisted
    /// history. Tracing is not initialized here; call
    /// `hookline_infrastructure::logging::init_tracing` with
    /// `config.logging` first if logs are wanted.
    pub fn build(paths: &HooklinePaths, collaborators: Collaborators) -> Result<Self> {
        let config = ConfigService::new(paths)?.ensure_default()?;

        let history_dir = paths
            .history_dir()
            .map_err(|e| anyhow!("Failed to get history dir: {}", e))?;
        tracing::info!(
            "[Bootstrap] History storage at: {:?} (key: {}, quota: {} bytes)",
            history_dir,
            config.history.storage_key,
            config.history.quota_bytes
        );
        let storage = Arc::new(
            FileSnapshotStorage::new(history_dir).with_quota(config.history.quota_bytes),
        );
        let history = HistoryStore::load(storage, config.history.storage_key.clone())
            .with_eviction_policy(config.history.eviction);
        tracing::info!("[Bootstrap] Loaded {} history entries", history.len());

        let credentials = Arc::new(SecretCredentialSource::new(paths)?);

        let strategies = StrategyRegistry::new().with_strategy(Arc::new(
            DualTierStrategy::instagram_reels(collaborators.backend, collaborators.parser),
        ));

        let usecase =
            IdeaGenerationUseCase::new(credentials, strategies, collaborators.notifier, history);

        Ok(Self { config, usecase })
    }
}
