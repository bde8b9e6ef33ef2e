//! Idea generation use case.
//!
//! `IdeaGenerationUseCase` validates a request, dispatches it to the
//! platform strategy, publishes the result through a watch channel and
//! records non-empty batches in the history store.

use crate::generation::state::LoadingGuard;
use crate::generation::{PlatformDispatch, RequestState, StrategyRegistry};
use crate::history_store::{AppendOutcome, HistoryStore};
use hookline_core::generation::GenerationError;
use hookline_core::notification::{Notification, NotificationSink};
use hookline_core::secret::{CredentialSource, OPENAI_API_KEY_KEY};
use hookline_core::{Idea, SocialPlatform};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

pub const ERROR_TITLE: &str = "Error";
pub const MISSING_TOPIC_MESSAGE: &str = "Please enter a topic";
pub const MISSING_CREDENTIAL_TITLE: &str = "API Key Required";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please set your OpenAI API key in the settings";
pub const GENERATION_FAILED_MESSAGE: &str = "An error occurred while generating content ideas";

/// Result of a completed `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationReport {
    /// A registered strategy produced a batch.
    Generated {
        platform: SocialPlatform,
        idea_count: usize,
        /// How the batch was recorded; `None` when the batch was empty.
        persistence: Option<AppendOutcome>,
    },
    /// No strategy serves the tag; the current batch was cleared.
    UnsupportedPlatform { tag: String },
}

impl GenerationReport {
    pub fn idea_count(&self) -> usize {
        match self {
            Self::Generated { idea_count, .. } => *idea_count,
            Self::UnsupportedPlatform { .. } => 0,
        }
    }
}

/// Use case for generating ideas and managing their history.
///
/// # Concurrency
///
/// `loading` is advisory and does not serialize calls. The backend call is
/// the only suspension point; the history lock is never held across it.
pub struct IdeaGenerationUseCase {
    /// Source of the backend API credential
    credentials: Arc<dyn CredentialSource>,
    /// Platform strategies
    strategies: StrategyRegistry,
    /// Sink for user-facing error notifications
    notifier: Arc<dyn NotificationSink>,
    /// Persisted idea history
    history: Mutex<HistoryStore>,
    /// Published request state
    state: watch::Sender<RequestState>,
}

impl IdeaGenerationUseCase {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        strategies: StrategyRegistry,
        notifier: Arc<dyn NotificationSink>,
        history: HistoryStore,
    ) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            credentials,
            strategies,
            notifier,
            history: Mutex::new(history),
            state,
        }
    }

    /// Generates ideas for `topic` on the platform tagged `platform`.
    ///
    /// Rejections (`MissingTopic`, `MissingCredential`) and backend failures
    /// are reported to the notification sink and returned as errors; they
    /// leave the current batch and the history untouched. An unknown or
    /// unserved platform is not an error: it clears the current batch.
    pub async fn generate(
        &self,
        platform: &str,
        topic: &str,
    ) -> Result<GenerationReport, GenerationError> {
        if topic.trim().is_empty() {
            self.notifier
                .notify(Notification::error(ERROR_TITLE, MISSING_TOPIC_MESSAGE));
            return Err(GenerationError::MissingTopic);
        }

        let Some(credential) = self.credentials.get(OPENAI_API_KEY_KEY) else {
            self.notifier.notify(Notification::error(
                MISSING_CREDENTIAL_TITLE,
                MISSING_CREDENTIAL_MESSAGE,
            ));
            return Err(GenerationError::MissingCredential);
        };

        let guard = LoadingGuard::begin(&self.state);

        let strategy = match self.strategies.resolve(platform) {
            PlatformDispatch::Strategy(strategy) => strategy,
            PlatformDispatch::Unsupported(tag) => {
                tracing::info!(platform = %tag, "[Generate] No strategy for platform, returning empty batch");
                guard.complete_with(|s| s.current_ideas.clear());
                return Ok(GenerationReport::UnsupportedPlatform { tag });
            }
        };

        tracing::info!(platform = %strategy.platform(), topic, "[Generate] Requesting ideas");

        let batch = match strategy.generate(topic, &credential).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::error!(platform = %strategy.platform(), "[Generate] Backend failed: {}", e);
                self.notifier
                    .notify(Notification::error(ERROR_TITLE, GENERATION_FAILED_MESSAGE));
                return Err(GenerationError::Backend(e));
            }
        };

        let idea_count = batch.len();
        let persistence = if batch.is_empty() {
            None
        } else {
            Some(self.lock_history().append(batch.clone()))
        };
        guard.complete_with(|s| s.current_ideas = batch);

        tracing::info!(
            platform = %strategy.platform(),
            idea_count,
            "[Generate] Completed"
        );

        Ok(GenerationReport::Generated {
            platform: strategy.platform(),
            idea_count,
            persistence,
        })
    }

    /// Removes the history entry with `id`.
    ///
    /// Returns whether an entry was removed. Persistence failures are logged
    /// and reported as `false`; the history keeps the entry in that case.
    pub fn delete_from_history(&self, id: &str) -> bool {
        match self.lock_history().delete(id) {
            Ok(removed) => removed,
            Err(e) => {
                tracing::error!(id, "[History] Failed to delete entry: {}", e);
                false
            }
        }
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// The batch produced by the most recent completed request.
    pub fn current_ideas(&self) -> Vec<Idea> {
        self.state.borrow().current_ideas.clone()
    }

    /// The persisted history, newest first.
    pub fn history(&self) -> Vec<Idea> {
        self.lock_history().entries().to_vec()
    }

    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Subscribes to request state transitions.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Platforms that currently have a strategy.
    pub fn supported_platforms(&self) -> Vec<SocialPlatform> {
        self.strategies.supported_platforms()
    }

    fn lock_history(&self) -> MutexGuard<'_, HistoryStore> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
