//! Application layer for HOOKLINE.
//!
//! This crate provides the idea generation use case, which coordinates the
//! platform strategies, the credential source, the notification sink and the
//! persisted idea history.

pub mod bootstrap;
pub mod generation;
pub mod generation_usecase;
pub mod history_store;

pub use bootstrap::{AppBootstrap, Collaborators};
pub use generation::{DualTierStrategy, PlatformDispatch, RequestState, StrategyRegistry};
pub use generation_usecase::{GenerationReport, IdeaGenerationUseCase};
pub use history_store::{AppendOutcome, HistoryStore};
