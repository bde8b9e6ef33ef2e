use super::BackendError;
use thiserror::Error;

/// Failures reported by a generation request.
///
/// Persistence problems never appear here; the history recovers from them
/// or logs them without failing the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The topic was empty or whitespace-only.
    #[error("A topic is required")]
    MissingTopic,

    /// No API credential is stored.
    #[error("No API credential is configured")]
    MissingCredential,

    /// The backend call failed.
    #[error("Idea generation failed: {0}")]
    Backend(#[from] BackendError),
}

impl GenerationError {
    /// Returns true for failures rejected before any backend call.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::MissingTopic | Self::MissingCredential)
    }
}
