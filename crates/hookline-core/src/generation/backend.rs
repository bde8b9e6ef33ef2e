//! Generation backend trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quality tier of the backend model that produced a raw response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// The higher quality model (e.g. gpt-4 class).
    Primary,
    /// The faster, cheaper model (e.g. gpt-3.5 class).
    Secondary,
}

/// Unparsed text returned by the backend for one model tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Topic the request was made for.
    pub topic: String,
    /// Tier that produced this text.
    pub tier: ModelTier,
    /// Raw response body.
    pub text: String,
}

/// The two independent responses a single generation call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponsePair {
    /// First response; its ideas come first in the merged batch.
    pub primary: RawResponse,
    /// Second response.
    pub secondary: RawResponse,
}

/// Errors raised by a generation backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never reached the backend or the connection dropped.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {status_code}: {message}")]
    Status { status_code: u16, message: String },

    /// Any other backend failure.
    #[error("Backend error: {0}")]
    Other(String),
}

/// A text generation backend.
///
/// Implementations call the remote API once per model tier. Both responses
/// must be available for the call to succeed.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generates raw idea text for `topic`, authenticated with `credential`.
    async fn generate(&self, topic: &str, credential: &str)
        -> Result<RawResponsePair, BackendError>;
}
