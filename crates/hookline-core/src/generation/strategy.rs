use super::BackendError;
use crate::idea::{Idea, SocialPlatform};
use async_trait::async_trait;

/// Per-platform generation capability.
///
/// A strategy turns a validated `(topic, credential)` pair into one merged
/// batch of ideas for its platform.
#[async_trait]
pub trait GenerateStrategy: Send + Sync {
    /// The platform this strategy serves.
    fn platform(&self) -> SocialPlatform;

    /// Generates a batch of ideas for `topic`.
    async fn generate(&self, topic: &str, credential: &str) -> Result<Vec<Idea>, BackendError>;
}
