//! Strategy backed by a two-tier generation backend.

use async_trait::async_trait;
use hookline_core::generation::{
    BackendError, GenerateStrategy, GenerationBackend, ResponseParser,
};
use hookline_core::{Idea, SocialPlatform};
use std::sync::Arc;

/// Calls the backend once and merges both tier responses into one batch.
///
/// Ideas parsed from the primary response come first, followed by those
/// from the secondary response, each in parser order. A backend failure
/// fails the whole batch; there is no partial result.
pub struct DualTierStrategy {
    platform: SocialPlatform,
    backend: Arc<dyn GenerationBackend>,
    parser: Arc<dyn ResponseParser>,
}

impl DualTierStrategy {
    pub fn new(
        platform: SocialPlatform,
        backend: Arc<dyn GenerationBackend>,
        parser: Arc<dyn ResponseParser>,
    ) -> Self {
        Self {
            platform,
            backend,
            parser,
        }
    }

    /// Strategy for Instagram Reels.
    pub fn instagram_reels(
        backend: Arc<dyn GenerationBackend>,
        parser: Arc<dyn ResponseParser>,
    ) -> Self {
        Self::new(SocialPlatform::InstagramReels, backend, parser)
    }
}

#[async_trait]
impl GenerateStrategy for DualTierStrategy {
    fn platform(&self) -> SocialPlatform {
        self.platform
    }

    async fn generate(&self, topic: &str, credential: &str) -> Result<Vec<Idea>, BackendError> {
        let responses = self.backend.generate(topic, credential).await?;

        let mut ideas = self.parser.parse(&responses.primary);
        let primary_count = ideas.len();
        ideas.extend(self.parser.parse(&responses.secondary));

        tracing::debug!(
            platform = %self.platform,
            primary = primary_count,
            secondary = ideas.len() - primary_count,
            "[Strategy] Parsed backend responses"
        );
        Ok(ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::generation::{ModelTier, RawResponse, RawResponsePair};
    use serde_json::json;

    struct EchoBackend;

    #[async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(
            &self,
            topic: &str,
            _credential: &str,
        ) -> Result<RawResponsePair, BackendError> {
            Ok(RawResponsePair {
                primary: RawResponse {
                    topic: topic.to_string(),
                    tier: ModelTier::Primary,
                    text: "p1\np2".to_string(),
                },
                secondary: RawResponse {
                    topic: topic.to_string(),
                    tier: ModelTier::Secondary,
                    text: "s1".to_string(),
                },
            })
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GenerationBackend for FailingBackend {
        async fn generate(
            &self,
            _topic: &str,
            _credential: &str,
        ) -> Result<RawResponsePair, BackendError> {
            Err(BackendError::Status {
                status_code: 429,
                message: "rate limited".to_string(),
            })
        }
    }

    struct LineParser;

    impl ResponseParser for LineParser {
        fn parse(&self, raw: &RawResponse) -> Vec<Idea> {
            raw.text
                .lines()
                .map(|line| Idea::new(SocialPlatform::InstagramReels, &raw.topic, json!({ "hook": line })))
                .collect()
        }
    }

    #[tokio::test]
    async fn test_primary_ideas_come_first() {
        let strategy = DualTierStrategy::instagram_reels(Arc::new(EchoBackend), Arc::new(LineParser));

        let ideas = strategy.generate("fitness tips", "sk-test").await.unwrap();

        let hooks: Vec<_> = ideas.iter().map(|i| i.content["hook"].clone()).collect();
        assert_eq!(hooks, vec![json!("p1"), json!("p2"), json!("s1")]);
        assert!(ideas.iter().all(|i| i.source_topic == "fitness tips"));
    }

    #[tokio::test]
    async fn test_backend_failure_yields_no_ideas() {
        let strategy = DualTierStrategy::instagram_reels(Arc::new(FailingBackend), Arc::new(LineParser));

        let err = strategy.generate("fitness tips", "sk-test").await.unwrap_err();

        assert!(matches!(err, BackendError::Status { status_code: 429, .. }));
    }
}
