use hookline_core::SocialPlatform;
use hookline_core::generation::GenerateStrategy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Outcome of resolving a platform tag.
#[derive(Clone)]
pub enum PlatformDispatch {
    /// A strategy is registered for the platform.
    Strategy(Arc<dyn GenerateStrategy>),
    /// The tag is unknown or has no registered strategy. Carries the tag as
    /// received.
    Unsupported(String),
}

impl fmt::Debug for PlatformDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy(strategy) => f.debug_tuple("Strategy").field(&strategy.platform()).finish(),
            Self::Unsupported(tag) => f.debug_tuple("Unsupported").field(tag).finish(),
        }
    }
}

/// Maps platforms to their generation strategies.
///
/// Adding a platform means registering one more strategy; the use case never
/// branches on platform names.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<SocialPlatform, Arc<dyn GenerateStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `strategy` under its own platform, returning any strategy it
    /// replaced.
    pub fn register(
        &mut self,
        strategy: Arc<dyn GenerateStrategy>,
    ) -> Option<Arc<dyn GenerateStrategy>> {
        let platform = strategy.platform();
        tracing::debug!(platform = %platform, "[Registry] Registering strategy");
        self.strategies.insert(platform, strategy)
    }

    /// Builder-style `register`.
    pub fn with_strategy(mut self, strategy: Arc<dyn GenerateStrategy>) -> Self {
        self.register(strategy);
        self
    }

    /// Resolves a platform tag such as `"instagram_reels"`.
    pub fn resolve(&self, tag: &str) -> PlatformDispatch {
        SocialPlatform::from_tag(tag)
            .and_then(|platform| self.strategies.get(&platform))
            .map(|strategy| PlatformDispatch::Strategy(strategy.clone()))
            .unwrap_or_else(|| PlatformDispatch::Unsupported(tag.to_string()))
    }

    /// Platforms with a registered strategy, in declaration order.
    pub fn supported_platforms(&self) -> Vec<SocialPlatform> {
        use strum::IntoEnumIterator;
        SocialPlatform::iter()
            .filter(|platform| self.strategies.contains_key(platform))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hookline_core::Idea;
    use hookline_core::generation::BackendError;

    struct FixedStrategy(SocialPlatform);

    #[async_trait]
    impl GenerateStrategy for FixedStrategy {
        fn platform(&self) -> SocialPlatform {
            self.0
        }

        async fn generate(&self, _topic: &str, _credential: &str) -> Result<Vec<Idea>, BackendError> {
            Ok(Vec::new())
        }
    }

    fn registry() -> StrategyRegistry {
        StrategyRegistry::new().with_strategy(Arc::new(FixedStrategy(SocialPlatform::InstagramReels)))
    }

    #[test]
    fn test_resolve_registered_platform() {
        match registry().resolve("instagram_reels") {
            PlatformDispatch::Strategy(strategy) => {
                assert_eq!(strategy.platform(), SocialPlatform::InstagramReels)
            }
            other => panic!("unexpected dispatch: {:?}", other),
        }
    }

    #[test]
    fn test_known_platform_without_strategy_is_unsupported() {
        assert!(matches!(
            registry().resolve("tiktok"),
            PlatformDispatch::Unsupported(tag) if tag == "tiktok"
        ));
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        assert!(matches!(
            registry().resolve("myspace"),
            PlatformDispatch::Unsupported(tag) if tag == "myspace"
        ));
        assert!(matches!(registry().resolve(""), PlatformDispatch::Unsupported(_)));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = registry();
        let replaced = registry.register(Arc::new(FixedStrategy(SocialPlatform::InstagramReels)));
        assert!(replaced.is_some());
        assert_eq!(registry.supported_platforms(), vec![SocialPlatform::InstagramReels]);
    }

    #[test]
    fn test_supported_platforms_follow_declaration_order() {
        let registry = registry()
            .with_strategy(Arc::new(FixedStrategy(SocialPlatform::YoutubeShorts)))
            .with_strategy(Arc::new(FixedStrategy(SocialPlatform::Tiktok)));
        assert_eq!(
            registry.supported_platforms(),
            vec![
                SocialPlatform::InstagramReels,
                SocialPlatform::Tiktok,
                SocialPlatform::YoutubeShorts,
            ]
        );
    }
}
