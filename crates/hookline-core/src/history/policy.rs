use serde::{Deserialize, Serialize};

/// How the history recovers from a capacity-exceeded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Evict the single oldest entry of the previous history and retry once.
    #[default]
    SingleRetry,
    /// Evict one oldest entry per retry until the write fits or the previous
    /// history is exhausted.
    UntilFits,
}

impl EvictionPolicy {
    /// Maximum number of evictions this policy allows for a previous history
    /// of `previous_len` entries.
    pub fn max_evictions(&self, previous_len: usize) -> usize {
        match self {
            EvictionPolicy::SingleRetry => previous_len.min(1),
            EvictionPolicy::UntilFits => previous_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_evictions() {
        assert_eq!(EvictionPolicy::SingleRetry.max_evictions(10), 1);
        assert_eq!(EvictionPolicy::SingleRetry.max_evictions(0), 0);
        assert_eq!(EvictionPolicy::UntilFits.max_evictions(10), 10);
        assert_eq!(EvictionPolicy::UntilFits.max_evictions(0), 0);
    }

    #[test]
    fn test_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            eviction: EvictionPolicy,
        }
        let parsed: Wrapper = toml::from_str("eviction = \"until_fits\"").unwrap();
        assert_eq!(parsed.eviction, EvictionPolicy::UntilFits);
    }
}
