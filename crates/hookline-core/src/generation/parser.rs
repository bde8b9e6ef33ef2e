use super::RawResponse;
use crate::idea::Idea;

/// Converts a raw backend response into ideas.
///
/// Parsing is total over well-formed backend output: a parser never fails,
/// it returns whatever ideas it could extract (possibly none).
pub trait ResponseParser: Send + Sync {
    /// Parses `raw` into ideas, in the order they appear in the response.
    fn parse(&self, raw: &RawResponse) -> Vec<Idea>;
}
