//! Idea domain model.

use super::SocialPlatform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A single generated content idea.
///
/// Ideas are immutable once created. The `id` is assigned at construction
/// and is the only key used to delete an idea from history. `content` is an
/// opaque payload owned by whichever parser produced the idea (for reels it
/// carries fields such as the hook and the script).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Platform whose strategy produced this idea.
    pub platform: SocialPlatform,
    /// Topic the idea was generated for.
    pub source_topic: String,
    /// Backend-specific payload.
    pub content: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Creates a new idea with a fresh id and the current timestamp.
    pub fn new(platform: SocialPlatform, source_topic: impl Into<String>, content: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            platform,
            source_topic: source_topic.into(),
            content,
            created_at: Utc::now(),
        }
    }
}
