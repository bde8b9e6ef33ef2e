use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Social media platforms a generation request can target.
///
/// The tag is the snake_case string the caller passes in (e.g.
/// `"instagram_reels"`). Knowing a tag does not mean a strategy is
/// registered for it; dispatch decides that.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SocialPlatform {
    /// Instagram Reels (short vertical video with hook + script).
    InstagramReels,
    /// TikTok videos.
    Tiktok,
    /// YouTube Shorts.
    YoutubeShorts,
}

impl SocialPlatform {
    /// Resolves a caller-supplied tag, returning `None` for unknown tags.
    ///
    /// Matching is exact: case and surrounding whitespace must match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(
            SocialPlatform::from_tag("instagram_reels"),
            Some(SocialPlatform::InstagramReels)
        );
        assert_eq!(
            SocialPlatform::from_tag("youtube_shorts"),
            Some(SocialPlatform::YoutubeShorts)
        );
    }

    #[test]
    fn test_from_tag_padded_is_unknown() {
        assert_eq!(SocialPlatform::from_tag(" instagram_reels"), None);
        assert_eq!(SocialPlatform::from_tag("instagram_reels\n"), None);
        assert_eq!(SocialPlatform::from_tag(" youtube_shorts "), None);
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(SocialPlatform::from_tag("myspace"), None);
        assert_eq!(SocialPlatform::from_tag(""), None);
        assert_eq!(SocialPlatform::from_tag("Instagram_Reels"), None);
    }

    #[test]
    fn test_tag_matches_display_and_serde() {
        for platform in SocialPlatform::iter() {
            let tag: &str = platform.as_ref();
            assert_eq!(platform.to_string(), tag);
            assert_eq!(SocialPlatform::from_tag(tag), Some(platform));
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
        }
    }
}
