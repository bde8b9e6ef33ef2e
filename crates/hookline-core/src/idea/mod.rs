//! Idea domain module.
//!
//! This module contains the generated content idea entity and the platform
//! tags used to dispatch generation requests.
//!
//! # Module Structure
//!
//! - `model`: The `Idea` entity
//! - `platform`: `SocialPlatform` tags and tag resolution

mod model;
mod platform;

// Re-export public API
pub use model::Idea;
pub use platform::SocialPlatform;
