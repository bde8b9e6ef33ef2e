pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod idea;
pub mod notification;
pub mod secret;

// Re-export common error type
pub use error::HooklineError;
pub use idea::{Idea, SocialPlatform};
