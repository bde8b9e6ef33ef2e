//! Generation domain module.
//!
//! Collaborator contracts consumed by the generation orchestrator: the text
//! generation backend, the response parser, and the per-platform strategy
//! that composes them.
//!
//! # Module Structure
//!
//! - `backend`: `GenerationBackend`, raw response types and `BackendError`
//! - `parser`: `ResponseParser`
//! - `strategy`: `GenerateStrategy`
//! - `error`: `GenerationError` reported to callers

pub mod backend;
mod error;
mod parser;
mod strategy;

pub use backend::{BackendError, GenerationBackend, ModelTier, RawResponse, RawResponsePair};
pub use error::GenerationError;
pub use parser::ResponseParser;
pub use strategy::GenerateStrategy;
