//! History domain module.
//!
//! Defines the persistence medium contract used by the idea history and the
//! eviction policy applied when the medium runs out of capacity.
//!
//! # Module Structure
//!
//! - `storage`: `SnapshotStorage` trait and its structured error kinds
//! - `policy`: `EvictionPolicy`

mod policy;
pub mod storage;

pub use policy::EvictionPolicy;
pub use storage::{SnapshotStorage, StorageReadError, StorageWriteError};

/// Fixed key identifying the idea history blob in the snapshot medium.
pub const DEFAULT_HISTORY_KEY: &str = "reels_idea_history";
