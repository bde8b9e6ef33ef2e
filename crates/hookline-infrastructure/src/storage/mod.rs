//! Storage layer: atomic file operations and snapshot media.

mod atomic_file;
mod config_storage;
mod file_snapshot;
mod memory_snapshot;
mod secret_storage;

pub use config_storage::{ConfigStorage, ConfigStorageError};
pub use file_snapshot::FileSnapshotStorage;
pub use memory_snapshot::MemorySnapshotStorage;
pub use secret_storage::{SecretStorage, SecretStorageError};
