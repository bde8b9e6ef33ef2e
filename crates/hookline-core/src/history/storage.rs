//! Snapshot storage trait.
//!
//! Defines the interface for the medium that holds the persisted history
//! snapshot.

use thiserror::Error;

/// Failure kinds of a snapshot write.
///
/// The storage implementation decides the kind. Callers never infer
/// capacity failures from error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageWriteError {
    /// The write would exceed the medium's capacity.
    #[error("Storage capacity exceeded writing {required} bytes")]
    CapacityExceeded { required: usize },

    /// Any other write failure (I/O, permissions, locking, ...).
    #[error("Storage write failed: {0}")]
    Other(String),
}

impl StorageWriteError {
    /// Check if this failure is a capacity failure
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Failure of a snapshot read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage read failed: {0}")]
pub struct StorageReadError(pub String);

/// A key/value medium holding whole serialized snapshots.
///
/// Writes replace the entire value stored under `key`; there is no partial
/// or in-place mutation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Return `Ok(None)` from `read` when nothing is stored under `key`
/// - Classify quota/disk-full failures as `StorageWriteError::CapacityExceeded`
/// - Leave the previously stored value intact when a write fails
pub trait SnapshotStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: Value found
    /// - `Ok(None)`: Nothing stored under `key`
    /// - `Err(_)`: The medium could not be read
    fn read(&self, key: &str) -> Result<Option<String>, StorageReadError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Value written
    /// - `Err(StorageWriteError::CapacityExceeded)`: Value does not fit
    /// - `Err(StorageWriteError::Other)`: Any other failure
    fn write(&self, key: &str, value: &str) -> Result<(), StorageWriteError>;
}
