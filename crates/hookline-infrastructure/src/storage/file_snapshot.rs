//! File-backed snapshot storage.
//!
//! Each key maps to one JSON file inside a directory. Values are replaced as
//! a whole through an atomic rename, so a failed write never leaves a torn
//! snapshot behind.

use super::atomic_file::{FileLock, atomic_write};
use hookline_core::history::{SnapshotStorage, StorageReadError, StorageWriteError};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Snapshot storage persisting each key as `<dir>/<key>.json`.
///
/// An optional byte quota bounds the size of any single stored value,
/// mirroring a browser-style storage quota. Disk-full conditions reported by
/// the OS are classified as capacity failures as well.
pub struct FileSnapshotStorage {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileSnapshotStorage {
    /// Creates a storage rooted at `dir` without a byte quota.
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            quota_bytes: None,
        }
    }

    /// Limits every stored value to `quota_bytes` bytes.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    /// Returns the file path used for `key`.
    ///
    /// Keys are restricted to ASCII alphanumerics, `_`, `-` and `.` so they
    /// can never escape the storage directory.
    pub fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid storage key: {:?}", key),
            ));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn classify(err: io::Error, required: usize) -> StorageWriteError {
        match err.kind() {
            io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded | io::ErrorKind::FileTooLarge => {
                StorageWriteError::CapacityExceeded { required }
            }
            _ => StorageWriteError::Other(format!("{} (kind: {:?})", err, err.kind())),
        }
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageReadError> {
        let path = self
            .path_for(key)
            .map_err(|e| StorageReadError(e.to_string()))?;

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageReadError(format!("{}: {}", path.display(), e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageWriteError> {
        let required = value.len();
        if self.quota_bytes.is_some_and(|limit| required > limit) {
            return Err(StorageWriteError::CapacityExceeded { required });
        }

        let path = self
            .path_for(key)
            .map_err(|e| StorageWriteError::Other(e.to_string()))?;

        let _lock = FileLock::acquire(&path).map_err(|e| Self::classify(e, required))?;
        atomic_write(&path, value.as_bytes()).map_err(|e| Self::classify(e, required))
    }
}
