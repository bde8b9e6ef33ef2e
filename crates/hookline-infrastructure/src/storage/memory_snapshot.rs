use hookline_core::history::{SnapshotStorage, StorageReadError, StorageWriteError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory snapshot storage. Not durable; used for embedding and tests.
///
/// Supports an optional per-value byte quota and scripted write failures so
/// callers can exercise capacity recovery without filling a disk.
#[derive(Default)]
pub struct MemorySnapshotStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    values: HashMap<String, String>,
    quota_bytes: Option<usize>,
    scripted_failures: VecDeque<StorageWriteError>,
    write_attempts: usize,
}

impl MemorySnapshotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage whose values may not exceed `quota_bytes` bytes.
    pub fn with_quota(quota_bytes: usize) -> Self {
        let storage = Self::default();
        storage.set_quota(Some(quota_bytes));
        storage
    }

    pub fn set_quota(&self, quota_bytes: Option<usize>) {
        self.lock().quota_bytes = quota_bytes;
    }

    /// Makes the next write fail with `error`. Calls queue up in order.
    pub fn fail_next_write(&self, error: StorageWriteError) {
        self.lock().scripted_failures.push_back(error);
    }

    /// Stores `value` directly, bypassing quota and scripted failures.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.lock().values.insert(key.to_string(), value.to_string());
    }

    /// Returns the stored value without going through the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    /// Number of `write` calls made so far, successful or not.
    pub fn write_attempts(&self) -> usize {
        self.lock().write_attempts
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageReadError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageWriteError> {
        let mut inner = self.lock();
        inner.write_attempts += 1;

        if let Some(error) = inner.scripted_failures.pop_front() {
            return Err(error);
        }

        let required = value.len();
        if inner.quota_bytes.is_some_and(|limit| required > limit) {
            return Err(StorageWriteError::CapacityExceeded { required });
        }

        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let storage = MemorySnapshotStorage::new();
        assert_eq!(storage.read("k").unwrap(), None);

        storage.write("k", "value").unwrap();
        assert_eq!(storage.read("k").unwrap(), Some("value".to_string()));
        assert_eq!(storage.write_attempts(), 1);
    }

    #[test]
    fn test_quota() {
        let storage = MemorySnapshotStorage::with_quota(4);
        storage.write("k", "1234").unwrap();

        let err = storage.write("k", "12345").unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(storage.get("k"), Some("1234".to_string()));

        storage.set_quota(None);
        storage.write("k", "12345").unwrap();
    }

    #[test]
    fn test_scripted_failures_apply_in_order() {
        let storage = MemorySnapshotStorage::new();
        storage.fail_next_write(StorageWriteError::CapacityExceeded { required: 1 });
        storage.fail_next_write(StorageWriteError::Other("disk gone".into()));

        assert!(storage.write("k", "a").unwrap_err().is_capacity_exceeded());
        assert_eq!(
            storage.write("k", "a").unwrap_err(),
            StorageWriteError::Other("disk gone".into())
        );
        storage.write("k", "a").unwrap();
        assert_eq!(storage.write_attempts(), 3);
        assert_eq!(storage.get("k"), Some("a".to_string()));
    }
}
