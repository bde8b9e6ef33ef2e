//! Persisted idea history.
//!
//! The store keeps an in-memory mirror of the snapshot held by a
//! `SnapshotStorage`. Every mutation writes the whole resulting snapshot and
//! adopts it in memory only once the write succeeded, so memory and storage
//! never disagree after a call returns.

use hookline_core::Idea;
use hookline_core::error::Result;
use hookline_core::history::{EvictionPolicy, SnapshotStorage, StorageWriteError};
use std::collections::HashSet;
use std::sync::Arc;

/// Result of `HistoryStore::append`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The full new snapshot was persisted.
    Persisted,
    /// Storage ran out of capacity; `evicted` oldest entries of the previous
    /// history were dropped before the write succeeded.
    PersistedAfterEviction { evicted: usize },
    /// Nothing was persisted and the history is unchanged.
    Rejected { reason: String },
}

/// Newest-first, persisted log of generated ideas.
pub struct HistoryStore {
    storage: Arc<dyn SnapshotStorage>,
    key: String,
    eviction: EvictionPolicy,
    entries: Vec<Idea>,
}

impl HistoryStore {
    /// Loads the history stored under `key`.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty history.
    pub fn load(storage: Arc<dyn SnapshotStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = read_snapshot(storage.as_ref(), &key);
        tracing::debug!(key = %key, entries = entries.len(), "[History] Loaded snapshot");

        Self {
            storage,
            key,
            eviction: EvictionPolicy::default(),
            entries,
        }
    }

    /// Sets the capacity recovery policy.
    pub fn with_eviction_policy(mut self, eviction: EvictionPolicy) -> Self {
        self.eviction = eviction;
        self
    }

    /// Replaces the in-memory history with the stored snapshot.
    pub fn reload(&mut self) {
        self.entries = read_snapshot(self.storage.as_ref(), &self.key);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Idea] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends `new_ideas` (keeping their order) and persists the result.
    ///
    /// An incoming idea replaces any existing entry with the same id. On a
    /// capacity failure the oldest entries of the previous history are
    /// evicted one at a time, as far as the eviction policy allows, and the
    /// write is retried. Any other failure rejects the append.
    pub fn append(&mut self, new_ideas: Vec<Idea>) -> AppendOutcome {
        if new_ideas.is_empty() {
            return AppendOutcome::Persisted;
        }

        let mut incoming_ids = HashSet::new();
        let incoming: Vec<Idea> = new_ideas
            .into_iter()
            .filter(|idea| incoming_ids.insert(idea.id.clone()))
            .collect();
        let previous: Vec<&Idea> = self
            .entries
            .iter()
            .filter(|idea| !incoming_ids.contains(&idea.id))
            .collect();

        let max_evictions = self.eviction.max_evictions(previous.len());
        let mut evicted = 0;

        loop {
            let keep = previous.len() - evicted;
            let candidate: Vec<Idea> = incoming
                .iter()
                .chain(previous[..keep].iter().copied())
                .cloned()
                .collect();

            match self.persist(&candidate) {
                Ok(()) => {
                    self.entries = candidate;
                    if evicted == 0 {
                        return AppendOutcome::Persisted;
                    }
                    tracing::info!(
                        key = %self.key,
                        evicted,
                        entries = self.entries.len(),
                        "[History] Persisted after evicting oldest entries"
                    );
                    return AppendOutcome::PersistedAfterEviction { evicted };
                }
                Err(StorageWriteError::CapacityExceeded { required }) if evicted < max_evictions => {
                    evicted += 1;
                    tracing::warn!(
                        key = %self.key,
                        required,
                        evicted,
                        "[History] Storage capacity exceeded, evicting oldest entry"
                    );
                }
                Err(err @ StorageWriteError::CapacityExceeded { .. }) => {
                    tracing::warn!(
                        key = %self.key,
                        evicted,
                        "[History] Append rejected, eviction could not free enough capacity: {}",
                        err
                    );
                    return AppendOutcome::Rejected {
                        reason: err.to_string(),
                    };
                }
                Err(err) => {
                    tracing::error!(key = %self.key, "[History] Failed to save history: {}", err);
                    return AppendOutcome::Rejected {
                        reason: err.to_string(),
                    };
                }
            }
        }
    }

    /// Removes the entry with `id` and persists the result.
    ///
    /// Returns `Ok(false)` without writing when no entry matches. On a write
    /// failure the history is left unchanged.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(position) = self.entries.iter().position(|idea| idea.id == id) else {
            return Ok(false);
        };

        let mut remaining = self.entries.clone();
        remaining.remove(position);
        self.persist(&remaining)?;

        self.entries = remaining;
        Ok(true)
    }

    fn persist(&self, entries: &[Idea]) -> std::result::Result<(), StorageWriteError> {
        let serialized = serde_json::to_string(entries)
            .map_err(|e| StorageWriteError::Other(format!("Failed to serialize history: {}", e)))?;
        self.storage.write(&self.key, &serialized)
    }
}

/// Reads and parses the snapshot, degrading every failure to empty.
///
/// Duplicate ids keep their first (newest) occurrence.
fn read_snapshot(storage: &dyn SnapshotStorage, key: &str) -> Vec<Idea> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, "[History] Failed to read snapshot, starting empty: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Idea>>(&raw) {
        Ok(entries) => {
            let mut seen = HashSet::new();
            entries
                .into_iter()
                .filter(|idea| seen.insert(idea.id.clone()))
                .collect()
        }
        Err(e) => {
            tracing::warn!(key, "[History] Corrupt snapshot, starting empty: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::SocialPlatform;
    use hookline_core::history::StorageReadError;
    use hookline_infrastructure::MemorySnapshotStorage;
    use serde_json::json;

    const KEY: &str = "reels_idea_history";

    fn idea(label: &str) -> Idea {
        let mut idea = Idea::new(
            SocialPlatform::InstagramReels,
            "fitness tips",
            json!({ "hook": label }),
        );
        // Fixed timestamp keeps serialized sizes comparable across ideas.
        idea.created_at = "2024-05-01T12:00:00Z".parse().unwrap();
        idea
    }

    fn ideas(prefix: &str, count: usize) -> Vec<Idea> {
        (0..count).map(|i| idea(&format!("{prefix}-{i}"))).collect()
    }

    fn stored(storage: &MemorySnapshotStorage) -> Vec<Idea> {
        serde_json::from_str(&storage.get(KEY).unwrap()).unwrap()
    }

    fn seeded(count: usize) -> (Arc<MemorySnapshotStorage>, HistoryStore) {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = HistoryStore::load(storage.clone(), KEY);
        assert_eq!(store.append(ideas("old", count)), AppendOutcome::Persisted);
        (storage, store)
    }

    struct UnreadableStorage;

    impl SnapshotStorage for UnreadableStorage {
        fn read(&self, _key: &str) -> std::result::Result<Option<String>, StorageReadError> {
            Err(StorageReadError("device not ready".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageWriteError> {
            Ok(())
        }
    }

    #[test]
    fn test_load_missing_snapshot_is_empty() {
        let store = HistoryStore::load(Arc::new(MemorySnapshotStorage::new()), KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_or_unreadable_snapshot_is_empty() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        storage.insert_raw(KEY, "{ not json");
        assert!(HistoryStore::load(storage.clone(), KEY).is_empty());

        storage.insert_raw(KEY, r#"[{"id": 1}]"#);
        assert!(HistoryStore::load(storage, KEY).is_empty());

        assert!(HistoryStore::load(Arc::new(UnreadableStorage), KEY).is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let first = idea("first");
        let mut duplicate = idea("duplicate");
        duplicate.id = first.id.clone();
        let storage = Arc::new(MemorySnapshotStorage::new());
        storage.insert_raw(KEY, &serde_json::to_string(&vec![first.clone(), duplicate]).unwrap());

        let store = HistoryStore::load(storage, KEY);
        assert_eq!(store.entries(), &[first]);
    }

    #[test]
    fn test_append_prepends_in_order_and_persists() {
        let (storage, mut store) = seeded(2);
        let older = store.entries().to_vec();
        let batch = ideas("new", 3);

        assert_eq!(store.append(batch.clone()), AppendOutcome::Persisted);

        let expected: Vec<Idea> = batch.into_iter().chain(older).collect();
        assert_eq!(store.entries(), expected.as_slice());
        assert_eq!(stored(&storage), expected);
    }

    #[test]
    fn test_append_empty_batch_does_not_write() {
        let (storage, mut store) = seeded(1);
        let writes = storage.write_attempts();

        assert_eq!(store.append(Vec::new()), AppendOutcome::Persisted);
        assert_eq!(storage.write_attempts(), writes);
    }

    #[test]
    fn test_append_replaces_entries_with_same_id() {
        let (storage, mut store) = seeded(3);
        let mut replacement = idea("replacement");
        replacement.id = store.entries()[1].id.clone();

        store.append(vec![replacement.clone()]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.entries()[0], replacement);
        let ids: HashSet<_> = store.entries().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(stored(&storage), store.entries());
    }

    #[test]
    fn test_capacity_failure_evicts_single_oldest_entry() {
        let (storage, mut store) = seeded(10);
        let oldest = store.entries()[9].clone();
        let batch = ideas("new", 2);
        storage.fail_next_write(StorageWriteError::CapacityExceeded { required: 4096 });

        let outcome = store.append(batch.clone());

        assert_eq!(outcome, AppendOutcome::PersistedAfterEviction { evicted: 1 });
        assert_eq!(store.len(), 11);
        assert_eq!(&store.entries()[..2], batch.as_slice());
        assert!(!store.entries().contains(&oldest));
        assert_eq!(stored(&storage), store.entries());
    }

    #[test]
    fn test_single_retry_rejects_when_eviction_is_insufficient() {
        let (storage, mut store) = seeded(5);
        let before = store.entries().to_vec();
        let persisted_before = storage.get(KEY);
        storage.fail_next_write(StorageWriteError::CapacityExceeded { required: 1 });
        storage.fail_next_write(StorageWriteError::CapacityExceeded { required: 1 });

        let outcome = store.append(ideas("new", 2));

        assert!(matches!(outcome, AppendOutcome::Rejected { .. }));
        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(storage.get(KEY), persisted_before);
    }

    #[test]
    fn test_until_fits_keeps_evicting() {
        let (storage, store) = seeded(6);
        let mut store = store.with_eviction_policy(EvictionPolicy::UntilFits);
        for _ in 0..3 {
            storage.fail_next_write(StorageWriteError::CapacityExceeded { required: 1 });
        }

        let outcome = store.append(ideas("new", 2));

        assert_eq!(outcome, AppendOutcome::PersistedAfterEviction { evicted: 3 });
        assert_eq!(store.len(), 6 + 2 - 3);
        assert_eq!(stored(&storage), store.entries());
    }

    #[test]
    fn test_until_fits_against_real_quota() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store =
            HistoryStore::load(storage.clone(), KEY).with_eviction_policy(EvictionPolicy::UntilFits);
        store.append(ideas("old", 8));
        let full_size = storage.get(KEY).unwrap().len();
        storage.set_quota(Some(full_size));

        let outcome = store.append(ideas("new", 3));

        assert_eq!(outcome, AppendOutcome::PersistedAfterEviction { evicted: 3 });
        assert_eq!(store.len(), 8);
        assert!(storage.get(KEY).unwrap().len() <= full_size);
    }

    #[test]
    fn test_capacity_failure_with_empty_history_is_rejected() {
        let storage = Arc::new(MemorySnapshotStorage::with_quota(10));
        let mut store = HistoryStore::load(storage.clone(), KEY);

        let outcome = store.append(ideas("new", 1));

        assert!(matches!(outcome, AppendOutcome::Rejected { .. }));
        assert!(store.is_empty());
        assert_eq!(storage.get(KEY), None);
    }

    #[test]
    fn test_other_write_failure_leaves_state_unchanged() {
        let (storage, mut store) = seeded(3);
        let before = store.entries().to_vec();
        storage.fail_next_write(StorageWriteError::Other("permission denied".into()));

        let outcome = store.append(ideas("new", 2));

        assert_eq!(
            outcome,
            AppendOutcome::Rejected {
                reason: "Storage write failed: permission denied".into()
            }
        );
        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(stored(&storage), before);
        // No eviction retry for non-capacity failures.
        assert_eq!(storage.write_attempts(), 2);
    }

    #[test]
    fn test_delete_removes_matching_entry() {
        let (storage, mut store) = seeded(3);
        let target = store.entries()[1].id.clone();

        assert!(store.delete(&target).unwrap());

        assert_eq!(store.len(), 2);
        assert!(store.entries().iter().all(|i| i.id != target));
        assert_eq!(stored(&storage), store.entries());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (storage, mut store) = seeded(3);
        let writes = storage.write_attempts();

        assert!(!store.delete("no-such-id").unwrap());
        assert_eq!(store.len(), 3);
        assert_eq!(storage.write_attempts(), writes);
    }

    #[test]
    fn test_delete_write_failure_keeps_entry() {
        let (storage, mut store) = seeded(2);
        let target = store.entries()[0].id.clone();
        storage.fail_next_write(StorageWriteError::Other("read-only".into()));

        assert!(store.delete(&target).unwrap_err().is_storage());
        assert_eq!(store.len(), 2);
        assert_eq!(stored(&storage), store.entries());
    }

    #[test]
    fn test_reload_is_idempotent() {
        let (storage, mut store) = seeded(4);
        let first = HistoryStore::load(storage.clone(), KEY);
        let second = HistoryStore::load(storage, KEY);
        assert_eq!(first.entries(), second.entries());

        store.reload();
        assert_eq!(store.entries(), first.entries());
    }
}
