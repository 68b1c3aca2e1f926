//! The state store: whole-mapping load and save under one key.

use vmc_model::State;

use crate::backend::StorageBackend;
use crate::codec::{decode_state, encode_state};
use crate::error::Result;

/// Storage key holding the serialized status mapping.
pub const DEFAULT_STORAGE_KEY: &str = "vintage-computer-checkouts";

/// Loads and saves the full [`State`] through a [`StorageBackend`].
///
/// `save` is a full replace, not a merge. Two stores over the same backend
/// race with last-write-wins, so callers load immediately before mutating.
#[derive(Debug, Clone)]
pub struct StateStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> StateStore<B> {
    /// Create a store using [`DEFAULT_STORAGE_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the current state.
    ///
    /// Never fails: a missing key, a backend read error, or a corrupt blob
    /// all yield an empty state, meaning every machine is available.
    pub fn load(&self) -> State {
        match self.backend.get(&self.key) {
            Ok(Some(blob)) => decode_state(&blob),
            Ok(None) => State::new(),
            Err(e) => {
                tracing::warn!("Failed to read stored statuses, treating all as available: {}", e);
                State::new()
            }
        }
    }

    /// Overwrite the stored state with `state`.
    pub fn save(&self, state: &State) -> Result<()> {
        let blob = encode_state(state)?;
        self.backend.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, entries = state.len(), "Saved statuses");
        Ok(())
    }

    /// Remove the stored state entirely.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared stored statuses");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::error::PersistenceError;
    use chrono::NaiveDate;
    use vmc_model::{Entry, Status};

    fn checked_out(slug: &str) -> State {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut state = State::new();
        state.insert(slug, Entry::new(Status::CheckedOut, date).unwrap());
        state
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = StateStore::new(MemoryBackend::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let backend = MemoryBackend::new();
        backend.insert_raw(DEFAULT_STORAGE_KEY, "{not json");
        assert!(StateStore::new(backend).load().is_empty());
    }

    #[test]
    fn save_replaces_rather_than_merges() {
        let store = StateStore::new(MemoryBackend::new());
        store.save(&checked_out("apple-iie")).unwrap();
        store.save(&checked_out("trs-80")).unwrap();

        let loaded = store.load();
        assert!(!loaded.contains("apple-iie"));
        assert!(loaded.contains("trs-80"));
    }

    #[test]
    fn keys_are_isolated() {
        let backend = MemoryBackend::new();
        let first = StateStore::with_key(backend.clone(), "first");
        let second = StateStore::with_key(backend, "second");
        first.save(&checked_out("apple-iie")).unwrap();
        assert!(second.load().is_empty());
    }

    #[test]
    fn quota_failure_is_reported_and_keeps_previous_blob() {
        let store = StateStore::new(MemoryBackend::with_quota(100));
        store.save(&State::new()).unwrap();

        let error = store.save(&checked_out("a-very-long-machine-slug-that-does-not-fit")).unwrap_err();
        assert!(matches!(error, PersistenceError::QuotaExceeded { .. }));
        assert!(store.load().is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let store = StateStore::new(MemoryBackend::new());
        store.save(&checked_out("apple-iie")).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(store.backend().get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }
}
