//! History persistence adapter
//!
//! The whole history is stored as one JSON array under a single key and
//! rewritten on every save. Loading never fails: a missing or unreadable
//! entry yields an empty history.

use crate::storage::{KvStore, StorageResult};
use shared::LineItem;

/// Fixed key of the history slot
pub const HISTORY_KEY: &str = "allTransactions";

/// Serializes the history into a [`KvStore`]
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KvStore> HistoryStore<S> {
    /// Adapter using [`HISTORY_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored history with `history`
    pub fn save(&mut self, history: &[LineItem]) -> StorageResult<()> {
        let value = serde_json::to_string(history)?;
        self.store.set(&self.key, &value)?;
        tracing::debug!(key = %self.key, entries = history.len(), "History saved");
        Ok(())
    }

    /// Load the stored history, empty when missing or corrupt
    pub fn load(&self) -> Vec<LineItem> {
        match self.try_load() {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored history unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Load the stored history, surfacing storage and decode errors
    pub fn try_load(&self) -> StorageResult<Vec<LineItem>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
