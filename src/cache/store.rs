//! Cache Store Module
//!
//! The unsynchronized key/value map behind the expiring cache. Locking lives
//! one level up in [`ExpiringCache`](crate::cache::ExpiringCache).

use std::collections::HashMap;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Map of string keys to timestamped byte payloads.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its creation time.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.put_at(key, value, Instant::now());
    }

    /// Stores `value` under `key` with an explicit creation time.
    pub(crate) fn put_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.entries
            .insert(key, CacheEntry::created_at(value, created_at));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is not checked here; stale entries are only removed by a sweep.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Remove Older Than ==
    /// Deletes every entry created strictly before `cutoff`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_older_than(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(cutoff));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
