//! Cache Entry Module
//!
//! Defines a single cached payload together with its creation time.

use tokio::time::Instant;

// == Cache Entry ==
/// One cached byte payload and the moment it was stored.
///
/// Entries are never mutated; an overwrite replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was created
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Older Than ==
    /// Checks whether the entry was created strictly before `cutoff`.
    ///
    /// An entry created exactly at the cutoff survives.
    pub fn is_older_than(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }
}
