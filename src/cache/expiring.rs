//! Expiring Cache Module
//!
//! A shared, lock-guarded [`CacheStore`] paired with the background sweep that
//! expires its entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::{start_sweep, SweepHandle};

/// Smallest sweep interval accepted; a zero period would make the ticker panic.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Expiring Cache ==
/// Concurrency-safe byte cache whose entries expire roughly one `interval`
/// after they were written.
///
/// Expiration is driven entirely by the background sweep: `get` returns any
/// entry still present, whatever its age. Share the cache between owners with
/// an `Arc`.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    sweeper: SweepHandle,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        Self::build(interval, None)
    }

    /// Creates an empty cache whose sweep also stops when `shutdown` turns
    /// `true` or its sender is dropped.
    pub fn with_shutdown(interval: Duration, shutdown: watch::Receiver<bool>) -> Self {
        Self::build(interval, Some(shutdown))
    }

    fn build(interval: Duration, shutdown: Option<watch::Receiver<bool>>) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let sweeper = start_sweep(store.clone(), interval, shutdown);

        Self {
            store,
            interval,
            sweeper,
        }
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any existing entry and resetting
    /// its age.
    pub async fn put(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.write().await.put(key.into(), value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if present.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    // == Stop ==
    /// Halts the background sweep after its current tick.
    ///
    /// Entries are kept and stay readable, but nothing expires from this
    /// point on. Calling `stop` again has no effect.
    pub fn stop(&self) {
        debug!("Stopping cache sweep");
        self.sweeper.stop();
    }

    /// Returns true while the background sweep is still running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper.is_running()
    }

    /// The entry lifetime and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of entries currently stored.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
