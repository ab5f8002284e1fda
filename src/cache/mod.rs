//! Cache Module
//!
//! Provides an in-memory byte cache whose entries are expired by a periodic
//! background sweep.
//!
//! Consumers that may run without a cache use [`lookup`] and [`remember`],
//! which accept `Option<&ExpiringCache>` and treat `None` as an always-empty
//! cache.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::{ExpiringCache, MIN_INTERVAL};
pub use store::CacheStore;

// == Optional Cache Access ==
/// Looks up `key` in `cache`. A missing cache always reports not-found.
pub async fn lookup(cache: Option<&ExpiringCache>, key: &str) -> Option<Vec<u8>> {
    match cache {
        Some(cache) => cache.get(key).await,
        None => None,
    }
}

/// Stores `value` under `key` in `cache`. Does nothing without a cache.
pub async fn remember(cache: Option<&ExpiringCache>, key: &str, value: Vec<u8>) {
    if let Some(cache) = cache {
        cache.put(key, value).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_lookup_without_cache_misses() {
        assert_eq!(lookup(None, "anything").await, None);
    }

    #[tokio::test]
    async fn test_remember_without_cache_is_noop() {
        remember(None, "key", b"value".to_vec()).await;
        assert_eq!(lookup(None, "key").await, None);
    }

    #[tokio::test]
    async fn test_remember_then_lookup() {
        let cache = ExpiringCache::new(Duration::from_secs(5));

        remember(Some(&cache), "https://example.com/a", b"body".to_vec()).await;

        assert_eq!(
            lookup(Some(&cache), "https://example.com/a").await,
            Some(b"body".to_vec())
        );
        assert_eq!(lookup(Some(&cache), "https://example.com/b").await, None);
    }
}
