//! In-memory store provider
//!
//! A [`KeyValueStore`] fake with real TTL semantics, for unit tests and for
//! running without a Redis instance. Deadlines use `tokio::time::Instant`,
//! so tests can pause and advance the clock deterministically.
//!
//! Expired entries are treated as absent everywhere and evicted lazily on
//! the next touch of their key.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use kvlock_domain::error::Result;
use kvlock_domain::ports::KeyValueStore;
use kvlock_domain::value_objects::KeyTtl;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct StoredEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// In-process key-value store with per-key expiration
///
/// Atomicity of the conditional operations comes from DashMap's per-shard
/// locking: `put_if_absent` holds the shard entry across its check-and-insert
/// and `delete_if_equals` uses a guarded conditional removal.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: std::sync::Arc<DashMap<String, StoredEntry>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired())
            .count()
    }

    /// Returns true if the store holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Plant an entry directly, bypassing the conditional-insert path
    ///
    /// Test hook for setting up foreign-owner state.
    pub fn insert_raw(&self, key: &str, value: &str, ttl: Option<Duration>) {
        self.entries.insert(
            key.to_string(),
            StoredEntry {
                value: value.to_string(),
                expires_at: ttl.map(|t| Instant::now() + t),
            },
        );
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let new_entry = StoredEntry {
            value: value.to_string(),
            expires_at: Some(Instant::now() + ttl),
        };
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired() {
                    occupied.insert(new_entry);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(new_entry);
                Ok(true)
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired() => true,
            Some(entry) => return Ok(Some(entry.value.clone())),
            None => return Ok(None),
        };
        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired());
        }
        Ok(None)
    }

    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        // Expired entries must not be deletable: a matching-but-expired value
        // is indistinguishable from an absent key to other clients.
        let removed = self
            .entries
            .remove_if(key, |_, entry| !entry.is_expired() && entry.value == expected);
        Ok(removed.is_some())
    }

    async fn remaining_ttl(&self, key: &str) -> Result<KeyTtl> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => Ok(KeyTtl::Missing),
            Some(entry) => match entry.expires_at {
                Some(deadline) => Ok(KeyTtl::Expires(
                    deadline.saturating_duration_since(Instant::now()),
                )),
                None => Ok(KeyTtl::Persistent),
            },
            None => Ok(KeyTtl::Missing),
        }
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_if_absent_rejects_live_duplicates() {
        let store = MemoryStore::new();
        let ttl = Duration::from_secs(5);

        assert!(store.put_if_absent("k", "a", ttl).await.unwrap());
        assert!(!store.put_if_absent("k", "b", ttl).await.unwrap());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("a"));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entries_are_absent() {
        let store = MemoryStore::new();
        store
            .put_if_absent("k", "a", Duration::from_secs(1))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;

        assert_eq!(store.get("k").await.unwrap(), None);
        assert_eq!(store.remaining_ttl("k").await.unwrap(), KeyTtl::Missing);
        // The slot is free again
        assert!(store.put_if_absent("k", "b", Duration::from_secs(1)).await.unwrap());
    }

    #[tokio::test]
    async fn delete_if_equals_checks_value() {
        let store = MemoryStore::new();
        store
            .put_if_absent("k", "owner-1", Duration::from_secs(5))
            .await
            .unwrap();

        assert!(!store.delete_if_equals("k", "owner-2").await.unwrap());
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("owner-1"));

        assert!(store.delete_if_equals("k", "owner-1").await.unwrap());
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_if_equals_ignores_expired_match() {
        let store = MemoryStore::new();
        store
            .put_if_absent("k", "owner-1", Duration::from_secs(1))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(2)).await;

        assert!(!store.delete_if_equals("k", "owner-1").await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_ttl_counts_down() {
        let store = MemoryStore::new();
        store
            .put_if_absent("k", "a", Duration::from_secs(10))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;

        match store.remaining_ttl("k").await.unwrap() {
            KeyTtl::Expires(left) => assert_eq!(left, Duration::from_secs(6)),
            other => panic!("expected Expires, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn raw_insert_without_ttl_is_persistent() {
        let store = MemoryStore::new();
        store.insert_raw("k", "a", None);
        assert_eq!(store.remaining_ttl("k").await.unwrap(), KeyTtl::Persistent);
        assert_eq!(store.len(), 1);
        store.clear();
        assert!(store.is_empty());
    }
}
