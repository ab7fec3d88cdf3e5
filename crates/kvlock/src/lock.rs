//! Distributed lock state machine
//!
//! One instance owns one `(key, token, ttl)` triple. The protocol is
//! non-blocking try-lock: contention yields a failed attempt, never a queued
//! wait, and nothing here retries on the caller's behalf.

use kvlock_domain::error::{Error, Result};
use kvlock_domain::ports::KeyValueStore;
use kvlock_domain::value_objects::KeyTtl;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

/// A mutual-exclusion lock coordinated through a shared key-value store
///
/// The store's entry at `key` is the single source of truth; the instance
/// keeps only an advisory in-memory flag, which can go stale the moment the
/// TTL expires on the server. Use [`DistributedLock::is_held`] when the
/// current truth matters.
///
/// Not reentrant, and a single instance is not meant to be raced against
/// itself: two concurrent `try_acquire` calls share one token and cannot
/// report independent ownership.
#[derive(Debug)]
pub struct DistributedLock {
    store: Arc<dyn KeyValueStore>,
    key: String,
    token: String,
    ttl: Duration,
    /// Advisory only - never consulted for correctness
    held: AtomicBool,
}

impl DistributedLock {
    /// Create a lock bound to `key`, proving ownership with `token`
    ///
    /// The token must uniquely identify the acquiring party. A stable
    /// process name is risky: a restarted process with the same name would
    /// believe it may release its pre-crash incarnation's lock. Prefer the
    /// per-instance random tokens minted by
    /// [`LockRegistry::lock`](crate::LockRegistry::lock).
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        token: impl Into<String>,
        ttl: Duration,
    ) -> Result<Self> {
        let key = key.into();
        let token = token.into();
        if key.is_empty() {
            return Err(Error::invalid_argument("lock key must not be empty"));
        }
        if token.is_empty() {
            return Err(Error::invalid_argument("owner token must not be empty"));
        }
        if ttl.is_zero() {
            return Err(Error::invalid_argument("lock TTL must be non-zero"));
        }
        Ok(Self {
            store,
            key,
            token,
            ttl,
            held: AtomicBool::new(false),
        })
    }

    /// Attempt to acquire the lock
    ///
    /// A single atomic conditional insert against the store. Returns `true`
    /// if this instance now holds the lock, `false` if someone else does -
    /// contention is not an error. On `Err` the caller must not assume
    /// ownership either way.
    ///
    /// The store provider bounds the round trip with its per-operation
    /// timeout; callers needing a tighter deadline can drop the future
    /// (e.g. race it against `tokio::time::timeout`).
    pub async fn try_acquire(&self) -> Result<bool> {
        let acquired = self
            .store
            .put_if_absent(&self.key, &self.token, self.ttl)
            .await?;
        if acquired {
            self.held.store(true, Ordering::SeqCst);
            debug!(key = %self.key, ttl = ?self.ttl, "lock acquired");
        } else {
            debug!(key = %self.key, "lock contended");
        }
        Ok(acquired)
    }

    /// Release the lock, but only if this instance still owns it
    ///
    /// A single atomic compare-and-delete against the store. Returns
    /// [`Error::NotOwner`] when the key holds a different token or no longer
    /// exists - expected under TTL expiry races, and distinct from a store
    /// outage so callers can tell the two apart.
    pub async fn release(&self) -> Result<()> {
        // After asking for release this instance may no longer assume
        // ownership, whatever the store answers.
        self.held.store(false, Ordering::SeqCst);

        let deleted = self.store.delete_if_equals(&self.key, &self.token).await?;
        if deleted {
            debug!(key = %self.key, "lock released");
            Ok(())
        } else {
            debug!(key = %self.key, "release refused: not the current owner");
            Err(Error::not_owner(&self.key))
        }
    }

    /// Authoritative ownership check
    ///
    /// Re-reads the store and compares tokens. This is the current truth,
    /// unlike [`DistributedLock::locally_held`], which cannot observe a TTL
    /// expiry that happened without notification.
    pub async fn is_held(&self) -> Result<bool> {
        let value = self.store.get(&self.key).await?;
        Ok(value.as_deref() == Some(self.token.as_str()))
    }

    /// Remaining TTL of the lock key according to the store's clock
    pub async fn remaining_ttl(&self) -> Result<KeyTtl> {
        self.store.remaining_ttl(&self.key).await
    }

    /// The advisory in-memory flag: whether this instance *believes* it
    /// holds the lock. May be stale relative to the store.
    pub fn locally_held(&self) -> bool {
        self.held.load(Ordering::SeqCst)
    }

    /// The lock key naming the protected resource
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The owner token proving this instance's identity
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The TTL attached at acquisition time
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvlock_providers::store::MemoryStore;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn constructor_rejects_bad_arguments() {
        let ttl = Duration::from_secs(5);
        assert!(DistributedLock::new(store(), "", "t", ttl).is_err());
        assert!(DistributedLock::new(store(), "k", "", ttl).is_err());
        assert!(DistributedLock::new(store(), "k", "t", Duration::ZERO).is_err());
        assert!(DistributedLock::new(store(), "k", "t", ttl).is_ok());
    }

    #[tokio::test]
    async fn advisory_flag_tracks_acquire_and_release() {
        let lock = DistributedLock::new(store(), "k", "t", Duration::from_secs(5)).unwrap();
        assert!(!lock.locally_held());

        assert!(lock.try_acquire().await.unwrap());
        assert!(lock.locally_held());

        lock.release().await.unwrap();
        assert!(!lock.locally_held());
    }

    #[tokio::test]
    async fn advisory_flag_clears_even_when_release_is_refused() {
        let shared = Arc::new(MemoryStore::new());
        let lock = DistributedLock::new(
            shared.clone() as Arc<dyn KeyValueStore>,
            "k",
            "t",
            Duration::from_secs(5),
        )
        .unwrap();

        assert!(lock.try_acquire().await.unwrap());
        // Someone else's token replaces ours behind our back
        shared.insert_raw("k", "intruder", None);

        let err = lock.release().await.unwrap_err();
        assert!(err.is_not_owner());
        assert!(!lock.locally_held());
    }
}
