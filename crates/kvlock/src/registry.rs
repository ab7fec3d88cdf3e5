//! Lock registry
//!
//! Convenience layer that binds [`DistributedLock`] instances to one shared
//! store handle and mints their owner tokens.

use crate::lock::DistributedLock;
use kvlock_domain::constants::DEFAULT_LOCK_TTL;
use kvlock_domain::error::Result;
use kvlock_domain::ports::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Factory for locks sharing one store handle
///
/// [`LockRegistry::lock`] mints a fresh random token per instance, so a
/// crashed-and-restarted process can never mistake itself for its previous
/// incarnation and release a lock it no longer owns. Callers that manage
/// their own identity can opt out via [`LockRegistry::lock_with_token`].
#[derive(Debug, Clone)]
pub struct LockRegistry {
    store: Arc<dyn KeyValueStore>,
    default_ttl: Duration,
}

impl LockRegistry {
    /// Create a registry with the default lock TTL
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_default_ttl(store, DEFAULT_LOCK_TTL)
    }

    /// Create a registry whose locks default to `default_ttl`
    pub fn with_default_ttl(store: Arc<dyn KeyValueStore>, default_ttl: Duration) -> Self {
        Self { store, default_ttl }
    }

    /// Build a lock for `key` with a fresh per-instance owner token
    pub fn lock(&self, key: impl Into<String>) -> Result<DistributedLock> {
        self.lock_with_ttl(key, self.default_ttl)
    }

    /// Build a lock for `key` with a fresh token and an explicit TTL
    pub fn lock_with_ttl(&self, key: impl Into<String>, ttl: Duration) -> Result<DistributedLock> {
        DistributedLock::new(self.store.clone(), key, Uuid::new_v4().to_string(), ttl)
    }

    /// Build a lock with a caller-supplied owner token
    ///
    /// The token must be unique to the acquiring party. Reusing a stable
    /// name across process restarts lets a restarted process release its
    /// predecessor's lock; prefer [`LockRegistry::lock`] unless the caller
    /// genuinely needs a durable identity.
    pub fn lock_with_token(
        &self,
        key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<DistributedLock> {
        DistributedLock::new(self.store.clone(), key, token, self.default_ttl)
    }

    /// The shared store handle
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    /// The TTL applied when a lock does not specify its own
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvlock_providers::store::MemoryStore;

    #[test]
    fn minted_tokens_are_unique_per_instance() {
        let registry = LockRegistry::new(Arc::new(MemoryStore::new()));
        let a = registry.lock("k").unwrap();
        let b = registry.lock("k").unwrap();
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn explicit_ttl_and_token_are_honored() {
        let registry =
            LockRegistry::with_default_ttl(Arc::new(MemoryStore::new()), Duration::from_secs(7));

        let lock = registry.lock("k").unwrap();
        assert_eq!(lock.ttl(), Duration::from_secs(7));

        let lock = registry.lock_with_ttl("k", Duration::from_secs(2)).unwrap();
        assert_eq!(lock.ttl(), Duration::from_secs(2));

        let lock = registry.lock_with_token("k", "worker-9").unwrap();
        assert_eq!(lock.token(), "worker-9");
    }
}
