//! Key-Value Store Port
//!
//! The coordination substrate the distributed lock is built on. The three
//! mutating/reading primitives plus TTL introspection are the *entire*
//! contract; everything the lock guarantees reduces to the store honoring
//! the atomicity notes on `put_if_absent` and `delete_if_equals`.

use crate::error::Result;
use crate::value_objects::KeyTtl;
use async_trait::async_trait;
use std::time::Duration;

/// Key-value store port with per-key expiration
///
/// # Implementations
///
/// - **Redis**: production backend (`SET NX PX` + server-side Lua script)
/// - **Memory**: in-process fake with the same TTL semantics, for tests
///
/// # Atomicity contract
///
/// `put_if_absent` and `delete_if_equals` MUST be atomic with respect to
/// every other client of the store. In particular `delete_if_equals` must
/// perform its compare and its delete as one store-side unit; a client-side
/// read-then-delete sequence races with expiry and re-acquisition and is not
/// a valid implementation.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Insert `value` at `key` with the given TTL, only if `key` is absent
    ///
    /// # Returns
    /// `true` if the insert happened (the key was free), `false` if the key
    /// already existed. Any other failure is an error - the caller must not
    /// assume either outcome.
    async fn put_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool>;

    /// Read the current value at `key`
    ///
    /// # Returns
    /// `None` if the key is absent or already expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Delete `key` only if its current value equals `expected`
    ///
    /// Compare and delete happen as one atomic store-side operation.
    ///
    /// # Returns
    /// `true` if the key existed with the expected value and was deleted,
    /// `false` if the key was absent or held a different value.
    async fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool>;

    /// Remaining time-to-live of `key` according to the store's clock
    async fn remaining_ttl(&self, key: &str) -> Result<KeyTtl>;

    /// Name of this store implementation (e.g. "redis", "memory")
    fn store_name(&self) -> &str;
}
