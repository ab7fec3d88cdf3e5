//! kvlock - distributed mutual exclusion over a TTL key-value store
//!
//! Lets independent, uncoordinated processes agree on who owns a critical
//! section, using only two atomic store primitives as the coordination
//! substrate: conditional insert with TTL (acquire) and conditional delete
//! (release). Redis is the production store; an in-memory fake with the same
//! semantics ships for tests.
//!
//! ## Quick start
//!
//! ```ignore
//! use kvlock::{LockRegistry, RedisStore, RedisStoreConfig};
//! use std::sync::Arc;
//!
//! let store = Arc::new(RedisStore::connect(&RedisStoreConfig::default()).await?);
//! let registry = LockRegistry::new(store);
//!
//! let lock = registry.lock("jobs:nightly-report")?;
//! if lock.try_acquire().await? {
//!     // critical section
//!     lock.release().await?;
//! }
//! ```
//!
//! ## Caller obligations
//!
//! - A `StoreUnavailable` error ([`Error::Store`]) from `try_acquire` or
//!   `release` means the store could not be trusted to answer. Proceeding as
//!   if the lock were held breaks mutual exclusion; back off instead.
//! - The TTL is the only crash safety net. Pick one longer than the worst
//!   critical section, because this core deliberately ships no watchdog
//!   renewal.

pub mod config;
pub mod lock;
pub mod logging;
pub mod registry;

// Re-export the layers callers actually touch
pub use config::{AppConfig, ConfigLoader, LockConfig, LoggingConfig};
pub use kvlock_domain::{Error, KeyTtl, KeyValueStore, Result};
pub use kvlock_providers::store::MemoryStore;
pub use kvlock_providers::store::{RedisStore, RedisStoreConfig};
pub use lock::DistributedLock;
pub use logging::init_logging;
pub use registry::LockRegistry;
