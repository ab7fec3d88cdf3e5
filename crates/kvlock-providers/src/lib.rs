//! Store provider implementations for kvlock
//!
//! Implements the [`kvlock_domain::KeyValueStore`] port.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`store::RedisStore`] | Distributed | Redis-backed, the production store |
//! | [`store::MemoryStore`] | Testing | In-process fake with real TTL semantics |
//!
//! ## Provider Selection Guide
//!
//! - **Production**: `RedisStore` - atomicity comes from `SET NX PX` and a
//!   server-evaluated Lua script
//! - **Unit tests**: `MemoryStore` - deterministic, honors `tokio::time`
//!   pause/advance

pub mod store;

#[cfg(feature = "store-memory")]
pub use store::MemoryStore;
#[cfg(feature = "store-redis")]
pub use store::{RedisStore, RedisStoreConfig};
