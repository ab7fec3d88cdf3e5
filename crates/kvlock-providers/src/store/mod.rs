//! Key-value store provider implementations

#[cfg(feature = "store-memory")]
pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::MemoryStore;
#[cfg(feature = "store-redis")]
pub use redis::{RedisStore, RedisStoreConfig};
