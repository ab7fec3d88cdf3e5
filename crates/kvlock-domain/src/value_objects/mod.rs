//! Domain value objects

pub mod ttl;

pub use ttl::KeyTtl;
