//! Domain port interfaces
//!
//! Ports define the contracts that external layers must implement, following
//! the Dependency Inversion Principle: the domain declares the interface, the
//! provider crate supplies the Redis-backed and in-memory implementations.

pub mod store;

pub use store::KeyValueStore;
