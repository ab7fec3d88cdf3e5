//! Domain layer for kvlock
//!
//! Pure types shared by every other crate in the workspace: the error
//! taxonomy, the `KeyValueStore` port that providers implement, and the
//! value objects exchanged across that boundary.
//!
//! This crate has no I/O of its own. Providers (`kvlock-providers`) implement
//! the ports defined here; the facade crate (`kvlock`) consumes them.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use ports::KeyValueStore;
pub use value_objects::KeyTtl;
