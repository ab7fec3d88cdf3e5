//! Configuration
//!
//! Layered configuration via Figment: defaults, then a TOML file, then
//! `KVLOCK_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LockConfig, LoggingConfig};
