//! Configuration types

use kvlock_domain::constants::DEFAULT_LOCK_TTL;
use kvlock_providers::store::RedisStoreConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Redis connection settings
    pub redis: RedisStoreConfig,

    /// Lock behavior settings
    pub lock: LockConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Lock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Default TTL in seconds for locks that don't specify their own
    pub default_ttl_secs: u64,
}

impl LockConfig {
    /// Default TTL as a duration
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: DEFAULT_LOCK_TTL.as_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Emit JSON-structured log lines instead of human-readable output
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
