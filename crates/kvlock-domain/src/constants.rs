//! Domain-wide constants

use std::time::Duration;

/// Default lock TTL when none is configured (30 seconds)
pub const DEFAULT_LOCK_TTL: Duration = Duration::from_secs(30);

/// Default per-operation store timeout (3 seconds)
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(3);

/// Default store connect timeout (5 seconds)
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
