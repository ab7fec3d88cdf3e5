//! Key TTL value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remaining time-to-live of a key, as reported by the store
///
/// Redis reports "no such key" and "key without expiry" as the sentinel
/// integers -2 and -1; a typed enum keeps those states from ever being
/// mistaken for a real duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyTtl {
    /// The key does not exist (or has already expired)
    Missing,
    /// The key exists but has no expiry attached
    Persistent,
    /// The key exists and expires after the contained duration
    Expires(Duration),
}

impl KeyTtl {
    /// Remaining duration, treating missing and persistent keys as zero
    pub fn remaining(&self) -> Duration {
        match self {
            Self::Expires(d) => *d,
            Self::Missing | Self::Persistent => Duration::ZERO,
        }
    }

    /// Returns true if the key currently exists in the store
    pub fn exists(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Build from a Redis PTTL reply (milliseconds, -1 = no expiry, -2 = no key)
    pub fn from_pttl_millis(millis: i64) -> Self {
        match millis {
            -2 => Self::Missing,
            -1 => Self::Persistent,
            ms if ms < 0 => Self::Missing,
            ms => Self::Expires(Duration::from_millis(ms.unsigned_abs())),
        }
    }
}
