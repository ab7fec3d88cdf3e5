//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kvlock
///
/// The two lock-protocol outcomes callers must distinguish are modeled as
/// dedicated variants:
///
/// - [`Error::Store`] - the store could not be reached or the call failed in
///   transit. It is ambiguous whether a mutating call took effect; a caller
///   that ignores this and proceeds as if it held the lock breaks mutual
///   exclusion.
/// - [`Error::NotOwner`] - a release found someone else's token (or no key at
///   all). Expected under TTL expiry races, not necessarily a caller bug.
#[derive(Error, Debug)]
pub enum Error {
    /// Store operation failed (transport, auth, or timeout)
    #[error("store error during {operation} on key '{key}': {message}")]
    Store {
        /// The store operation that failed (e.g. "SET NX", "PTTL")
        operation: String,
        /// The key the operation targeted
        key: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish a connection to the store
    #[error("store connection error: {message}")]
    Connection {
        /// Description of the connection failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Release attempted by a party that does not own the lock
    #[error("lock '{key}' is not held by this owner")]
    NotOwner {
        /// The lock key whose release was refused
        key: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a store error wrapping a provider-level failure
    pub fn store<S1, S2, E>(operation: S1, key: S2, source: E) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            operation: operation.into(),
            key: key.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store error for an operation that exceeded its deadline
    pub fn store_timeout<S1, S2>(operation: S1, key: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::Store {
            operation: operation.into(),
            key: key.into(),
            message: "operation timed out".to_string(),
            source: None,
        }
    }

    /// Create a store error with a plain message and no source
    pub fn store_message<S1, S2, S3>(operation: S1, key: S2, message: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::Store {
            operation: operation.into(),
            key: key.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error
    pub fn connection<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a connection error for a dial that exceeded its deadline
    pub fn connection_timeout() -> Self {
        Self::Connection {
            message: "connection timed out".to_string(),
            source: None,
        }
    }

    /// Create a not-owner error
    pub fn not_owner<S: Into<String>>(key: S) -> Self {
        Self::NotOwner { key: key.into() }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a source
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns true if this error means "the store could not be trusted to
    /// answer", as opposed to a definite protocol outcome
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::Connection { .. })
    }

    /// Returns true if this is the expected release-refused outcome
    pub fn is_not_owner(&self) -> bool {
        matches!(self, Self::NotOwner { .. })
    }
}
