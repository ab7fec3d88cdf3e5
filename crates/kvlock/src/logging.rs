//! Structured logging with tracing
//!
//! Centralized logging setup using the tracing ecosystem: an `EnvFilter`
//! seeded from `KVLOCK_LOG` (falling back to the configured level) and an
//! optional JSON output format.

use crate::config::LoggingConfig;
use kvlock_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Safe to call once per process; a second call reports a configuration
/// error instead of panicking.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("KVLOCK_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json/plain layers have different types, so two branches
    let init_result = if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    };

    init_result
        .map_err(|e| Error::config_with_source("failed to install tracing subscriber", e))?;

    info!("logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "invalid log level '{level}' (expected trace, debug, info, warn, or error)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    }

    #[test]
    fn invalid_level_is_a_config_error() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
