//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables, and
//! default values, merged with Figment.

use crate::config::AppConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use kvlock_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable prefix (e.g. `KVLOCK_REDIS__URL`)
pub const CONFIG_ENV_PREFIX: &str = "KVLOCK";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "kvlock.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "kvlock";

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix, double underscore as the
    ///    nesting separator (e.g. `KVLOCK_REDIS__URL`, `KVLOCK_LOCK__DEFAULT_TTL_SECS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration file");
                figment = figment.merge(Toml::file(config_path));
            } else {
                tracing::debug!(path = %config_path.display(), "configuration file not found");
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            tracing::debug!(path = %default_path.display(), "loading discovered configuration file");
            figment = figment.merge(Toml::file(&default_path));
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config_with_source("failed to serialize config to TOML", e))?;
        std::fs::write(path.as_ref(), toml_string)?;
        Ok(())
    }

    /// Get the configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file in the usual locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    /// Validate the merged configuration
    fn validate_config(config: &AppConfig) -> Result<()> {
        if config.redis.url.is_empty() {
            return Err(Error::config("redis.url must not be empty"));
        }
        if config.redis.op_timeout_secs == 0 {
            return Err(Error::config("redis.op_timeout_secs must be non-zero"));
        }
        if config.lock.default_ttl_secs == 0 {
            return Err(Error::config("lock.default_ttl_secs must be non-zero"));
        }
        crate::logging::parse_log_level(&config.logging.level)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
