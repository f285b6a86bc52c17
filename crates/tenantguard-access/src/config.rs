//! Engine configuration.
//!
//! Configuration is loaded from environment variables with defaults that
//! match the engine's reference behavior.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Access engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessConfig {
    /// Emit a log event for every decision.
    pub log_decisions: bool,

    /// Upper bound on the number of checks in one complex permission
    /// request. `None` means unlimited.
    pub max_batch_checks: Option<usize>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            log_decisions: true,
            max_batch_checks: None,
        }
    }
}

impl AccessConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ACCESS_LOG_DECISIONS`: Log every decision (default: true)
    /// - `ACCESS_MAX_BATCH_CHECKS`: Maximum checks per complex request (default: unlimited)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            log_decisions: lookup("ACCESS_LOG_DECISIONS")
                .map(|s| s != "false" && s != "0")
                .unwrap_or(default.log_decisions),
            max_batch_checks: lookup("ACCESS_MAX_BATCH_CHECKS")
                .and_then(|s| s.parse().ok())
                .or(default.max_batch_checks),
        }
    }

    /// Set the maximum number of checks per complex request.
    pub fn with_max_batch_checks(mut self, max: usize) -> Self {
        self.max_batch_checks = Some(max);
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_batch_checks == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_MAX_BATCH_CHECKS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AccessConfig::default();
        assert!(config.log_decisions);
        assert_eq!(config.max_batch_checks, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let config = AccessConfig::from_lookup(lookup_from(&[
            ("ACCESS_LOG_DECISIONS", "0"),
            ("ACCESS_MAX_BATCH_CHECKS", "25"),
        ]));
        assert!(!config.log_decisions);
        assert_eq!(config.max_batch_checks, Some(25));
    }

    #[test]
    fn test_unparseable_values_fall_back_to_defaults() {
        let config =
            AccessConfig::from_lookup(lookup_from(&[("ACCESS_MAX_BATCH_CHECKS", "lots")]));
        assert_eq!(config, AccessConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_batch() {
        let config = AccessConfig::default().with_max_batch_checks(0);
        assert!(config.validate().is_err());
    }
}
