//! Configuration management for basedev-context
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `BASEDEV_SCRATCH_PATH`: directory classified by `context` when no path is
//!   given - default: the system temp dir
//! - `BASEDEV_LOG_LEVEL`: logging level - default: "info"
//! - `BASEDEV_LOG_JSON`: emit JSON log lines (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use basedev_context::ContextConfig;
//!
//! let config = ContextConfig::from_env()?;
//! println!("{}", config);
//! # Ok::<(), basedev_context::ConfigError>(())
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Runtime configuration for the detector service
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Directory probed for project context when none is given
    pub scratch_path: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON log lines instead of pretty output
    pub log_json: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            scratch_path: env::temp_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
        }
    }
}

impl ContextConfig {
    /// Loads from `BASEDEV_*` environment variables over the defaults.
    ///
    /// # Errors
    ///
    /// `ConfigError::ParseError` when `BASEDEV_LOG_JSON` is not `true`/`false`,
    /// and anything [`validate`](Self::validate) rejects.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = env::var_os("BASEDEV_SCRATCH_PATH") {
            config.scratch_path = PathBuf::from(path);
        }

        if let Ok(level) = env::var("BASEDEV_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }

        if let Ok(raw) = env::var("BASEDEV_LOG_JSON") {
            config.log_json = raw.parse::<bool>().map_err(|e| ConfigError::ParseError {
                field: "BASEDEV_LOG_JSON".to_string(),
                error: e.to_string(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for an empty scratch path or an
    /// unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scratch_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Scratch path cannot be empty".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ContextConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "basedev-context Configuration:")?;
        writeln!(f, "  Scratch Path: {}", self.scratch_path.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("BASEDEV_SCRATCH_PATH"),
            EnvGuard::unset("BASEDEV_LOG_LEVEL"),
            EnvGuard::unset("BASEDEV_LOG_JSON"),
        ];

        let config = ContextConfig::from_env().unwrap();

        assert_eq!(config, ContextConfig::default());
        assert_eq!(config.scratch_path, env::temp_dir());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_json, DEFAULT_LOG_JSON);
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("BASEDEV_SCRATCH_PATH", "/srv/projects"),
            EnvGuard::set("BASEDEV_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("BASEDEV_LOG_JSON", "true"),
        ];

        let config = ContextConfig::from_env().unwrap();

        assert_eq!(config.scratch_path, PathBuf::from("/srv/projects"));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_bool() {
        let _guards = vec![
            EnvGuard::unset("BASEDEV_LOG_LEVEL"),
            EnvGuard::set("BASEDEV_LOG_JSON", "yes please"),
        ];

        let err = ContextConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("BASEDEV_LOG_JSON"));
    }

    #[test]
    #[serial]
    fn test_from_env_validates() {
        let _guards = vec![
            EnvGuard::unset("BASEDEV_LOG_JSON"),
            EnvGuard::set("BASEDEV_LOG_LEVEL", "chatty"),
        ];

        assert!(matches!(
            ContextConfig::from_env(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = ContextConfig {
            scratch_path: PathBuf::from("/tmp"),
            log_level: "invalid".to_string(),
            log_json: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_scratch_path() {
        let config = ContextConfig {
            scratch_path: PathBuf::new(),
            log_level: "info".to_string(),
            log_json: false,
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Scratch path"));
    }

    #[test]
    fn test_display() {
        let config = ContextConfig {
            scratch_path: PathBuf::from("/tmp"),
            log_level: "warn".to_string(),
            log_json: true,
        };

        let display = config.to_string();
        assert!(display.contains("basedev-context Configuration:"));
        assert!(display.contains("Scratch Path: /tmp"));
        assert!(display.contains("Log Level: warn"));
    }
}
