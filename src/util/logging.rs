//! Structured logging setup
//!
//! Initializes a `tracing` subscriber once per process: pretty console output
//! by default, JSON lines when requested. `RUST_LOG` takes precedence over the
//! configured level. Logs go to stderr so command output stays clean.
//!
//! # Example
//!
//! ```no_run
//! use basedev_context::util::logging::{init_logging, LoggingConfig};
//! use basedev_context::ContextConfig;
//!
//! let config = ContextConfig::from_env()?;
//! init_logging(LoggingConfig::from_config(&config));
//! tracing::info!("Service started");
//! # Ok::<(), basedev_context::ConfigError>(())
//! ```

use crate::config::ContextConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., basedev_context::registry) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    /// JSON lines carry source location and thread ids for log aggregation;
    /// pretty output stays terse
    pub fn from_config(config: &ContextConfig) -> Self {
        Self {
            level: parse_level(&config.log_level),
            use_json: config.log_json,
            include_location: config.log_json,
            include_thread_ids: config.log_json,
            ..Default::default()
        }
    }
}

/// Parses a log level, case-insensitively; unknown values fall back to INFO
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            if let Ok(directive) = format!("basedev_context={}", config.level).parse() {
                filter = filter.add_directive(directive);
            }
        }

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    fn test_from_context_config() {
        let context = ContextConfig {
            scratch_path: PathBuf::from("/tmp"),
            log_level: "debug".to_string(),
            log_json: true,
        };

        let config = LoggingConfig::from_config(&context);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.use_json);
        assert!(config.include_location);
        assert!(config.include_thread_ids);

        let pretty = LoggingConfig::from_config(&ContextConfig {
            log_json: false,
            ..context
        });
        assert!(!pretty.include_location);
        assert!(!pretty.include_thread_ids);
    }
}
