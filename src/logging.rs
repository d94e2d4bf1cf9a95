//! Logging System
//!
//! Structured logging on the `tracing` crate. Diagnostics go to
//! stderr: stdout is reserved for the final count message.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    // A one-shot tool stays quiet unless asked; the count message is
    // the only default output.
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// The `TREESUM_LOG` environment variable overrides the configured
/// level with a full filter directive when set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ManifestError> {
    let filter = build_env_filter(config)?;
    let base_subscriber = Registry::default().with(filter);

    match config.format.as_str() {
        "json" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "text" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(config.color)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        other => {
            return Err(ManifestError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            )));
        }
    }

    Ok(())
}

/// Build the level filter from the environment or the config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ManifestError> {
    if let Ok(filter) = EnvFilter::try_from_env("TREESUM_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| {
        ManifestError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })
}
