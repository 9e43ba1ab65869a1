//! Global subscriber installation

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Failure to install the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

/// Build the event filter
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| LoggingError::InvalidFilter(config.level.clone(), e.to_string()))
}

/// Install the process-wide subscriber
///
/// Logs go to stderr so stdout stays free for command output.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|_| LoggingError::AlreadyInitialized)
}
