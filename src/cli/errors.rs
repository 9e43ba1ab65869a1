//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use thiserror::Error;

use crate::observability::LoggingError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("DOCREST_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("DOCREST_LOGGING_ERROR: {0}")]
    Logging(#[from] LoggingError),

    /// Database unreachable at startup
    #[error("DOCREST_CONNECT_FAILED: {0}")]
    Connect(#[from] StoreError),

    /// Runtime startup, listener bind, serve or stdout failure
    #[error("DOCREST_IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCREST_OUTPUT_ERROR: {0}")]
    Output(#[from] serde_json::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
