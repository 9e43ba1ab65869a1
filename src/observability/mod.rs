//! Observability for docrest
//!
//! Structured logging through `tracing`:
//! - JSON lines by default, one event per line
//! - Stable UPPER_SNAKE `event` field on every lifecycle and failure event
//! - Per-request spans from the HTTP trace layer
//!
//! # Usage
//!
//! ```ignore
//! use docrest::observability::init_logging;
//!
//! init_logging(&config.log)?;
//! tracing::info!(event = "SERVER_LISTENING", addr = %addr);
//! ```

mod logger;

pub use logger::{build_filter, init_logging, LoggingError};
