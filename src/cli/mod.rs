//! CLI module for docrest
//!
//! Provides command-line interface for:
//! - serve: Connect to the store and run the HTTP API
//! - check-config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, Overrides};
pub use commands::{check_config, effective_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
