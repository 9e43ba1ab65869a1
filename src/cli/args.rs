//! CLI argument definitions using clap
//!
//! Commands:
//! - docrest serve [--config <path>] [--port <n>] [--mongo-uri <uri>] [--database <name>] [--memory]
//! - docrest check-config [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// docrest - REST access to document database collections
#[derive(Parser, Debug)]
#[command(name = "docrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the database and serve the HTTP API
    Serve {
        #[command(flatten)]
        overrides: Overrides,

        /// Keep collections in process memory instead of connecting to MongoDB
        #[arg(long)]
        memory: bool,
    },

    /// Print the effective configuration as JSON and exit
    CheckConfig {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Flags layered over the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// MongoDB connection string
    #[arg(long = "mongo-uri")]
    pub mongo_uri: Option<String>,

    /// Logical database name
    #[arg(long)]
    pub database: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
