//! CLI command implementations
//!
//! `serve` follows a fixed startup order: configuration, logging, store
//! connection, HTTP listener. A store that cannot be reached aborts startup;
//! there is no retry.

use std::io::{self, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::http_server::{shutdown_signal, HttpServer};
use crate::observability::init_logging;
use crate::store::{DocumentStore, MemoryStore, MongoStore};

use super::args::{Cli, Command, Overrides};
use super::errors::CliResult;

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { overrides, memory } => {
            let config = effective_config(&overrides)?;
            init_logging(&config.log)?;

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve(config, memory))
        }
        Command::CheckConfig { overrides } => {
            let config = effective_config(&overrides)?;
            check_config(&config, &mut io::stdout().lock())
        }
    }
}

/// Load the configuration file (if any) and apply command-line overrides
pub fn effective_config(overrides: &Overrides) -> CliResult<Config> {
    let mut config = Config::load_or_default(overrides.config.as_deref())?;

    if let Some(port) = overrides.port {
        config.http.port = port;
    }
    if let Some(uri) = &overrides.mongo_uri {
        config.store.uri = uri.clone();
    }
    if let Some(database) = &overrides.database {
        config.store.database = database.clone();
    }

    Ok(config)
}

/// Open the store, serve until a shutdown signal, then release the store
pub async fn serve(config: Config, memory: bool) -> CliResult<()> {
    let store = open_store(&config, memory).await?;

    let server = HttpServer::with_config(config.http.clone(), Arc::clone(&store));
    let result = server.start(shutdown_signal()).await;

    store.disconnect().await;
    Ok(result?)
}

async fn open_store(config: &Config, memory: bool) -> CliResult<Arc<dyn DocumentStore>> {
    if memory {
        tracing::warn!(
            event = "STORE_IN_MEMORY",
            "serving from process memory; data is lost on exit"
        );
        return Ok(Arc::new(MemoryStore::new()));
    }

    match MongoStore::connect(&config.store.uri, &config.store.database).await {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => {
            tracing::error!(event = e.event(), uri = %config.store.uri, error = %e);
            Err(e.into())
        }
    }
}

/// Write the effective configuration as pretty JSON
pub fn check_config<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}
