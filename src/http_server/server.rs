//! # HTTP Server
//!
//! Main HTTP server: collection routes behind the cross-origin policy.

use std::future::Future;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::store::DocumentStore;

use super::collection_routes::{collection_routes, CollectionState};
use super::config::HttpServerConfig;
use super::cors::cors_policy;

/// HTTP server for the collection API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn DocumentStore>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with all endpoints
    pub fn build_router(store: Arc<dyn DocumentStore>) -> Router {
        let state = CollectionState::new(store);

        Router::new()
            .merge(collection_routes(state))
            // Also wraps the fallback, so OPTIONS on any path is answered here
            .layer(middleware::from_fn(cors_policy))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn start<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(event = "SERVER_LISTENING", addr = %addr, "server is running on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!(event = "SERVER_STOPPED");
        Ok(())
    }
}

/// Resolves on Ctrl-C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(event = "SIGNAL_HANDLER_FAILED", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(event = "SIGNAL_HANDLER_FAILED", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(event = "SHUTDOWN_REQUESTED");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn memory_store() -> Arc<dyn DocumentStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config, memory_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[tokio::test]
    async fn test_start_stops_on_shutdown() {
        let mut config = HttpServerConfig::with_port(0);
        config.host = "127.0.0.1".to_string();
        let server = HttpServer::with_config(config, memory_store());

        let result = server.start(async {}).await;
        assert!(result.is_ok());
    }
}
