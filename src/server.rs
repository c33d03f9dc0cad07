//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Mapping store and validator construction
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state::AppState;
use crate::store::MappingStore;
use crate::validate::{SystemResolver, UrlValidator};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// Builds the in-memory mapping store and the DNS-backed validator, wires
/// them into the router, binds the listener, and serves until a shutdown
/// signal arrives. The store starts empty on every launch; mappings do
/// not survive a restart.
///
/// # Errors
///
/// Returns an error if the listener cannot bind to `addr` or the server
/// fails while running.
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting minilink server...");

    let validator = UrlValidator::new(Arc::new(SystemResolver), config.validation.dns_timeout());

    // Create application state
    let state = Arc::new(AppState {
        store: MappingStore::new(),
        validator,
    });

    // Create router
    let app = routes::create_router(state, config.cors.allowed_origins);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);
    info!("Base URL: {}", config.url.base_url);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails; without working signal
/// handlers the process cannot shut down gracefully at all.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
