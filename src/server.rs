//! HTTP server initialization and runtime setup.

use crate::application::services::ShortLinkStore;
use crate::config::Config;
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Builds the shared state for `config`: a fresh, empty store.
pub fn build_state(config: &Config) -> AppState {
    let repository = Arc::new(InMemoryLinkRepository::with_capacity(config.store_capacity));
    let store = Arc::new(ShortLinkStore::new(repository));

    AppState::new(store, config.base_url.clone())
}

/// Runs the HTTP server with the given configuration until a shutdown
/// signal arrives.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails or the
/// server stops with a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("Link store initialized (in-memory)");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
