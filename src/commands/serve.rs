//! HTTP server command
//!
//! Serves the words API until interrupted.

use crate::api::build_router;
use crate::service::QueryService;
use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Bind `addr` and serve `service` until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(service: QueryService, addr: SocketAddr) -> Result<()> {
    let words = service.index().len();
    let app = build_router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local = listener.local_addr().unwrap_or(addr);

    tracing::info!(address = %local, words, "serving words API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
    }
}

/// Run [`serve`] on a fresh multi-threaded runtime
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the server fails.
pub fn run_server(service: QueryService, addr: SocketAddr) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(serve(service, addr))
}
