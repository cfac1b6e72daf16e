#[macro_use]
extern crate tracing;

pub mod error;
pub mod router;

pub use router::{
    create_router,
    AppState,
    BuildInfo,
};

use eyre::{
    Context as _,
    Result,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serves the exporter until the process receives Ctrl-C.
pub async fn serve(state: AppState, listen_address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(listen_address)
        .await
        .wrap_err_with(|| format!("Could not listen on {listen_address}"))?;

    info!("Listening on {listen_address}");

    axum::serve(listener, create_router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "Could not listen for the shutdown signal");
    }
    info!("Shutting down");
}
