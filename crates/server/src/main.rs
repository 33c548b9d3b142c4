//! Recorte HTTP server.
//!
//! Exposes the batch link extraction endpoint over axum. The listen address
//! comes from `RECORTE_LISTEN_ADDR`; log filtering from `RUST_LOG`.

mod handlers;
mod routes;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use recorte_core::LinkProcessor;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::handlers::AppState;
use crate::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let addr: SocketAddr = std::env::var("RECORTE_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8787".to_string())
        .parse()
        .context("Invalid listen address")?;

    let processor = LinkProcessor::new().context("Failed to build HTTP client")?;
    let state = AppState { processor: Arc::new(processor) };

    let listener = TcpListener::bind(addr).await.context("Failed to bind listener")?;
    info!("recorte-server listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
