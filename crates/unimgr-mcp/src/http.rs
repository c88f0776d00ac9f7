//! HTTP delivery mode: liveness probe plus an `/mcp` acknowledgment stub.
//!
//! This is not an MCP-over-HTTP binding. The `/mcp` endpoint accepts a JSON
//! body, logs it, and answers with a fixed notice pointing callers at the
//! stdio transport; only `/health` carries real information.

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_stub))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn mcp_stub(Json(request): Json<Value>) -> Json<Value> {
    debug!(%request, "HTTP MCP request received");
    Json(json!({
        "status": "MCP HTTP transport is available",
        "info": "This is an HTTP endpoint. Use stdio transport for full MCP protocol support.",
    }))
}

/// Bind and serve until the shutdown token fires.
pub async fn serve(addr: SocketAddr, shutdown: CancellationToken) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP transport listening on {addr}");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    Ok(())
}
