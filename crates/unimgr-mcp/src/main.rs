use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use unimgr_api::SiteManagerClient;
use unimgr_config::{Config, TransportMode};
use unimgr_mcp::{SiteManagerServer, http, server};

#[tokio::main]
async fn main() {
    // .env is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    init_tracing();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    // stdout carries the MCP protocol in stdio mode, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> anyhow::Result<()> {
    // Config must resolve (API key included) before anything is served.
    let config = Config::load().context("configuration")?;

    let client = SiteManagerClient::new(config.api_url.as_str(), &config.api_key)
        .context("building Site Manager client")?;

    let shutdown = CancellationToken::new();
    spawn_signal_listener(shutdown.clone());

    match config.transport {
        TransportMode::Stdio => {
            info!("Starting UniFi Site Manager MCP server on stdio transport");
            server::serve_stdio(SiteManagerServer::new(client), shutdown).await?;
        }
        TransportMode::Http => {
            info!(
                "Starting UniFi Site Manager MCP server on HTTP at {}",
                config.http_addr
            );
            http::serve(config.http_addr, shutdown).await?;
        }
    }

    info!("UniFi Site Manager MCP server stopped");
    Ok(())
}

/// Cancel the shutdown token on SIGINT or SIGTERM, so both transports stop
/// and in-flight upstream requests are dropped.
fn spawn_signal_listener(shutdown: CancellationToken) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut terminate = match signal(SignalKind::terminate()) {
                Ok(stream) => stream,
                Err(err) => {
                    error!("failed to install SIGTERM handler: {err}");
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
        }

        info!("shutdown signal received");
        shutdown.cancel();
    });
}
