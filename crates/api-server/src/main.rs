//! Muscadine Box price API
//!
//! Main entry point for the HTTP server

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use muscadine_api_server::ApiServer;
use muscadine_core::ServiceConfig;
use muscadine_quotes::{CoinGeckoClient, PriceService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Muscadine Box price API v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = ServiceConfig::from_env();

    let provider = CoinGeckoClient::new(&config.provider)?;
    let service = Arc::new(PriceService::new(Arc::new(provider), &config.cache));

    let server = ApiServer::new(config.api, service);

    // Setup shutdown channel
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    // Spawn shutdown signal handler
    tokio::spawn(async move {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received Ctrl+C");
            }
            _ = terminate => {
                info!("Received termination signal");
            }
        }

        let _ = shutdown_tx.send(());
    });

    info!("HTTP server listening on {}", server.address());
    info!("Press Ctrl+C to shutdown");

    if let Err(e) = server.start_with_shutdown(shutdown_rx).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
