//! HTTP server configuration and startup

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use muscadine_core::ApiConfig;
use muscadine_quotes::PriceService;

use crate::routes::{router, AppState};

/// HTTP server wrapper
pub struct ApiServer {
    config: ApiConfig,
    service: Arc<PriceService>,
}

impl ApiServer {
    pub fn new(config: ApiConfig, service: Arc<PriceService>) -> Self {
        Self { config, service }
    }

    /// Get server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    fn app(&self) -> axum::Router {
        let state = AppState {
            prices: Arc::clone(&self.service),
        };

        // The dashboard front-end is served from a different origin
        let cors = CorsLayer::new()
            .allow_methods([Method::GET])
            .allow_headers(Any)
            .allow_origin(Any);

        router(state).layer(TraceLayer::new_for_http()).layer(cors)
    }

    /// Start the server
    pub async fn start(&self) -> anyhow::Result<()> {
        let addr: SocketAddr = self.address().parse().context("invalid bind address")?;

        info!("Starting HTTP server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.app()).await?;

        Ok(())
    }

    /// Start with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown: tokio::sync::oneshot::Receiver<()>,
    ) -> anyhow::Result<()> {
        let addr: SocketAddr = self.address().parse().context("invalid bind address")?;

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.app())
            .with_graceful_shutdown(async {
                shutdown.await.ok();
                info!("Shutdown signal received");
            })
            .await?;

        Ok(())
    }
}
