// src/server/mod.rs
//! HTTP adapter: the JSON scan API plus the static front end.

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
pub use error::ApiError;
pub use handlers::{ApiState, HealthResponse, ScanBody};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Builds the application router.
///
/// `/api/*` is handled here; every other path is looked up in the web
/// directory, with `/` mapped to `index.html`.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(ApiState { default_top_n: config.default_top_n });

    Router::new()
        .route("/api/scan", post(handlers::scan))
        .route("/api/health", get(handlers::health))
        .with_state(state)
        .fallback_service(ServeDir::new(&config.web_dir))
        .layer(TraceLayer::new_for_http())
}

/// Main API server
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Binds and serves until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Fails when the address cannot be bound or the server stops abnormally.
    pub async fn start(&self) -> Result<()> {
        if !self.config.web_dir.is_dir() {
            warn!(web_dir = %self.config.web_dir.display(), "web directory not found, only /api is available");
        }

        let addr = (self.config.host.as_str(), self.config.port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}:{}", self.config.host, self.config.port))?;
        let local = listener.local_addr().context("failed to read the bound address")?;
        info!("project_stats server listening on http://{local}");

        axum::serve(listener, router(&self.config))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server stopped unexpectedly")?;

        info!("server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
