//! HTTP API for scribe
//!
//! Exposes the analyzer over `POST /api/analyze` with permissive CORS so a
//! browser frontend on another origin can call it.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{AnalyzeRequest, HealthResponse};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::analysis::Analyzer;
use crate::config::Settings;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Build the API router
pub fn router(analyzer: Analyzer) -> Router {
    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .with_state(AppState { analyzer })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the API until Ctrl-C
pub async fn run(settings: &Settings, analyzer: Analyzer) -> Result<()> {
    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP API to {}", addr))?;

    info!("HTTP API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(analyzer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
