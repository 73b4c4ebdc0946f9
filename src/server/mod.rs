//! HTTP surface for the dashboard.
mod handlers;

use crate::core::portfolio::Portfolio;
use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Debug, Clone)]
pub struct AppState {
    portfolio: Arc<Portfolio>,
}

impl AppState {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/charts", get(handlers::charts))
        .route("/api/drilldown", post(handlers::drilldown))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves the dashboard on an already bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("Failed to read listener address")?;
    tracing::info!(%addr, "dashboard listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Dashboard server failed")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
