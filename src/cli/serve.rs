use crate::core::config::ServerConfig;
use crate::core::portfolio::Portfolio;
use crate::server::{self, AppState};
use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub async fn run(portfolio: Portfolio, server_config: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind dashboard to {addr}"))?;

    server::serve(listener, AppState::new(portfolio)).await
}
