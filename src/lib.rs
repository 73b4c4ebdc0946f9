pub mod cli;
pub mod core;
pub mod server;

use crate::core::config::{AppConfig, ServerConfig};
use anyhow::Result;
use tracing::{debug, info, warn};

pub enum AppCommand {
    Serve {
        host: Option<String>,
        port: Option<u16>,
    },
    Summary,
    Drill {
        asset_class: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Lookthrough starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let portfolio = config.portfolio;
    for warning in portfolio.validate() {
        warn!("{warning}");
    }

    match command {
        AppCommand::Serve { host, port } => {
            let server_config = ServerConfig {
                host: host.unwrap_or(config.server.host),
                port: port.unwrap_or(config.server.port),
            };
            cli::serve::run(portfolio, &server_config).await
        }
        AppCommand::Summary => cli::summary::run(&portfolio, &config.currency),
        AppCommand::Drill { asset_class } => {
            cli::drill::run(&portfolio, &asset_class, &config.currency)
        }
    }
}
