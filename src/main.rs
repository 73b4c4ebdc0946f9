use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lookthrough::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for lookthrough::AppCommand {
    fn from(cmd: Commands) -> lookthrough::AppCommand {
        match cmd {
            Commands::Serve { host, port } => lookthrough::AppCommand::Serve { host, port },
            Commands::Summary => lookthrough::AppCommand::Summary,
            Commands::Drill { asset_class } => lookthrough::AppCommand::Drill { asset_class },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Serve the drill-down dashboard
    Serve {
        /// Address to bind, overrides the config
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the config
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Display asset class and look-through allocation
    Summary,
    /// Display the breakdown of one asset class
    Drill {
        /// Asset class to drill into, e.g. "Fund"
        asset_class: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => lookthrough::cli::setup::setup(),
        Some(cmd) => lookthrough::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
