use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use benefit_report::config::Config;
use benefit_report::constants::DEFAULT_LOG_DIR;
use benefit_report::{infra, logging, metrics, server};

#[derive(Parser)]
#[command(name = "benefit_report")]
#[command(about = "Year-grouped report of benefits filtered by program amount ranges")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the rotating JSON log
    #[arg(long, global = true, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the report over HTTP
    Serve {
        /// Port to bind, overrides config and PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch the sources once and print the report as JSON
    Report {
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _log_guard = logging::init_logging(&cli.log_dir);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let use_case = Arc::new(
        infra::http_report_use_case(&config.sources).context("failed to build HTTP sources")?,
    );

    match cli.command {
        Commands::Serve { port } => {
            metrics::init_metrics();
            let port = port.unwrap_or(config.server.port);
            server::start_server(use_case, port).await?;
            info!("Server stopped");
        }
        Commands::Report { pretty } => {
            let groups = use_case.produce_report().await.map_err(|e| {
                error!("Report failed: {}", e);
                e
            })?;
            let json = if pretty {
                serde_json::to_string_pretty(&groups)?
            } else {
                serde_json::to_string(&groups)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
