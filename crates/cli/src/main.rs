//! # Livemap
//!
//! Resolves the locations of online players and serves them as map points

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use livemap_domain::CliOverrides;
use livemap_jobs::{JobRunner, LocationRefreshJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "livemap")]
#[command(version)]
#[command(about = "Live map of where online players connect from")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Account database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        database_url: cli.database_url,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);

    info!(
        port = config.server.port,
        min_interval_secs = config.refresh.min_interval_secs,
        quota = config.lookup.quota,
        quota_window_secs = config.lookup.quota_window_secs,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::Services::build(&config, pool)?;

    let shutdown = CancellationToken::new();

    let job_handles = JobRunner::new()
        .with_location_refresh(
            LocationRefreshJob::new(services.refresh.clone())
                .with_tick_interval(config.refresh.tick_interval())
                .with_cancellation(shutdown.child_token()),
        )
        .start()
        .await;

    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                return;
            }
            info!("Shutdown signal received");
            shutdown.cancel();
        }
    });

    let served =
        server::start_web_server(&config.server, services.app_state(), shutdown.clone()).await;

    // A failed server still has to stop the refresh job.
    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    served?;
    info!("Livemap stopped");
    Ok(())
}
