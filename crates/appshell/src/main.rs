//! appshell demo - entry point
//!
//! Exercises the full application core: loads configuration, bootstraps the
//! context, performs a log-on/log-off round, bumps a persisted run counter,
//! and shuts down cleanly.

use appshell::ports::{SessionService, SettingsServiceExt};
use appshell::{bootstrap, init_logging, ConfigLoader};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Command line interface for the appshell demo
#[derive(Parser, Debug)]
#[command(name = "appshell")]
#[command(about = "Application core demo - settings, session, and HTTP wiring")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Data directory override for settings files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(dir) = cli.data_dir {
        config.app.data_dir = Some(dir);
    }
    init_logging(config.logging.clone())?;

    let context = bootstrap(config)?;
    context.startup().await;

    let session = context.session();
    session.perform_log_on("demo", "demo").await?;
    info!(logged_on = session.is_logged_on(), "session established");

    let settings = context.settings();
    let runs = settings.get_or::<i64>("run_count", 0) + 1;
    settings.set_as("run_count", runs);
    settings.set_as("last_run", Uuid::new_v4());
    info!(runs, "updated run counter");

    session.perform_log_off().await?;
    context.shutdown().await;
    Ok(())
}
