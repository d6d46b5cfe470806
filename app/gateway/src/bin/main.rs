//! Scout gateway binary entry point.
//!
//! Loads TOML configuration (or defaults plus the environment), builds the
//! search agent and serves it with graceful shutdown on ctrl-c.

use anyhow::Result;
use clap::Parser;
use scout_gateway::{Config, config::CONFIG_FILE, serve};
use std::path::PathBuf;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Serve the Scout search agent over HTTP.
#[derive(Debug, Parser)]
#[command(name = "scout-gateway", version)]
struct Cli {
    /// Configuration file; defaults and the environment are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding `server.bind`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => {
            let config = Config::load(&path)?;
            tracing::info!("loaded configuration from {}", path.display());
            config
        }
        None if std::path::Path::new(CONFIG_FILE).exists() => {
            let config = Config::load(CONFIG_FILE.as_ref())?;
            tracing::info!("loaded configuration from {CONFIG_FILE}");
            config
        }
        None => {
            tracing::info!("no configuration file, using defaults");
            Config::from_env()?
        }
    };

    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());
    let handle = serve(&config, &bind).await?;

    signal::ctrl_c().await?;
    tracing::info!("received ctrl-c");
    handle.shutdown().await?;
    tracing::info!("gateway shut down");
    Ok(())
}
