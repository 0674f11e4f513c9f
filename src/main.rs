use ainews_bot::config::{Config, Deployment};
use ainews_bot::pipeline::Publisher;
use ainews_bot::server;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Post a random AI headline with a random local image to Bluesky.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the TOML config; built-in defaults are used if it does not exist
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Publish once and exit instead of waiting for HTTP triggers
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ainews_bot=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load_or_default(&args.config)?;

    // Only development checkouts read credentials from .env
    Config::load_env_file(Deployment::from_env())?;
    let credentials = Config::credentials()?;

    let publisher = Publisher::new(&config, credentials)?;

    if args.once {
        if let Err(e) = publisher.run().await {
            tracing::error!("run failed: {:#}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    server::serve(Arc::new(publisher), config.port()?).await
}
