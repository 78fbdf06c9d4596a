//! Intents server binary

use clap::Parser;
use intents_api::IntentsServer;
use intents_core::{telemetry::init_tracing, AppConfig};
use std::path::PathBuf;

/// REST service managing intents
#[derive(Debug, Parser)]
#[command(name = "intents-server", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the configuration
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging)?;
    tracing::info!(
        application = %config.application_name.0,
        backend = ?config.storage.backend,
        "Intents server configured"
    );

    let server = IntentsServer::new(&config)?;
    server.start().await?;

    Ok(())
}
