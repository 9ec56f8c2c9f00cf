//! Entry point for the random-player client.

use anyhow::Context;
use clap::Parser;
use tigerdragon_client::cli::PlayerCli;
use tigerdragon_client::{logging, run_with, ClientConfig};

/// Usage:
///   random-player ws://localhost:9002 [room1] [p1] [--reveal-discards] [--config PATH]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = PlayerCli::parse();
    logging::init(cli.debug);

    let config = ClientConfig::from_cli(&cli).context("loading client configuration")?;
    tracing::debug!(?config);

    let outcome = run_with(&config).await?;
    tracing::info!(actions = outcome.actions_sent, "client finished");
    Ok(())
}
