//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Wiring the terminal surfaces into the orchestrator
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_status::app::{Orchestrator, TerminalMap, TerminalUi};
use ip_status::config::IPINFO_TOKEN_ENV;
use ip_status::initialization::{init_client, init_logger_with};
use ip_status::{Config, LookupClient, TileLayerChoice};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting IPINFO_TOKEN in .env without exporting it manually
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("ip_status error: {e}");
        process::exit(2);
    }

    let token = config
        .token
        .clone()
        .or_else(|| std::env::var(IPINFO_TOKEN_ENV).ok());
    if token.is_some() {
        log::debug!("Using API token from CLI flag or {}", IPINFO_TOKEN_ENV);
    }

    let client = init_client(&config)
        .await
        .context("Failed to initialize HTTP client")?;
    let lookup = LookupClient::new(client, config.api_base.clone(), token);

    let mut orchestrator = Orchestrator::new(TerminalUi::new(), TerminalMap::new(), lookup);

    // No IP argument behaves like the page-load trigger: look up our own IP.
    let rendered = match &config.ip {
        Some(ip) => orchestrator.submit(ip).await,
        None => orchestrator.use_my_ip().await,
    };

    if config.tile_layer != TileLayerChoice::Street {
        orchestrator.switch_layer(config.tile_layer);
    }

    if !rendered {
        // The orchestrator already surfaced the error inline.
        process::exit(1);
    }
    Ok(())
}
