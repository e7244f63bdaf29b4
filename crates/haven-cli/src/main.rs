//! Haven CLI Application
//!
//! Command-line interface for searching marketplace listings and quoting
//! bookings.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use haven_core::{params::SearchListings, FeeRatio, MarketplaceBuilder};
use log::info;
use mcp::{run_stdio_server, HavenMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        platform_fee,
        no_color,
        command,
    } = Args::parse();

    let mut builder = MarketplaceBuilder::new().with_catalog_path(catalog_file);
    if let Some(ratio) = platform_fee {
        let ratio = FeeRatio::from_f64(ratio).context("Invalid --platform-fee")?;
        builder = builder.with_fee_ratio(ratio);
    }
    let marketplace = builder
        .build()
        .await
        .context("Failed to initialize marketplace")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Haven started");

    match command {
        Some(Listing { command }) => {
            Cli::new(marketplace, renderer)
                .handle_listing_command(command)
                .await
        }
        Some(Quote { command }) => {
            Cli::new(marketplace, renderer)
                .handle_quote_command(command)
                .await
        }
        Some(Catalog { command }) => {
            Cli::new(marketplace, renderer)
                .handle_catalog_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Haven MCP server");
            run_stdio_server(HavenMcpServer::new(marketplace))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(marketplace, renderer)
                .search_listings(&SearchListings::default())
                .await
        }
    }
}
