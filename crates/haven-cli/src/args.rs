use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogCommands, ListingCommands, QuoteCommands};

/// Search marketplace listings and quote bookings
///
/// Haven works over a catalog of bookable properties and tours. It filters
/// and sorts listings, quotes stays and tours with the platform fee split
/// out, and can run as an MCP (Model Context Protocol) server so AI
/// assistants can do the same.
#[derive(Parser)]
#[command(version, about, name = "haven")]
pub struct Args {
    /// Path to the catalog JSON file. Defaults to
    /// $XDG_DATA_HOME/haven/catalog.json
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Platform fee ratio (0-1) applied to quotes. Defaults to 0.10;
    /// `--fee-ratio` on a quote overrides it for that quote
    #[arg(long, global = true)]
    pub platform_fee: Option<f64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Haven CLI
///
/// Without a command, Haven lists the active catalog ordered by rating.
#[derive(Subcommand)]
pub enum Commands {
    /// Search and inspect listings
    #[command(alias = "l")]
    Listing {
        #[command(subcommand)]
        command: ListingCommands,
    },
    /// Quote bookings and prices
    #[command(alias = "q")]
    Quote {
        #[command(subcommand)]
        command: QuoteCommands,
    },
    /// Import, validate and summarize catalogs
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Start the MCP server
    Serve,
}
