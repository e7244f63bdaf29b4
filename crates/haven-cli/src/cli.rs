//! Command-line argument wrappers and command handlers
//!
//! Each `*Args` struct carries the clap-specific parsing for one command and
//! converts into the matching core parameter type, so core types stay free
//! of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Marketplace
//! ```
//!
//! [`Cli`] runs the commands against a [`Marketplace`] and renders the
//! markdown output through the [`TerminalRenderer`].

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use haven_core::{
    display::{OperationStatus, QuoteResult},
    params::*,
    Marketplace,
};

use crate::{mcp::handlers::search_output, renderer::TerminalRenderer};

// ============================================================================
// Listing Arguments
// ============================================================================

/// Search the catalog
///
/// Every filter is optional and they combine with AND. Inactive and draft
/// listings are hidden unless --include-inactive is given.
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Case-insensitive text matched against name, city, area and description")]
    pub search: Option<String>,
    #[arg(
        long,
        help = "Category: apartment, hotel, resort, guesthouse, villa, cottage, tour or all"
    )]
    pub category: Option<String>,
    #[arg(long, help = "Exact city name")]
    pub city: Option<String>,
    #[arg(long, help = "Lowest acceptable base price")]
    pub min_price: Option<f64>,
    #[arg(long, help = "Highest acceptable base price")]
    pub max_price: Option<f64>,
    #[arg(long, help = "Minimum rating (0-5)")]
    pub min_rating: Option<f64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated tags the listing must all carry"
    )]
    pub tags: Vec<String>,
    #[arg(long, help = "Number of guests the listing must accommodate")]
    pub guests: Option<u32>,
    #[arg(long, help = "Only featured listings")]
    pub featured: bool,
    #[arg(long, help = "Only verified listings")]
    pub verified: bool,
    #[arg(long, help = "Include inactive and draft listings")]
    pub include_inactive: bool,
    #[arg(
        short,
        long,
        help = "Sort by rating (default), price-low, price-high, newest or featured"
    )]
    pub sort: Option<String>,
    #[arg(short = 'n', long, help = "Maximum number of results")]
    pub limit: Option<usize>,
}

impl From<SearchArgs> for SearchListings {
    fn from(val: SearchArgs) -> Self {
        SearchListings {
            search: val.search,
            category: val.category,
            city: val.city,
            min_price: val.min_price,
            max_price: val.max_price,
            min_rating: val.min_rating,
            tags: val.tags,
            guests: val.guests,
            featured: val.featured,
            verified: val.verified,
            include_inactive: val.include_inactive,
            sort: val.sort,
            limit: val.limit,
        }
    }
}

/// Show details of a specific listing
#[derive(Args)]
pub struct ShowListingArgs {
    #[arg(help = "ID of the listing to show")]
    pub id: String,
}

impl From<ShowListingArgs> for Id {
    fn from(val: ShowListingArgs) -> Self {
        Id { id: val.id }
    }
}

/// Listing commands
#[derive(Subcommand)]
pub enum ListingCommands {
    /// Search listings with filters and a sort order
    #[command(aliases = ["s", "ls"])]
    Search(SearchArgs),
    /// Show details of a specific listing
    #[command(alias = "sh")]
    Show(ShowListingArgs),
}

// ============================================================================
// Quote Arguments
// ============================================================================

/// Quote an overnight stay at a property
#[derive(Args)]
pub struct QuoteStayArgs {
    #[arg(help = "ID of the property listing")]
    pub id: String,
    #[arg(help = "Check-in date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
    pub check_in: String,
    #[arg(help = "Check-out date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
    pub check_out: String,
    #[arg(short, long, default_value_t = 1, help = "Number of guests")]
    pub guests: u32,
    #[arg(long, help = "Platform fee ratio (0-1) for this quote only")]
    pub fee_ratio: Option<f64>,
}

impl From<QuoteStayArgs> for QuoteStay {
    fn from(val: QuoteStayArgs) -> Self {
        QuoteStay {
            listing_id: val.id,
            check_in: val.check_in,
            check_out: val.check_out,
            guests: val.guests,
            fee_ratio: val.fee_ratio,
        }
    }
}

/// Quote a tour for a number of travelers
#[derive(Args)]
pub struct QuoteTourArgs {
    #[arg(help = "ID of the tour listing")]
    pub id: String,
    #[arg(help = "Number of travelers")]
    pub travelers: u32,
    #[arg(short, long, help = "Travel date (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(long, help = "Platform fee ratio (0-1) for this quote only")]
    pub fee_ratio: Option<f64>,
}

impl From<QuoteTourArgs> for QuoteTour {
    fn from(val: QuoteTourArgs) -> Self {
        QuoteTour {
            listing_id: val.id,
            travelers: val.travelers,
            travel_date: val.date,
            fee_ratio: val.fee_ratio,
        }
    }
}

/// Break down an arbitrary price
#[derive(Args)]
pub struct QuotePriceArgs {
    #[arg(help = "Price of one unit")]
    pub base_price: f64,
    #[arg(help = "Number of units (nights or travelers)")]
    pub multiplier: u32,
    #[arg(long, help = "Platform fee ratio (0-1) for this quote only")]
    pub fee_ratio: Option<f64>,
}

impl From<QuotePriceArgs> for QuotePrice {
    fn from(val: QuotePriceArgs) -> Self {
        QuotePrice {
            base_price: val.base_price,
            multiplier: val.multiplier,
            fee_ratio: val.fee_ratio,
        }
    }
}

/// Quote commands
#[derive(Subcommand)]
pub enum QuoteCommands {
    /// Quote an overnight stay at a property
    #[command(alias = "s")]
    Stay(QuoteStayArgs),
    /// Quote a tour booking
    #[command(alias = "t")]
    Tour(QuoteTourArgs),
    /// Break down a price without a listing
    #[command(alias = "p")]
    Price(QuotePriceArgs),
}

// ============================================================================
// Catalog Arguments
// ============================================================================

/// A catalog file to read
#[derive(Args)]
pub struct CatalogFileArgs {
    #[arg(help = "Path of the catalog JSON file")]
    pub path: String,
}

impl From<CatalogFileArgs> for ImportCatalog {
    fn from(val: CatalogFileArgs) -> Self {
        ImportCatalog { path: val.path }
    }
}

/// Catalog commands
#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Replace the active catalog with a catalog file
    #[command(alias = "i")]
    Import(CatalogFileArgs),
    /// Check a catalog file without installing it
    #[command(alias = "v")]
    Validate(CatalogFileArgs),
    /// Summarize the active catalog
    #[command(alias = "st")]
    Stats,
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a marketplace.
pub struct Cli {
    marketplace: Marketplace,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(marketplace: Marketplace, renderer: TerminalRenderer) -> Self {
        Self {
            marketplace,
            renderer,
        }
    }

    pub async fn handle_listing_command(&self, command: ListingCommands) -> Result<()> {
        match command {
            ListingCommands::Search(args) => self.search_listings(&args.into()).await,
            ListingCommands::Show(args) => self.show_listing(&args.into()).await,
        }
    }

    pub async fn handle_quote_command(&self, command: QuoteCommands) -> Result<()> {
        match command {
            QuoteCommands::Stay(args) => {
                let result = self
                    .marketplace
                    .quote_stay(&args.into())
                    .await
                    .context("Failed to quote stay")?;
                self.render_quote(&result)
            }
            QuoteCommands::Tour(args) => {
                let result = self
                    .marketplace
                    .quote_tour(&args.into())
                    .await
                    .context("Failed to quote tour")?;
                self.render_quote(&result)
            }
            QuoteCommands::Price(args) => {
                let quote = self
                    .marketplace
                    .quote_price(&args.into())
                    .await
                    .context("Failed to calculate price")?;
                self.renderer
                    .render(&format!("# Price breakdown\n\n{quote}"))
            }
        }
    }

    pub async fn handle_catalog_command(&self, command: CatalogCommands) -> Result<()> {
        match command {
            CatalogCommands::Import(args) => {
                let params = ImportCatalog::from(args);
                let count = self
                    .marketplace
                    .import_catalog(&params)
                    .await
                    .context("Failed to import catalog")?;
                let status = OperationStatus::success(format!(
                    "Imported {count} listings from {} into {}",
                    params.path,
                    self.marketplace.catalog_path().display()
                ));
                self.renderer.render(&status.to_string())
            }
            CatalogCommands::Validate(args) => {
                let params = ImportCatalog::from(args);
                let count = self
                    .marketplace
                    .validate_catalog(&params)
                    .await
                    .context("Catalog is invalid")?;
                let status = OperationStatus::success(format!(
                    "{} is a valid catalog with {count} listings",
                    params.path
                ));
                self.renderer.render(&status.to_string())
            }
            CatalogCommands::Stats => {
                let stats = self
                    .marketplace
                    .catalog_stats()
                    .await
                    .context("Failed to read catalog")?;
                self.renderer.render(&stats.to_string())
            }
        }
    }

    pub async fn search_listings(&self, params: &SearchListings) -> Result<()> {
        let listings = self
            .marketplace
            .search_listings(params)
            .await
            .context("Failed to search listings")?;
        self.renderer.render(&search_output(&listings))
    }

    async fn show_listing(&self, params: &Id) -> Result<()> {
        let listing = self
            .marketplace
            .show_listing(params)
            .await
            .context("Failed to get listing")?
            .ok_or_else(|| anyhow!("Listing with ID {} not found", params.id))?;
        self.renderer.render(&listing.to_string())
    }

    fn render_quote(&self, result: &QuoteResult) -> Result<()> {
        self.renderer.render(&result.to_string())
    }
}
