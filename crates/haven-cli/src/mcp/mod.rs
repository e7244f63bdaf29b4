//! MCP server implementation for Haven
//!
//! Exposes listing search and booking quotes to AI assistants over the Model
//! Context Protocol. Tools return the same markdown the terminal renders.

use std::sync::Arc;

use anyhow::Result;
use haven_core::Marketplace;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{Id, McpResult, QuotePrice, QuoteStay, QuoteTour, SearchListings};

/// MCP server for Haven
#[derive(Clone)]
pub struct HavenMcpServer {
    marketplace: Arc<Marketplace>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HavenMcpServer {
    /// Create a new Haven MCP server
    pub fn new(marketplace: Marketplace) -> Self {
        Self {
            marketplace: Arc::new(marketplace),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.marketplace.clone())
    }

    #[tool(
        name = "search_listings",
        description = "Search the listing catalog. All filters are optional and combine with AND: free-text search over name, city, area and description; category (APARTMENT, HOTEL, RESORT, GUESTHOUSE, VILLA, COTTAGE, TOUR or all); exact city; min_price/max_price; min_rating; tags the listing must all carry; guests it must accommodate; featured and verified flags. Inactive listings are hidden unless include_inactive=true. Sort by rating (default), price-low, price-high, newest or featured; limit caps the result count."
    )]
    async fn search_listings(&self, params: Parameters<SearchListings>) -> McpResult {
        self.handlers().search_listings(params).await
    }

    #[tool(
        name = "show_listing",
        description = "Show every detail of one listing by ID: location, price and unit, rating, capacity or group size, tags, and tour inclusions."
    )]
    async fn show_listing(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_listing(params).await
    }

    #[tool(
        name = "quote_stay",
        description = "Quote an overnight stay at a property. Dates are YYYY-MM-DD or YYYY-MM-DDTHH:MM; partial days round up to a full night. Returns subtotal, platform fee and host revenue. Fails if the check-out is not after the check-in, the listing is not an active property, or guests exceed its capacity."
    )]
    async fn quote_stay(&self, params: Parameters<QuoteStay>) -> McpResult {
        self.handlers().quote_stay(params).await
    }

    #[tool(
        name = "quote_tour",
        description = "Quote a tour booking for a number of travelers, priced per person. Returns subtotal, platform fee and operator revenue. Fails if the listing is not an active tour or the group exceeds its maximum size."
    )]
    async fn quote_tour(&self, params: Parameters<QuoteTour>) -> McpResult {
        self.handlers().quote_tour(params).await
    }

    #[tool(
        name = "quote_price",
        description = "Break down an arbitrary price: base_price times multiplier, split into platform fee and counterpart revenue. fee_ratio (0-1) overrides the marketplace default of 0.10."
    )]
    async fn quote_price(&self, params: Parameters<QuotePrice>) -> McpResult {
        self.handlers().quote_price(params).await
    }

    #[tool(
        name = "catalog_stats",
        description = "Summarize the catalog: listing counts by status and category, featured and verified counts, and the mean rating of reviewed listings."
    )]
    async fn catalog_stats(&self) -> McpResult {
        self.handlers().catalog_stats().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HavenMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "haven".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(r#"Haven is a marketplace of bookable properties (apartments, hotels, resorts, guesthouses, villas, cottages) and guided tours.

## Workflow
1. Find candidates with `search_listings`, combining filters as needed
2. Inspect one with `show_listing`
3. Price it with `quote_stay` (properties, per night) or `quote_tour` (tours, per person)

## Pricing
Every quote splits the subtotal into a platform fee (10% unless fee_ratio overrides it) and the host or operator revenue. The two parts always add up to the subtotal exactly. Use `quote_price` for a breakdown without a listing.

Prices are in BDT."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: HavenMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Haven MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
