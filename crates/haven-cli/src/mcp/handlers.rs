//! MCP tool handlers implementation

use std::sync::Arc;

use haven_core::{display::Listings, params as core, Marketplace};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types stay free of MCP concerns. This transparent wrapper
// adds the Deserialize and JsonSchema impls rmcp needs and passes both
// straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type SearchListings = McpParams<core::SearchListings>;
pub type QuoteStay = McpParams<core::QuoteStay>;
pub type QuoteTour = McpParams<core::QuoteTour>;
pub type QuotePrice = McpParams<core::QuotePrice>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    marketplace: Arc<Marketplace>,
}

impl McpHandlers {
    pub fn new(marketplace: Arc<Marketplace>) -> Self {
        Self { marketplace }
    }

    pub async fn search_listings(
        &self,
        Parameters(params): Parameters<SearchListings>,
    ) -> McpResult {
        debug!("search_listings: {:?}", params);

        let listings = self
            .marketplace
            .search_listings(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to search listings", &e))?;

        text_result(search_output(&listings))
    }

    pub async fn show_listing(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_listing: {:?}", params);

        let listing = self
            .marketplace
            .show_listing(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get listing", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!("Listing with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;

        text_result(listing.to_string())
    }

    pub async fn quote_stay(&self, Parameters(params): Parameters<QuoteStay>) -> McpResult {
        debug!("quote_stay: {:?}", params);

        let result = self
            .marketplace
            .quote_stay(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to quote stay", &e))?;

        text_result(result.to_string())
    }

    pub async fn quote_tour(&self, Parameters(params): Parameters<QuoteTour>) -> McpResult {
        debug!("quote_tour: {:?}", params);

        let result = self
            .marketplace
            .quote_tour(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to quote tour", &e))?;

        text_result(result.to_string())
    }

    pub async fn quote_price(&self, Parameters(params): Parameters<QuotePrice>) -> McpResult {
        debug!("quote_price: {:?}", params);

        let quote = self
            .marketplace
            .quote_price(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to calculate price", &e))?;

        text_result(format!("# Price breakdown\n\n{quote}"))
    }

    pub async fn catalog_stats(&self) -> McpResult {
        debug!("catalog_stats");

        let stats = self
            .marketplace
            .catalog_stats()
            .await
            .map_err(|e| to_mcp_error("Failed to read catalog", &e))?;

        text_result(stats.to_string())
    }
}

/// Markdown shared by the search tool and the `listing search` command.
pub fn search_output(listings: &Listings) -> String {
    if listings.is_empty() {
        "# No listings found\n".to_string()
    } else {
        format!("# Listings ({})\n\n{listings}", listings.len())
    }
}
