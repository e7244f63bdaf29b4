//! Parameter structures for marketplace operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP tools is enabled only under the
//! `schema` feature.
//!
//! Values arrive here raw: prices as floats, dates as strings, categories and
//! sort keys as free text. Validation happens when they are converted into
//! domain types ([`crate::models::FilterCriteria`], [`crate::search::SortKey`],
//! the pricing functions), never here.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a listing ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the listing to operate on
    pub id: String,
}

/// Parameters for searching the catalog.
///
/// Every field is optional; an empty search returns all active listings
/// ordered by rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchListings {
    /// Case-insensitive text matched against name, city, area and description
    #[serde(default)]
    pub search: Option<String>,
    /// Category: APARTMENT, HOTEL, RESORT, GUESTHOUSE, VILLA, COTTAGE, TOUR or
    /// "all"
    #[serde(default)]
    pub category: Option<String>,
    /// Exact city name
    #[serde(default)]
    pub city: Option<String>,
    /// Lowest acceptable base price
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Highest acceptable base price
    #[serde(default)]
    pub max_price: Option<f64>,
    /// Minimum rating (0-5)
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Tags (amenities or highlights) the listing must all carry
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of guests the listing must accommodate
    #[serde(default)]
    pub guests: Option<u32>,
    /// Only featured listings
    #[serde(default)]
    pub featured: bool,
    /// Only verified listings
    #[serde(default)]
    pub verified: bool,
    /// Include inactive and draft listings
    #[serde(default)]
    pub include_inactive: bool,
    /// Sort key: rating (default), price-low, price-high, newest, featured
    #[serde(default)]
    pub sort: Option<String>,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parameters for quoting an overnight stay at a property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct QuoteStay {
    /// ID of the property listing
    pub listing_id: String,
    /// Check-in date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    pub check_in: String,
    /// Check-out date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    pub check_out: String,
    /// Number of guests
    #[serde(default = "default_head_count")]
    pub guests: u32,
    /// Platform fee ratio override (0-1); defaults to the marketplace ratio
    #[serde(default)]
    pub fee_ratio: Option<f64>,
}

/// Parameters for quoting a tour booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct QuoteTour {
    /// ID of the tour listing
    pub listing_id: String,
    /// Number of travelers
    pub travelers: u32,
    /// Travel date (YYYY-MM-DD)
    #[serde(default)]
    pub travel_date: Option<String>,
    /// Platform fee ratio override (0-1); defaults to the marketplace ratio
    #[serde(default)]
    pub fee_ratio: Option<f64>,
}

/// Parameters for an ad-hoc price breakdown without a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct QuotePrice {
    /// Price of one unit
    pub base_price: f64,
    /// Number of units (nights or travelers)
    pub multiplier: u32,
    /// Platform fee ratio override (0-1); defaults to the marketplace ratio
    #[serde(default)]
    pub fee_ratio: Option<f64>,
}

/// Parameters for installing a catalog file as the active catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportCatalog {
    /// Path of the catalog JSON file to import
    pub path: String,
}

fn default_head_count() -> u32 {
    1
}
