//! High-level marketplace API for searching listings and quoting bookings.
//!
//! [`Marketplace`] is the entry point every interface goes through. It owns
//! the configuration (catalog location, platform fee) and nothing else: each
//! call reads a fresh catalog snapshot, runs the pure engines over it and
//! returns display-ready results.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Engines      │    │    Catalog      │
//! │ (listing_,      │───▶│ (search,        │◀───│  (JSON file,    │
//! │  quote_handlers)│    │  pricing)       │    │   catalog_ops)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface       Pure Functions        Listing Snapshot
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Marketplace`] instances with configuration
//! - [`listing_handlers`]: Search and show operations
//! - [`quote_handlers`]: Stay, tour and ad-hoc price quotes
//! - [`catalog_ops`]: Catalog loading, import and statistics
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use haven_core::{
//!     params::{QuoteStay, SearchListings},
//!     MarketplaceBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let marketplace = MarketplaceBuilder::new()
//!     .with_catalog_path(Some("/srv/haven/catalog.json"))
//!     .build()
//!     .await?;
//!
//! let results = marketplace
//!     .search_listings(&SearchListings {
//!         city: Some("Dhaka".to_string()),
//!         sort: Some("price-low".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let Some(listing) = results.get(0) {
//!     let quote = marketplace
//!         .quote_stay(&QuoteStay {
//!             listing_id: listing.id.clone(),
//!             check_in: "2024-03-15".to_string(),
//!             check_out: "2024-03-18".to_string(),
//!             guests: 2,
//!             fee_ratio: None,
//!         })
//!         .await?;
//!     println!("{quote}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod catalog_ops;
pub mod listing_handlers;
pub mod quote_handlers;


pub use builder::MarketplaceBuilder;

use crate::{error::Result, models::FeeRatio};

/// Main marketplace interface.
#[derive(Debug, Clone)]
pub struct Marketplace {
    pub(crate) catalog_path: PathBuf,
    pub(crate) fee_ratio: FeeRatio,
}

impl Marketplace {
    /// Creates a new marketplace reading the catalog at `catalog_path`.
    pub(crate) fn new(catalog_path: PathBuf, fee_ratio: FeeRatio) -> Self {
        Self {
            catalog_path,
            fee_ratio,
        }
    }

    /// Location of the active catalog file.
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// The platform fee applied when a quote does not override it.
    pub fn fee_ratio(&self) -> FeeRatio {
        self.fee_ratio
    }

    /// The per-call fee override if one was given, else the configured ratio.
    pub(crate) fn resolve_fee_ratio(&self, fee_override: Option<f64>) -> Result<FeeRatio> {
        fee_override.map_or(Ok(self.fee_ratio), FeeRatio::from_f64)
    }
}
