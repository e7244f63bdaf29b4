//! Core library for the Haven listing marketplace.
//!
//! This crate provides listing search and booking price calculation for a
//! property and tour marketplace: a filter engine, a sort engine and a price
//! calculator, plus the catalog loading and display formatting around them.
//!
//! # Architecture
//!
//! - **Engines** ([`search`], [`pricing`]): Pure, synchronous functions over
//!   borrowed listings. They hold no state and never perform I/O.
//! - **Domain Models** ([`models`]): Listings, filter criteria and booking
//!   quotes. Listings are validated once, when a [`catalog`] is parsed.
//! - **Marketplace** ([`marketplace`]): The async facade interfaces call. It
//!   reads the catalog, converts raw [`params`] into domain values and runs
//!   the engines.
//! - **Display Wrappers** ([`display`]): Markdown formatting shared by the
//!   terminal and MCP interfaces.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use haven_core::{
//!     params::{QuoteTour, SearchListings},
//!     MarketplaceBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let marketplace = MarketplaceBuilder::new()
//!     .with_catalog_path(Some("catalog.json"))
//!     .build()
//!     .await?;
//!
//! // Tours in the Sundarbans, best rated first
//! let results = marketplace
//!     .search_listings(&SearchListings {
//!         search: Some("sundarbans".to_string()),
//!         category: Some("tour".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{results}");
//!
//! // What two travelers would pay
//! if let Some(tour) = results.get(0) {
//!     let quote = marketplace
//!         .quote_tour(&QuoteTour {
//!             listing_id: tour.id.clone(),
//!             travelers: 2,
//!             travel_date: None,
//!             fee_ratio: None,
//!         })
//!         .await?;
//!     println!("{quote}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The engines can also be used directly on any listing collection:
//!
//! ```rust
//! use haven_core::{
//!     models::{FeeRatio, FilterCriteria, Listing},
//!     pricing,
//!     search::{self, SortKey},
//! };
//! use rust_decimal::Decimal;
//!
//! fn cheapest(listings: &[Listing]) -> Option<&Listing> {
//!     search::run(listings, &FilterCriteria::default(), &SortKey::PriceLow, Some(1))
//!         .into_iter()
//!         .next()
//! }
//!
//! let quote = pricing::quote(Decimal::from(150), 3, FeeRatio::platform_default())?;
//! assert_eq!(quote.fee + quote.counterpart_revenue, quote.subtotal);
//! # Ok::<(), haven_core::HavenError>(())
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod marketplace;
pub mod models;
pub mod params;
pub mod pricing;
pub mod search;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{Listings, LocalDateTime, Money, OperationStatus, QuotePeriod, QuoteResult};
pub use error::{HavenError, Result};
pub use marketplace::{Marketplace, MarketplaceBuilder};
pub use models::{
    BookingQuote, CatalogStats, CategoryFilter, FeeRatio, FilterCriteria, Listing,
    ListingCategory, ListingDetails, ListingStatus, Location, PriceRange, PriceUnit,
    PropertyDetails, PropertyType, TourDetails,
};
pub use params::{Id, ImportCatalog, QuotePrice, QuoteStay, QuoteTour, SearchListings};
pub use search::SortKey;
