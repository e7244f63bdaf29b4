//! Data models for listings, search criteria and booking quotes.
//!
//! This module contains the domain types the search and pricing engines
//! operate on. Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures and presentation apart.
//!
//! # Listings
//!
//! [`Listing`] is a closed tagged union over properties and tours: the
//! attributes both kinds share are plain fields, and [`ListingDetails`]
//! carries the kind-specific ones. Listings entering the library from a
//! catalog are checked with [`Listing::validate`].
//!
//! # Request-scoped values
//!
//! [`FilterCriteria`] and [`BookingQuote`] are built for a single request and
//! discarded afterwards; neither holds references into the catalog.
//!
//! # Examples
//!
//! ```rust
//! use haven_core::models::{
//!     Listing, ListingCategory, ListingDetails, ListingStatus, Location, PropertyDetails,
//!     PropertyType,
//! };
//! use jiff::Timestamp;
//! use rust_decimal::Decimal;
//!
//! let listing = Listing {
//!     id: "gulshan-loft".to_string(),
//!     name: "Luxury Apartment in Gulshan".to_string(),
//!     description: "Stunning city views".to_string(),
//!     location: Location {
//!         city: Some("Dhaka".to_string()),
//!         area: "Gulshan 2".to_string(),
//!         address: None,
//!     },
//!     price: Decimal::from(150),
//!     tags: vec!["wifi".to_string(), "pool".to_string()],
//!     images: vec![],
//!     rating: 4.8,
//!     review_count: 24,
//!     featured: true,
//!     verified: true,
//!     status: ListingStatus::Active,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//!     details: ListingDetails::Property(PropertyDetails {
//!         property_type: PropertyType::Apartment,
//!         capacity: 4,
//!         bedrooms: 2,
//!         beds: 2,
//!         bathrooms: 2,
//!         latitude: None,
//!         longitude: None,
//!     }),
//! };
//!
//! assert_eq!(listing.category(), ListingCategory::Apartment);
//! assert_eq!(listing.capacity(), 4);
//! assert!(listing.validate().is_ok());
//! ```

pub mod criteria;
pub mod listing;
pub mod quote;
pub mod stats;
pub mod status;


pub use criteria::{CategoryFilter, FilterCriteria, PriceRange};
pub use listing::{
    Listing, ListingDetails, Location, PropertyDetails, TourDetails, MAX_RATING,
};
pub use quote::{money_from_f64, BookingQuote, FeeRatio, PriceUnit, CURRENCY_SCALE};
pub use stats::CatalogStats;
pub use status::{ListingCategory, ListingStatus, PropertyType};
