//! Display formatting functions and result types.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get newtype wrappers so each interface formats
//! them identically.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Listing, Quote)│───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All formatters produce markdown. Amounts go through [`Money`], which shows
//! them in the marketplace currency.
//!
//! ## Module Organization
//!
//! - [`collections`]: Search result collections ([`Listings`])
//! - [`results`]: Quote outcomes ([`QuoteResult`])
//! - [`status`]: Confirmation messages ([`OperationStatus`])
//! - [`datetime`]: Timestamp and booking date formatting
//! - [`money`]: Currency formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use haven_core::{display::Money, models::FeeRatio, pricing::quote};
//! use rust_decimal::Decimal;
//!
//! let quote = quote(Decimal::from(150), 3, FeeRatio::platform_default())?;
//! let output = quote.to_string();
//! assert!(output.contains("Platform fee (10%): BDT 45"));
//! assert_eq!(Money(quote.counterpart_revenue).to_string(), "BDT 405");
//! # Ok::<(), haven_core::HavenError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod money;
pub mod results;
pub mod status;

pub use collections::Listings;
pub use datetime::{LocalDateTime, StayDate};
pub use money::{Money, CURRENCY};
pub use results::{QuotePeriod, QuoteResult};
pub use status::OperationStatus;
