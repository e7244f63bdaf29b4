//! Listing model: the bookable property or tour record.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ListingCategory, ListingStatus, PriceUnit, PropertyType};
use crate::error::{HavenError, Result};

/// Highest aggregate rating a listing can carry.
pub const MAX_RATING: f64 = 5.0;

/// A bookable property or tour.
///
/// Fields shared by both kinds live on the struct itself; kind-specific
/// attributes are carried by [`ListingDetails`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Unique identifier within a catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Where the listing is
    pub location: Location,

    /// Base price: per night for properties, per person for tours
    pub price: Decimal,

    /// Amenities (properties) or highlights (tours), in catalog order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Image references, in display order
    #[serde(default)]
    pub images: Vec<String>,

    /// Mean review rating in [0, 5]
    #[serde(default)]
    pub rating: f64,

    /// Number of reviews behind `rating`
    #[serde(default)]
    pub review_count: u32,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub status: ListingStatus,

    /// Timestamp when the listing was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the listing was last modified (UTC)
    pub updated_at: Timestamp,

    /// Kind-specific attributes
    pub details: ListingDetails,
}

/// Location fields of a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    /// City name; tours usually span a region and carry none
    #[serde(default)]
    pub city: Option<String>,

    /// Named area or region (e.g. "Gulshan 2", "Sundarbans")
    pub area: String,

    /// Street address
    #[serde(default)]
    pub address: Option<String>,
}

/// Kind-specific listing attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingDetails {
    Property(PropertyDetails),
    Tour(TourDetails),
}

/// Attributes of an overnight stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDetails {
    #[serde(rename = "type")]
    pub property_type: PropertyType,

    /// Maximum number of guests
    pub capacity: u32,

    #[serde(default)]
    pub bedrooms: u32,

    #[serde(default)]
    pub beds: u32,

    #[serde(default)]
    pub bathrooms: u32,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Attributes of a guided tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourDetails {
    /// Human-readable duration, e.g. "3 days, 2 nights"
    pub duration: String,

    /// Maximum number of travelers per booking
    pub max_group_size: u32,

    #[serde(default)]
    pub included: Vec<String>,

    #[serde(default)]
    pub excluded: Vec<String>,
}

impl Listing {
    /// The enumerated type tag used by category filtering.
    pub fn category(&self) -> ListingCategory {
        match &self.details {
            ListingDetails::Property(details) => details.property_type.into(),
            ListingDetails::Tour(_) => ListingCategory::Tour,
        }
    }

    /// Guest capacity for properties, group-size cap for tours.
    pub fn capacity(&self) -> u32 {
        match &self.details {
            ListingDetails::Property(details) => details.capacity,
            ListingDetails::Tour(details) => details.max_group_size,
        }
    }

    /// What one unit of `price` buys.
    pub fn price_unit(&self) -> PriceUnit {
        match &self.details {
            ListingDetails::Property(_) => PriceUnit::Night,
            ListingDetails::Tour(_) => PriceUnit::Person,
        }
    }

    /// Whether the listing can currently be booked.
    pub fn is_bookable(&self) -> bool {
        self.status == ListingStatus::Active
    }

    pub fn is_tour(&self) -> bool {
        matches!(self.details, ListingDetails::Tour(_))
    }

    /// Validate the invariants a listing must satisfy when it enters the
    /// library from an external source.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::InvalidInput` naming the listing and the field
    /// that violates its invariant.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(HavenError::invalid_input("id").with_reason("Listing ID must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(HavenError::invalid_input("name")
                .with_reason(format!("Listing '{}' has an empty name", self.id)));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(HavenError::invalid_input("rating").with_reason(format!(
                "Listing '{}' has rating {} outside [0, 5]",
                self.id, self.rating
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(HavenError::invalid_input("price").with_reason(format!(
                "Listing '{}' has negative price {}",
                self.id, self.price
            )));
        }
        if self.capacity() == 0 {
            return Err(HavenError::invalid_input("capacity")
                .with_reason(format!("Listing '{}' has zero capacity", self.id)));
        }
        Ok(())
    }
}
