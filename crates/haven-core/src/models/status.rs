//! Enumerations for listing lifecycle status and categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    /// Listing is published and bookable
    #[default]
    Active,

    /// Listing is hidden by its host
    Inactive,

    /// Listing has not been published yet
    Draft,
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ListingStatus::Active),
            "inactive" => Ok(ListingStatus::Inactive),
            "draft" => Ok(ListingStatus::Draft),
            _ => Err(format!("Invalid listing status: {s}")),
        }
    }
}

impl ListingStatus {
    /// Catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "ACTIVE",
            ListingStatus::Inactive => "INACTIVE",
            ListingStatus::Draft => "DRAFT",
        }
    }
}

/// Kind of accommodation a property listing offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Apartment,
    Hotel,
    Resort,
    Guesthouse,
    Villa,
    Cottage,
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "hotel" => Ok(PropertyType::Hotel),
            "resort" => Ok(PropertyType::Resort),
            "guesthouse" => Ok(PropertyType::Guesthouse),
            "villa" => Ok(PropertyType::Villa),
            "cottage" => Ok(PropertyType::Cottage),
            _ => Err(format!("Invalid property type: {s}")),
        }
    }
}

/// The enumerated type tag a listing is filtered by.
///
/// Properties are categorized by their [`PropertyType`]; every tour shares
/// the single `Tour` category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingCategory {
    Apartment,
    Hotel,
    Resort,
    Guesthouse,
    Villa,
    Cottage,
    Tour,
}

impl ListingCategory {
    /// Catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Apartment => "APARTMENT",
            ListingCategory::Hotel => "HOTEL",
            ListingCategory::Resort => "RESORT",
            ListingCategory::Guesthouse => "GUESTHOUSE",
            ListingCategory::Villa => "VILLA",
            ListingCategory::Cottage => "COTTAGE",
            ListingCategory::Tour => "TOUR",
        }
    }
}

impl From<PropertyType> for ListingCategory {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Apartment => ListingCategory::Apartment,
            PropertyType::Hotel => ListingCategory::Hotel,
            PropertyType::Resort => ListingCategory::Resort,
            PropertyType::Guesthouse => ListingCategory::Guesthouse,
            PropertyType::Villa => ListingCategory::Villa,
            PropertyType::Cottage => ListingCategory::Cottage,
        }
    }
}

impl FromStr for ListingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tour" => Ok(ListingCategory::Tour),
            other => other
                .parse::<PropertyType>()
                .map(Into::into)
                .map_err(|_| format!("Invalid listing category: {s}")),
        }
    }
}
