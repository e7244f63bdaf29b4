//! Filter criteria for narrowing a listing collection.

use rust_decimal::Decimal;

use super::{money_from_f64, ListingCategory, MAX_RATING};
use crate::{error::HavenError, params::SearchListings};

/// Category constraint of a search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No constraint ("all" or absent)
    #[default]
    Any,

    /// Exact match against a known category
    Is(ListingCategory),

    /// A category value the marketplace does not know; matches nothing
    Unrecognized(String),
}

impl CategoryFilter {
    /// Interpret a raw category value. Never fails: unknown values become
    /// [`CategoryFilter::Unrecognized`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use haven_core::models::{CategoryFilter, ListingCategory};
    ///
    /// assert_eq!(CategoryFilter::parse(None), CategoryFilter::Any);
    /// assert_eq!(CategoryFilter::parse(Some("ALL")), CategoryFilter::Any);
    /// assert_eq!(
    ///     CategoryFilter::parse(Some("resort")),
    ///     CategoryFilter::Is(ListingCategory::Resort)
    /// );
    /// assert!(matches!(
    ///     CategoryFilter::parse(Some("castle")),
    ///     CategoryFilter::Unrecognized(_)
    /// ));
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => CategoryFilter::Any,
            Some(value) if value.eq_ignore_ascii_case("all") => CategoryFilter::Any,
            Some(value) => value
                .parse::<ListingCategory>()
                .map(CategoryFilter::Is)
                .unwrap_or_else(|_| CategoryFilter::Unrecognized(value.to_string())),
        }
    }

    pub fn matches(&self, category: ListingCategory) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Is(expected) => *expected == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

/// Inclusive base-price bounds; `[0, +inf)` by default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl PriceRange {
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// The set of predicates a client applies to narrow a listing collection.
///
/// Every field defaults to "no constraint", so `FilterCriteria::default()`
/// passes every listing through unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, city, area and
    /// description
    pub search: Option<String>,

    pub category: CategoryFilter,

    /// Exact (case-insensitive) city
    pub city: Option<String>,

    pub price: PriceRange,

    /// Minimum aggregate rating
    pub min_rating: f64,

    /// Tags the listing must carry, all of them
    pub tags: Vec<String>,

    /// Minimum guest capacity / group size
    pub min_guests: Option<u32>,

    pub featured_only: bool,

    pub verified_only: bool,

    /// Only pass listings whose status is `Active`
    pub active_only: bool,
}

impl TryFrom<&SearchListings> for FilterCriteria {
    type Error = HavenError;

    /// Validate raw search parameters into filter criteria.
    ///
    /// Public searches only see active listings unless `include_inactive` is
    /// set.
    ///
    /// # Errors
    ///
    /// * `HavenError::InvalidInput` - negative or non-finite prices, a
    ///   minimum price above the maximum, a rating threshold outside [0, 5],
    ///   or a zero guest count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use haven_core::{models::FilterCriteria, params::SearchListings};
    ///
    /// let params = SearchListings {
    ///     search: Some("  Dhaka ".to_string()),
    ///     min_price: Some(50.0),
    ///     max_price: Some(200.0),
    ///     ..Default::default()
    /// };
    /// let criteria = FilterCriteria::try_from(&params)?;
    /// assert_eq!(criteria.search.as_deref(), Some("Dhaka"));
    /// assert!(criteria.active_only);
    ///
    /// let inverted = SearchListings {
    ///     min_price: Some(300.0),
    ///     max_price: Some(100.0),
    ///     ..Default::default()
    /// };
    /// assert!(FilterCriteria::try_from(&inverted).is_err());
    /// # Ok::<(), haven_core::HavenError>(())
    /// ```
    fn try_from(params: &SearchListings) -> Result<Self, Self::Error> {
        let min = params
            .min_price
            .map(|value| money_from_f64("min_price", value))
            .transpose()?
            .unwrap_or(Decimal::ZERO);
        let max = params
            .max_price
            .map(|value| money_from_f64("max_price", value))
            .transpose()?;

        if let Some(max) = max {
            if min > max {
                return Err(HavenError::invalid_input("min_price").with_reason(format!(
                    "Minimum price {min} is greater than maximum price {max}"
                )));
            }
        }

        let min_rating = params.min_rating.unwrap_or(0.0);
        if !min_rating.is_finite() || !(0.0..=MAX_RATING).contains(&min_rating) {
            return Err(HavenError::invalid_input("min_rating")
                .with_reason(format!("Rating threshold {min_rating} must be between 0 and 5")));
        }

        if params.guests == Some(0) {
            return Err(HavenError::invalid_input("guests")
                .with_reason("Guest count must be at least 1"));
        }

        Ok(Self {
            search: non_blank(params.search.as_deref()),
            category: CategoryFilter::parse(params.category.as_deref()),
            city: non_blank(params.city.as_deref()),
            price: PriceRange { min, max },
            min_rating,
            tags: params
                .tags
                .iter()
                .filter_map(|tag| non_blank(Some(tag)))
                .collect(),
            min_guests: params.guests,
            featured_only: params.featured,
            verified_only: params.verified,
            active_only: !params.include_inactive,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}
