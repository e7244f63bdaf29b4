//! Sort engine: stable ordering of listings by a named key.

use std::cmp::Ordering;

use log::warn;

use crate::models::Listing;

/// Named orderings a search can request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest rating first
    #[default]
    Rating,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Most recently created first
    Newest,
    /// Featured listings first, then highest rating
    Featured,
    /// A key the marketplace does not know; leaves the order untouched
    Unrecognized(String),
}

impl SortKey {
    /// Interpret a raw sort key. Never fails: unknown keys become
    /// [`SortKey::Unrecognized`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use haven_core::search::SortKey;
    ///
    /// assert_eq!(SortKey::parse("price-low"), SortKey::PriceLow);
    /// assert_eq!(SortKey::parse("Newest"), SortKey::Newest);
    /// assert_eq!(
    ///     SortKey::parse("distance"),
    ///     SortKey::Unrecognized("distance".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "rating" => SortKey::Rating,
            "price-low" | "price_low" => SortKey::PriceLow,
            "price-high" | "price_high" => SortKey::PriceHigh,
            "newest" => SortKey::Newest,
            "featured" => SortKey::Featured,
            _ => SortKey::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Rating => "rating",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Featured => "featured",
            SortKey::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        SortKey::parse(raw)
    }
}

fn by_rating_desc(a: &Listing, b: &Listing) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

/// Order listings by `key`.
///
/// The sort is stable: listings that compare equal keep their input order.
/// An unrecognized key returns the input unchanged.
pub fn sort<'a>(mut listings: Vec<&'a Listing>, key: &SortKey) -> Vec<&'a Listing> {
    match key {
        SortKey::Rating => listings.sort_by(|a, b| by_rating_desc(a, b)),
        SortKey::PriceLow => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Featured => listings.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then_with(|| by_rating_desc(a, b))
        }),
        SortKey::Unrecognized(raw) => {
            warn!("Unrecognized sort key '{raw}', keeping input order");
        }
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{property, tour};
    use jiff::Timestamp;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|listing| listing.id.clone()).collect()
    }

    #[test]
    fn test_rating_desc_keeps_ties_in_input_order() {
        let listings = vec![
            property("1", "Dhaka", 150, 4.8),
            property("2", "Dhaka", 150, 4.9),
            property("3", "Dhaka", 150, 4.8),
        ];

        let sorted = sort(listings.iter().collect(), &SortKey::Rating);

        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_price_low_and_high() {
        let listings = vec![
            property("1", "Dhaka", 150, 4.8),
            property("2", "Dhaka", 60, 4.4),
            tour("3", "Sundarbans", 350, 12, 4.9),
            property("4", "Dhaka", 150, 4.1),
        ];

        let low = sort(listings.iter().collect(), &SortKey::PriceLow);
        let high = sort(listings.iter().collect(), &SortKey::PriceHigh);

        assert_eq!(ids(&low), vec!["2", "1", "4", "3"]);
        assert_eq!(ids(&high), vec!["3", "1", "4", "2"]);
    }

    #[test]
    fn test_newest_first() {
        let mut old = property("old", "Dhaka", 100, 4.0);
        old.created_at = Timestamp::from_second(1_600_000_000).unwrap();
        let mut new = property("new", "Dhaka", 100, 4.0);
        new.created_at = Timestamp::from_second(1_700_000_000).unwrap();
        let listings = vec![old, new];

        let sorted = sort(listings.iter().collect(), &SortKey::Newest);

        assert_eq!(ids(&sorted), vec!["new", "old"]);
    }

    #[test]
    fn test_featured_then_rating() {
        let mut featured_low = property("1", "Dhaka", 100, 4.2);
        featured_low.featured = true;
        let plain_high = property("2", "Dhaka", 100, 4.9);
        let mut featured_high = property("3", "Dhaka", 100, 4.7);
        featured_high.featured = true;
        let listings = vec![featured_low, plain_high, featured_high];

        let sorted = sort(listings.iter().collect(), &SortKey::Featured);

        assert_eq!(ids(&sorted), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_unrecognized_key_is_noop() {
        let listings = vec![
            property("1", "Dhaka", 350, 4.1),
            property("2", "Dhaka", 60, 4.9),
            property("3", "Dhaka", 150, 4.5),
        ];

        let sorted = sort(listings.iter().collect(), &SortKey::parse("closest"));

        assert_eq!(ids(&sorted), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(SortKey::parse("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse(" PRICE-HIGH "), SortKey::PriceHigh);
        assert_eq!(SortKey::parse("price_low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse("featured"), SortKey::Featured);
        assert_eq!(SortKey::from("newest"), SortKey::Newest);
        assert_eq!(SortKey::default(), SortKey::Rating);
    }
}
