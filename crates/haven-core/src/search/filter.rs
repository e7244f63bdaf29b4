//! Filter engine: a conjunction of predicates over a listing collection.

use crate::models::{FilterCriteria, Listing};

/// Lazily yield the listings that satisfy every populated criterion.
///
/// Yields references to the input listings in their input order. Absent
/// criteria impose no constraint, so `FilterCriteria::default()` yields the
/// input unchanged. Never fails: an unrecognized category simply matches
/// nothing.
///
/// # Examples
///
/// ```rust
/// # use haven_core::search::filter;
/// # use haven_core::models::{FilterCriteria, Listing};
/// # fn run(listings: &[Listing]) {
/// let criteria = FilterCriteria {
///     search: Some("dhaka".to_string()),
///     ..Default::default()
/// };
/// let in_dhaka: Vec<&Listing> = filter(listings, &criteria).collect();
/// # }
/// ```
pub fn filter<'a, I>(listings: I, criteria: &'a FilterCriteria) -> impl Iterator<Item = &'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let needle = criteria.search.as_deref().map(str::to_lowercase);
    listings
        .into_iter()
        .filter(move |listing| matches(listing, criteria, needle.as_deref()))
}

/// Whether a single listing satisfies `criteria`.
pub fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let needle = criteria.search.as_deref().map(str::to_lowercase);
    matches(listing, criteria, needle.as_deref())
}

/// `needle` is the search text already lowercased, so callers matching many
/// listings lowercase it once.
pub(crate) fn matches(listing: &Listing, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    needle.map_or(true, |needle| matches_text(listing, needle))
        && criteria.category.matches(listing.category())
        && criteria
            .city
            .as_deref()
            .map_or(true, |city| matches_city(listing, city))
        && criteria.price.contains(listing.price)
        && listing.rating >= criteria.min_rating
        && has_all_tags(listing, &criteria.tags)
        && criteria
            .min_guests
            .map_or(true, |guests| listing.capacity() >= guests)
        && (!criteria.featured_only || listing.featured)
        && (!criteria.verified_only || listing.verified)
        && (!criteria.active_only || listing.is_bookable())
}

/// Case-insensitive substring match on any of the searchable text fields.
/// `needle` must already be lowercase.
fn matches_text(listing: &Listing, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&listing.name)
        || listing.location.city.as_deref().is_some_and(contains)
        || contains(&listing.location.area)
        || contains(&listing.description)
}

fn matches_city(listing: &Listing, city: &str) -> bool {
    listing
        .location
        .city
        .as_deref()
        .is_some_and(|listed| same_text(listed, city))
}

/// Every required tag must be present; an empty requirement is satisfied by
/// any listing.
fn has_all_tags(listing: &Listing, required: &[String]) -> bool {
    required.iter().all(|wanted| {
        listing
            .tags
            .iter()
            .any(|tag| same_text(tag, wanted))
    })
}

/// Case-insensitive equality with the same Unicode folding text search uses.
fn same_text(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CategoryFilter, ListingCategory, ListingStatus, PriceRange},
        search::test_support::{property, tour},
    };
    use rust_decimal::Decimal;

    fn ids<'a>(listings: impl Iterator<Item = &'a Listing>) -> Vec<&'a str> {
        listings.map(|listing| listing.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_city() {
        let listings = vec![property("1", "Dhaka", 150, 4.8), property("2", "Sylhet", 100, 4.7)];
        let criteria = FilterCriteria {
            search: Some("dhaka".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &criteria)), vec!["1"]);
    }

    #[test]
    fn test_search_matches_description_and_area() {
        let mut by_description = property("1", "Sylhet", 100, 4.7);
        by_description.description = "Tea gardens and waterfalls".to_string();
        let mut by_area = property("2", "Dhaka", 120, 4.5);
        by_area.location.area = "Banani".to_string();
        let listings = vec![by_description, by_area];

        let tea = FilterCriteria {
            search: Some("TEA".to_string()),
            ..Default::default()
        };
        let banani = FilterCriteria {
            search: Some("banani".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &tea)), vec!["1"]);
        assert_eq!(ids(filter(&listings, &banani)), vec!["2"]);
    }

    #[test]
    fn test_tour_without_city_matches_on_area() {
        let listings = vec![tour("t1", "Sundarbans", 350, 12, 4.9)];
        let criteria = FilterCriteria {
            search: Some("sundar".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &criteria)), vec!["t1"]);
    }

    #[test]
    fn test_tags_require_all() {
        let mut wifi_only = property("1", "Dhaka", 150, 4.8);
        wifi_only.tags = vec!["wifi".to_string()];
        let mut both = property("2", "Dhaka", 150, 4.8);
        both.tags = vec!["pool".to_string(), "WiFi".to_string(), "gym".to_string()];
        let listings = vec![wifi_only, both];

        let criteria = FilterCriteria {
            tags: vec!["wifi".to_string(), "pool".to_string()],
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let listings = vec![
            property("1", "Dhaka", 60, 4.4),
            property("2", "Dhaka", 150, 4.8),
            property("3", "Dhaka", 350, 4.9),
        ];
        let criteria = FilterCriteria {
            price: PriceRange {
                min: Decimal::from(60),
                max: Some(Decimal::from(150)),
            },
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &criteria)), vec!["1", "2"]);
    }

    #[test]
    fn test_rating_threshold() {
        let listings = vec![property("1", "Dhaka", 60, 4.4), property("2", "Dhaka", 150, 4.8)];
        let criteria = FilterCriteria {
            min_rating: 4.5,
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_category_filter() {
        let listings = vec![property("1", "Dhaka", 150, 4.8), tour("t1", "Sreemangal", 180, 8, 4.8)];

        let tours = FilterCriteria {
            category: CategoryFilter::Is(ListingCategory::Tour),
            ..Default::default()
        };
        let unknown = FilterCriteria {
            category: CategoryFilter::Unrecognized("castle".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &tours)), vec!["t1"]);
        assert!(filter(&listings, &unknown).next().is_none());
    }

    #[test]
    fn test_city_capacity_and_flags() {
        let mut featured = property("1", "Dhaka", 150, 4.8);
        featured.featured = true;
        let mut inactive = property("2", "Dhaka", 150, 4.8);
        inactive.status = ListingStatus::Inactive;
        let other_city = property("3", "Khulna", 150, 4.8);
        let listings = vec![featured, inactive, other_city];

        let dhaka = FilterCriteria {
            city: Some("DHAKA".to_string()),
            ..Default::default()
        };
        let featured_only = FilterCriteria {
            featured_only: true,
            ..Default::default()
        };
        let active_only = FilterCriteria {
            active_only: true,
            ..Default::default()
        };
        let big_group = FilterCriteria {
            min_guests: Some(5),
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &dhaka)), vec!["1", "2"]);
        assert_eq!(ids(filter(&listings, &featured_only)), vec!["1"]);
        assert_eq!(ids(filter(&listings, &active_only)), vec!["1", "3"]);
        assert!(filter(&listings, &big_group).next().is_none());
    }

    #[test]
    fn test_non_ascii_city_and_tags_fold_like_search_text() {
        let mut listing = property("1", "Česká Lípa", 90, 4.5);
        listing.tags = vec!["Café".to_string()];
        let listings = vec![listing];

        let by_text = FilterCriteria {
            search: Some("ČESKÁ".to_string()),
            ..Default::default()
        };
        let by_city = FilterCriteria {
            city: Some("ČESKÁ LÍPA".to_string()),
            ..Default::default()
        };
        let by_tag = FilterCriteria {
            tags: vec!["CAFÉ".to_string()],
            ..Default::default()
        };

        assert_eq!(ids(filter(&listings, &by_text)), vec!["1"]);
        assert_eq!(ids(filter(&listings, &by_city)), vec!["1"]);
        assert_eq!(ids(filter(&listings, &by_tag)), vec!["1"]);
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let mut draft = property("2", "Sylhet", 100, 4.7);
        draft.status = ListingStatus::Draft;
        let listings = vec![property("1", "Dhaka", 150, 4.8), draft, tour("t1", "Sundarbans", 350, 12, 4.9)];

        assert_eq!(
            ids(filter(&listings, &FilterCriteria::default())),
            vec!["1", "2", "t1"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let listings: Vec<Listing> = Vec::new();
        let criteria = FilterCriteria {
            search: Some("anything".to_string()),
            ..Default::default()
        };

        assert!(filter(&listings, &criteria).next().is_none());
    }

    #[test]
    fn test_yields_references_not_copies() {
        let listings = vec![property("1", "Dhaka", 150, 4.8)];
        let criteria = FilterCriteria::default();

        let first = filter(&listings, &criteria).next().unwrap();
        assert!(std::ptr::eq(first, &listings[0]));
    }
}
