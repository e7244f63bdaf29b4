//! Aggregate figures over a catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Listing, ListingCategory};

/// Counts and averages over every listing in a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub featured: usize,
    pub verified: usize,
    /// Listing count per category, in category order
    pub by_category: BTreeMap<ListingCategory, usize>,
    /// Mean rating over listings that have at least one review
    pub mean_rating: Option<f64>,
}

impl<'a> FromIterator<&'a Listing> for CatalogStats {
    fn from_iter<I: IntoIterator<Item = &'a Listing>>(iter: I) -> Self {
        let mut stats = CatalogStats::default();
        let mut rating_sum = 0.0;
        let mut rated = 0usize;

        for listing in iter {
            stats.total += 1;
            if listing.is_bookable() {
                stats.active += 1;
            }
            if listing.featured {
                stats.featured += 1;
            }
            if listing.verified {
                stats.verified += 1;
            }
            *stats.by_category.entry(listing.category()).or_default() += 1;
            if listing.review_count > 0 {
                rating_sum += listing.rating;
                rated += 1;
            }
        }

        stats.mean_rating = (rated > 0).then(|| rating_sum / rated as f64);
        stats
    }
}
