//! Listing search: filter engine, sort engine and the pipeline joining them.
//!
//! ```text
//! listings ──▶ filter (criteria) ──▶ sort (key) ──▶ limit ──▶ results
//! ```
//!
//! Both engines work on borrowed data: the filter yields references into the
//! caller's collection and the sort reorders those references. Nothing is
//! cloned and nothing fails; a search that matches nothing is an empty
//! result.
//!
//! # Examples
//!
//! ```rust
//! use haven_core::{
//!     models::{FilterCriteria, Listing},
//!     search::{self, SortKey},
//! };
//!
//! fn top_rated_in<'a>(listings: &'a [Listing], city: &str) -> Vec<&'a Listing> {
//!     let criteria = FilterCriteria {
//!         city: Some(city.to_string()),
//!         ..Default::default()
//!     };
//!     search::run(listings, &criteria, &SortKey::Rating, Some(3))
//! }
//! ```

pub mod filter;
pub mod sort;

pub use filter::{filter, matches_criteria};
pub use sort::{sort, SortKey};

use crate::models::{FilterCriteria, Listing};

/// Filter, sort and truncate `listings` in one pass.
pub fn run<'a, I>(
    listings: I,
    criteria: &FilterCriteria,
    key: &SortKey,
    limit: Option<usize>,
) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let needle = criteria.search.as_deref().map(str::to_lowercase);
    let matched: Vec<&'a Listing> = listings
        .into_iter()
        .filter(|listing| filter::matches(listing, criteria, needle.as_deref()))
        .collect();
    let mut ordered = sort(matched, key);
    if let Some(limit) = limit {
        ordered.truncate(limit);
    }
    ordered
}
