//! Collection wrapper types for displaying groups of listings.

use std::{fmt, ops::Index};

use crate::models::Listing;

/// Newtype wrapper for displaying search results.
///
/// Each listing is shown as a compact summary entry, in collection order.
/// Empty results are shown as a message rather than nothing.
///
/// # Examples
///
/// ```rust
/// use haven_core::display::Listings;
///
/// let results = Listings(vec![]);
/// assert!(results.is_empty());
/// assert_eq!(format!("{results}"), "No listings found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Listings(pub Vec<Listing>);

impl Listings {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of listings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the listing at the given index.
    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.0.get(index)
    }

    /// Get an iterator over the listings.
    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a Listing> for Listings {
    fn from_iter<I: IntoIterator<Item = &'a Listing>>(iter: I) -> Self {
        Self(iter.into_iter().cloned().collect())
    }
}

impl Index<usize> for Listings {
    type Output = Listing;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Listings {
    type Item = Listing;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listings {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Listings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No listings found.")
        } else {
            for listing in &self.0 {
                listing.fmt_summary(f)?;
            }
            Ok(())
        }
    }
}
