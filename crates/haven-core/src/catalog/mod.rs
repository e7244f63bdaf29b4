//! Catalog snapshots: the listing collection the marketplace reads.
//!
//! A catalog is a JSON document holding every listing:
//!
//! ```json
//! {
//!   "listings": [
//!     {
//!       "id": "gulshan-loft",
//!       "name": "Luxury Apartment in Gulshan",
//!       "location": { "city": "Dhaka", "area": "Gulshan 2" },
//!       "price": "150",
//!       "rating": 4.8,
//!       "created_at": "2024-01-10T08:00:00Z",
//!       "updated_at": "2024-01-10T08:00:00Z",
//!       "details": { "kind": "property", "type": "APARTMENT", "capacity": 4 }
//!     }
//!   ]
//! }
//! ```
//!
//! Every listing is validated when a catalog is parsed, and listing IDs must
//! be unique, so the engines downstream can rely on the listing invariants.

use std::{collections::HashSet, fs, io, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CatalogResultExt, HavenError, Result},
    models::{CatalogStats, Listing},
};

/// A validated, in-memory listing snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog from listings, validating each one.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::InvalidInput` for the first listing violating its
    /// invariants, or for a repeated listing ID.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        validate_listings(&listings)?;
        Ok(Self { listings })
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::Serialization` for malformed JSON and
    /// `HavenError::InvalidInput` for listings that fail validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.listings)
    }

    /// Load a catalog file. A file that does not exist yet is an empty
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::FileSystem` when the file cannot be read, plus
    /// the errors of [`Catalog::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => {
                let catalog = Self::from_json_str(&json)?;
                debug!(
                    "Loaded {} listings from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(catalog)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No catalog at {}, using an empty one", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).fs_context(path),
        }
    }

    /// Load a catalog file that must exist.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::load`], except a missing file is a
    /// `HavenError::FileSystem` error.
    pub fn load_existing<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).fs_context(path)?;
        Self::from_json_str(&json)
    }

    /// Write the catalog as pretty-printed JSON, replacing any existing
    /// file.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::FileSystem` when the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).fs_context(path)
    }

    /// Find a listing by ID.
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Find a listing by ID, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::ListingNotFound` if no listing has `id`.
    pub fn require(&self, id: &str) -> Result<&Listing> {
        self.get(id).ok_or_else(|| HavenError::ListingNotFound { id: id.to_string() })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        self.listings.iter().collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

fn validate_listings(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        listing.validate()?;
        if !seen.insert(listing.id.as_str()) {
            return Err(HavenError::invalid_input("id")
                .with_reason(format!("Duplicate listing ID '{}'", listing.id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingCategory;
    use tempfile::TempDir;

    const CATALOG: &str = r#"{
      "listings": [
        {
          "id": "gulshan-loft",
          "name": "Luxury Apartment in Gulshan",
          "location": { "city": "Dhaka", "area": "Gulshan 2" },
          "price": "150",
          "tags": ["wifi", "pool"],
          "rating": 4.8,
          "review_count": 24,
          "featured": true,
          "created_at": "2024-01-10T08:00:00Z",
          "updated_at": "2024-01-10T08:00:00Z",
          "details": { "kind": "property", "type": "APARTMENT", "capacity": 4, "bedrooms": 2 }
        },
        {
          "id": "sundarbans-3d",
          "name": "Sundarbans Mangrove Expedition",
          "location": { "area": "Sundarbans" },
          "price": 350,
          "rating": 4.9,
          "review_count": 0,
          "created_at": "2024-02-01T08:00:00Z",
          "updated_at": "2024-02-01T08:00:00Z",
          "details": { "kind": "tour", "duration": "3 days, 2 nights", "max_group_size": 12 }
        }
      ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let loft = catalog.get("gulshan-loft").unwrap();
        assert_eq!(loft.category(), ListingCategory::Apartment);
        assert_eq!(loft.capacity(), 4);
        let tour = catalog.get("sundarbans-3d").unwrap();
        assert!(tour.is_tour());
        assert_eq!(tour.location.city, None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();
        let mut listings = catalog.listings().to_vec();
        listings.push(listings[0].clone());

        match Catalog::new(listings) {
            Err(HavenError::InvalidInput { field, reason }) => {
                assert_eq!(field, "id");
                assert!(reason.contains("gulshan-loft"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let json = CATALOG.replace("\"rating\": 4.8", "\"rating\": 5.5");

        match Catalog::from_json_str(&json) {
            Err(HavenError::InvalidInput { field, .. }) => assert_eq!(field, "rating"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = Catalog::from_json_str("{\"listings\": [");
        assert!(matches!(result, Err(HavenError::Serialization { .. })));
    }

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = Catalog::load(temp_dir.path().join("catalog.json")).unwrap();
        assert!(catalog.is_empty());

        let result = Catalog::load_existing(temp_dir.path().join("catalog.json"));
        assert!(matches!(result, Err(HavenError::FileSystem { .. })));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let catalog = Catalog::from_json_str(CATALOG).unwrap();

        catalog.save(&path).unwrap();
        let loaded = Catalog::load(&path).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_require_and_stats() {
        let catalog = Catalog::from_json_str(CATALOG).unwrap();

        assert!(matches!(
            catalog.require("nope"),
            Err(HavenError::ListingNotFound { .. })
        ));

        let stats = catalog.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.featured, 1);
        assert_eq!(stats.by_category.get(&ListingCategory::Tour), Some(&1));
        // the tour has no reviews, so only the loft counts toward the mean
        assert_eq!(stats.mean_rating, Some(4.8));
    }
}
