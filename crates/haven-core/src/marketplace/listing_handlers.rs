//! Listing handler operations that return formatted wrapper types for the
//! Marketplace.

use log::debug;

use super::Marketplace;
use crate::{
    display::Listings,
    error::Result,
    models::{FilterCriteria, Listing},
    params::{Id, SearchListings},
    search::{self, SortKey},
};

impl Marketplace {
    /// Handle searching the catalog.
    ///
    /// Validates the raw parameters into [`FilterCriteria`], filters the
    /// active catalog, orders the matches by the requested sort key (rating
    /// when absent) and applies the result limit.
    ///
    /// # Arguments
    ///
    /// * `params` - Search parameters; every field is optional
    ///
    /// # Returns
    ///
    /// A Listings wrapper holding the ordered results, empty when nothing
    /// matches
    ///
    /// # Errors
    ///
    /// Returns `HavenError::InvalidInput` for malformed criteria, such as a
    /// minimum price above the maximum.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use haven_core::{params::SearchListings, MarketplaceBuilder};
    /// # async {
    /// let marketplace = MarketplaceBuilder::new().build().await?;
    /// let params = SearchListings {
    ///     search: Some("sylhet".to_string()),
    ///     tags: vec!["wifi".to_string()],
    ///     ..Default::default()
    /// };
    /// let results = marketplace.search_listings(&params).await?;
    /// # Result::<(), haven_core::HavenError>::Ok(())
    /// # };
    /// ```
    pub async fn search_listings(&self, params: &SearchListings) -> Result<Listings> {
        let criteria = FilterCriteria::try_from(params)?;
        let key = params
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default();
        debug!("Searching with {criteria:?}, sorted by {}", key.as_str());

        let catalog = self.load_catalog().await?;
        let results: Listings = search::run(&catalog, &criteria, &key, params.limit)
            .into_iter()
            .collect();

        debug!("{} of {} listings matched", results.len(), catalog.len());
        Ok(results)
    }

    /// Handle showing a single listing.
    ///
    /// # Returns
    ///
    /// The listing, or None if the catalog has no listing with that ID
    pub async fn show_listing(&self, params: &Id) -> Result<Option<Listing>> {
        let catalog = self.load_catalog().await?;
        Ok(catalog.get(&params.id).cloned())
    }
}
