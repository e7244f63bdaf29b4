//! Quote handler operations for the Marketplace.

use log::debug;

use super::Marketplace;
use crate::{
    display::{QuotePeriod, QuoteResult},
    error::Result,
    models::{money_from_f64, BookingQuote},
    params::{QuotePrice, QuoteStay, QuoteTour},
    pricing::{self, parse_stay_date},
};

impl Marketplace {
    /// Handle quoting an overnight stay.
    ///
    /// # Errors
    ///
    /// * `HavenError::InvalidInput` - malformed dates or fee ratio, zero
    ///   guests, or a listing that is a tour or not bookable
    /// * `HavenError::InvalidRange` - check-out not after check-in
    /// * `HavenError::CapacityExceeded` - more guests than the property
    ///   sleeps
    /// * `HavenError::ListingNotFound` - no listing with that ID
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use haven_core::{params::QuoteStay, MarketplaceBuilder};
    /// # async {
    /// let marketplace = MarketplaceBuilder::new().build().await?;
    /// let params = QuoteStay {
    ///     listing_id: "gulshan-loft".to_string(),
    ///     check_in: "2024-03-15".to_string(),
    ///     check_out: "2024-03-18".to_string(),
    ///     guests: 2,
    ///     fee_ratio: None,
    /// };
    /// let result = marketplace.quote_stay(&params).await?;
    /// assert_eq!(result.quote.multiplier, 3);
    /// # Result::<(), haven_core::HavenError>::Ok(())
    /// # };
    /// ```
    pub async fn quote_stay(&self, params: &QuoteStay) -> Result<QuoteResult> {
        debug!("Quoting stay: {params:?}");
        let check_in = parse_stay_date("check_in", &params.check_in)?;
        let check_out = parse_stay_date("check_out", &params.check_out)?;
        let fee_ratio = self.resolve_fee_ratio(params.fee_ratio)?;

        let catalog = self.load_catalog().await?;
        let listing = catalog.require(&params.listing_id)?;
        let quote = pricing::quote_stay(listing, check_in, check_out, params.guests, fee_ratio)?;

        Ok(QuoteResult::new(
            listing,
            QuotePeriod::Stay {
                check_in,
                check_out,
                guests: params.guests,
            },
            quote,
        ))
    }

    /// Handle quoting a tour booking.
    ///
    /// # Errors
    ///
    /// * `HavenError::InvalidInput` - malformed date or fee ratio, or a
    ///   listing that is a property or not bookable
    /// * `HavenError::InvalidRange` - zero travelers
    /// * `HavenError::CapacityExceeded` - more travelers than the group size
    /// * `HavenError::ListingNotFound` - no listing with that ID
    pub async fn quote_tour(&self, params: &QuoteTour) -> Result<QuoteResult> {
        debug!("Quoting tour: {params:?}");
        let travel_date = params
            .travel_date
            .as_deref()
            .map(|raw| parse_stay_date("travel_date", raw).map(|date_time| date_time.date()))
            .transpose()?;
        let fee_ratio = self.resolve_fee_ratio(params.fee_ratio)?;

        let catalog = self.load_catalog().await?;
        let listing = catalog.require(&params.listing_id)?;
        let quote = pricing::quote_tour(listing, params.travelers, fee_ratio)?;

        Ok(QuoteResult::new(
            listing,
            QuotePeriod::Tour {
                travel_date,
                travelers: params.travelers,
            },
            quote,
        ))
    }

    /// Handle an ad-hoc price breakdown that is not tied to a listing.
    ///
    /// # Errors
    ///
    /// * `HavenError::InvalidInput` - negative or non-finite base price, or
    ///   a fee ratio outside [0, 1]
    /// * `HavenError::InvalidRange` - zero multiplier
    pub async fn quote_price(&self, params: &QuotePrice) -> Result<BookingQuote> {
        debug!("Quoting price: {params:?}");
        let base_price = money_from_f64("base_price", params.base_price)?;
        let fee_ratio = self.resolve_fee_ratio(params.fee_ratio)?;

        pricing::quote(base_price, params.multiplier, fee_ratio)
    }
}
