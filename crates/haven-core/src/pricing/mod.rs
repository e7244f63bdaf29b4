//! Price calculator: booking quotes for stays and tours.
//!
//! Every quote reduces to the same arithmetic:
//!
//! ```text
//! subtotal            = base_price * multiplier
//! fee                 = round(subtotal * fee_ratio, 2)
//! counterpart_revenue = subtotal - fee
//! ```
//!
//! The multiplier is the number of nights for a stay and the number of
//! travelers for a tour. Amounts are exact decimals, so the fee and the
//! host's share always add back up to the subtotal.

mod nights;

pub use nights::{nights_between, parse_stay_date};

use jiff::civil::DateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::{HavenError, Result},
    models::{BookingQuote, FeeRatio, Listing, ListingDetails, PriceUnit, CURRENCY_SCALE},
};

/// Price breakdown for `multiplier` units of `base_price`.
///
/// The quote's unit is [`PriceUnit::Unit`]; [`quote_stay`] and
/// [`quote_tour`] relabel it.
///
/// # Errors
///
/// * `HavenError::InvalidRange` - `multiplier` is zero
/// * `HavenError::InvalidInput` - `base_price` is negative, or the subtotal
///   would exceed the largest representable amount
///
/// # Examples
///
/// ```rust
/// use haven_core::{models::FeeRatio, pricing::quote};
/// use rust_decimal::Decimal;
///
/// let quote = quote(Decimal::from(150), 3, FeeRatio::platform_default())?;
/// assert_eq!(quote.subtotal, Decimal::from(450));
/// assert_eq!(quote.fee, Decimal::from(45));
/// assert_eq!(quote.counterpart_revenue, Decimal::from(405));
/// # Ok::<(), haven_core::HavenError>(())
/// ```
pub fn quote(base_price: Decimal, multiplier: u32, fee_ratio: FeeRatio) -> Result<BookingQuote> {
    if multiplier == 0 {
        return Err(HavenError::invalid_range("multiplier")
            .with_reason("A booking must cover at least one night or traveler"));
    }
    if base_price < Decimal::ZERO {
        return Err(HavenError::invalid_input("base_price")
            .with_reason(format!("Base price {base_price} must not be negative")));
    }

    let subtotal = base_price
        .checked_mul(Decimal::from(multiplier))
        .ok_or_else(|| {
            HavenError::invalid_input("base_price").with_reason(format!(
                "Subtotal of {base_price} x {multiplier} exceeds the largest representable amount"
            ))
        })?;
    let fee = subtotal
        .checked_mul(fee_ratio.value())
        .ok_or_else(|| {
            HavenError::invalid_input("base_price")
                .with_reason(format!("Fee on {subtotal} exceeds the largest representable amount"))
        })?
        .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);

    Ok(BookingQuote {
        base_price,
        multiplier,
        unit: PriceUnit::Unit,
        fee_ratio,
        subtotal,
        fee,
        counterpart_revenue: subtotal - fee,
    })
}

/// Quote an overnight stay at a property listing.
///
/// # Errors
///
/// * `HavenError::InvalidInput` - the listing is a tour, is not bookable, or
///   `guests` is zero
/// * `HavenError::InvalidRange` - `check_out` is not after `check_in`
/// * `HavenError::CapacityExceeded` - `guests` exceeds the property's
///   capacity
pub fn quote_stay(
    listing: &Listing,
    check_in: DateTime,
    check_out: DateTime,
    guests: u32,
    fee_ratio: FeeRatio,
) -> Result<BookingQuote> {
    let ListingDetails::Property(details) = &listing.details else {
        return Err(HavenError::invalid_input("listing_id").with_reason(format!(
            "Listing '{}' is a tour; quote it per traveler",
            listing.id
        )));
    };
    ensure_bookable(listing)?;

    if guests == 0 {
        return Err(HavenError::invalid_input("guests")
            .with_reason("Guest count must be at least 1"));
    }
    ensure_capacity(guests, details.capacity)?;

    let nights = nights_between(check_in, check_out)?;
    let mut quote = quote(listing.price, nights, fee_ratio)?;
    quote.unit = PriceUnit::Night;
    Ok(quote)
}

/// Quote a tour booking for `travelers` people.
///
/// # Errors
///
/// * `HavenError::InvalidInput` - the listing is a property or is not
///   bookable
/// * `HavenError::InvalidRange` - `travelers` is zero
/// * `HavenError::CapacityExceeded` - `travelers` exceeds the tour's group
///   size
pub fn quote_tour(listing: &Listing, travelers: u32, fee_ratio: FeeRatio) -> Result<BookingQuote> {
    let ListingDetails::Tour(details) = &listing.details else {
        return Err(HavenError::invalid_input("listing_id").with_reason(format!(
            "Listing '{}' is a property; quote it by dates",
            listing.id
        )));
    };
    ensure_bookable(listing)?;

    if travelers == 0 {
        return Err(HavenError::invalid_range("travelers")
            .with_reason("A tour booking needs at least one traveler"));
    }
    ensure_capacity(travelers, details.max_group_size)?;

    let mut quote = quote(listing.price, travelers, fee_ratio)?;
    quote.unit = PriceUnit::Person;
    Ok(quote)
}

fn ensure_bookable(listing: &Listing) -> Result<()> {
    if listing.is_bookable() {
        Ok(())
    } else {
        Err(HavenError::invalid_input("listing_id").with_reason(format!(
            "Listing '{}' is {} and cannot be booked",
            listing.id,
            listing.status.as_str().to_lowercase()
        )))
    }
}

fn ensure_capacity(requested: u32, capacity: u32) -> Result<()> {
    if requested > capacity {
        Err(HavenError::CapacityExceeded {
            requested,
            capacity,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::ListingStatus,
        search::test_support::{property, tour},
    };

    fn day(raw: &str) -> DateTime {
        parse_stay_date("date", raw).unwrap()
    }

    fn ratio(raw: &str) -> FeeRatio {
        FeeRatio::new(raw.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_quote_splits_subtotal() {
        let quote = quote(Decimal::from(150), 3, FeeRatio::platform_default()).unwrap();

        assert_eq!(quote.subtotal, Decimal::from(450));
        assert_eq!(quote.fee, Decimal::from(45));
        assert_eq!(quote.counterpart_revenue, Decimal::from(405));
        assert_eq!(quote.unit, PriceUnit::Unit);
    }

    #[test]
    fn test_fee_rounds_to_cents_and_split_stays_exact() {
        let base: Decimal = "33.33".parse().unwrap();
        let quote = quote(base, 1, ratio("0.125")).unwrap();

        // 33.33 * 0.125 = 4.16625
        assert_eq!(quote.fee, "4.17".parse::<Decimal>().unwrap());
        assert_eq!(quote.counterpart_revenue, "29.16".parse::<Decimal>().unwrap());
        assert_eq!(quote.fee + quote.counterpart_revenue, quote.subtotal);
    }

    #[test]
    fn test_zero_and_full_ratios() {
        let free = quote(Decimal::from(80), 2, ratio("0")).unwrap();
        assert_eq!(free.fee, Decimal::ZERO);
        assert_eq!(free.counterpart_revenue, Decimal::from(160));

        let all = quote(Decimal::from(80), 2, ratio("1")).unwrap();
        assert_eq!(all.fee, Decimal::from(160));
        assert_eq!(all.counterpart_revenue, Decimal::ZERO);
    }

    #[test]
    fn test_zero_multiplier_is_invalid_range() {
        let result = quote(Decimal::from(150), 0, FeeRatio::default());
        assert!(matches!(result, Err(HavenError::InvalidRange { .. })));
    }

    #[test]
    fn test_negative_base_price_is_invalid_input() {
        let result = quote(Decimal::from(-1), 2, FeeRatio::default());
        assert!(matches!(result, Err(HavenError::InvalidInput { .. })));
    }

    #[test]
    fn test_subtotal_overflow_is_invalid_input() {
        let huge = Decimal::try_from(1e25).unwrap();

        let result = quote(huge, 100_000, FeeRatio::platform_default());
        assert!(matches!(
            result,
            Err(HavenError::InvalidInput { ref field, .. }) if field == "base_price"
        ));

        let result = quote(Decimal::MAX, 2, FeeRatio::platform_default());
        assert!(matches!(result, Err(HavenError::InvalidInput { .. })));
    }

    #[test]
    fn test_largest_amount_quotes_once() {
        let quote = quote(Decimal::MAX, 1, FeeRatio::platform_default()).unwrap();

        assert_eq!(quote.subtotal, Decimal::MAX);
        assert!(quote.fee < quote.subtotal);
    }

    #[test]
    fn test_quote_stay_counts_nights() {
        let listing = property("1", "Dhaka", 150, 4.8);

        let quote = quote_stay(
            &listing,
            day("2024-03-15"),
            day("2024-03-18"),
            2,
            FeeRatio::default(),
        )
        .unwrap();

        assert_eq!(quote.multiplier, 3);
        assert_eq!(quote.unit, PriceUnit::Night);
        assert_eq!(quote.subtotal, Decimal::from(450));
        assert_eq!(quote.fee, Decimal::from(45));
    }

    #[test]
    fn test_quote_stay_with_inverted_dates_fails() {
        let listing = property("1", "Dhaka", 150, 4.8);

        let result = quote_stay(
            &listing,
            day("2024-03-18"),
            day("2024-03-15"),
            2,
            FeeRatio::default(),
        );

        assert!(matches!(result, Err(HavenError::InvalidRange { .. })));
    }

    #[test]
    fn test_quote_stay_guest_checks() {
        let listing = property("1", "Dhaka", 150, 4.8);
        let (check_in, check_out) = (day("2024-03-15"), day("2024-03-16"));

        let none = quote_stay(&listing, check_in, check_out, 0, FeeRatio::default());
        assert!(matches!(none, Err(HavenError::InvalidInput { .. })));

        let too_many = quote_stay(&listing, check_in, check_out, 5, FeeRatio::default());
        assert!(matches!(
            too_many,
            Err(HavenError::CapacityExceeded {
                requested: 5,
                capacity: 4
            })
        ));

        assert!(quote_stay(&listing, check_in, check_out, 4, FeeRatio::default()).is_ok());
    }

    #[test]
    fn test_quote_stay_rejects_tours_and_inactive_listings() {
        let (check_in, check_out) = (day("2024-03-15"), day("2024-03-16"));

        let tour_listing = tour("t1", "Sundarbans", 350, 12, 4.9);
        let result = quote_stay(&tour_listing, check_in, check_out, 1, FeeRatio::default());
        assert!(matches!(result, Err(HavenError::InvalidInput { .. })));

        let mut inactive = property("1", "Dhaka", 150, 4.8);
        inactive.status = ListingStatus::Inactive;
        let result = quote_stay(&inactive, check_in, check_out, 1, FeeRatio::default());
        assert!(matches!(result, Err(HavenError::InvalidInput { .. })));
    }

    #[test]
    fn test_quote_tour_per_traveler() {
        let listing = tour("t1", "Sundarbans", 350, 12, 4.9);

        let quote = quote_tour(&listing, 4, FeeRatio::default()).unwrap();

        assert_eq!(quote.unit, PriceUnit::Person);
        assert_eq!(quote.subtotal, Decimal::from(1400));
        assert_eq!(quote.fee, Decimal::from(140));
        assert_eq!(quote.counterpart_revenue, Decimal::from(1260));
    }

    #[test]
    fn test_quote_tour_traveler_checks() {
        let listing = tour("t1", "Sundarbans", 350, 12, 4.9);

        let none = quote_tour(&listing, 0, FeeRatio::default());
        assert!(matches!(none, Err(HavenError::InvalidRange { .. })));

        let crowd = quote_tour(&listing, 13, FeeRatio::default());
        assert!(matches!(
            crowd,
            Err(HavenError::CapacityExceeded {
                requested: 13,
                capacity: 12
            })
        ));

        let stay = property("1", "Dhaka", 150, 4.8);
        let result = quote_tour(&stay, 2, FeeRatio::default());
        assert!(matches!(result, Err(HavenError::InvalidInput { .. })));
    }
}
