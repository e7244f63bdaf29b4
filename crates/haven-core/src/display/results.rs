//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::civil::{Date, DateTime};

use super::datetime::StayDate;
use crate::models::{BookingQuote, Listing};

/// What a quote was requested for.
#[derive(Debug, Clone, PartialEq)]
pub enum QuotePeriod {
    /// An overnight stay at a property
    Stay {
        check_in: DateTime,
        check_out: DateTime,
        guests: u32,
    },
    /// A tour booking, optionally on a given date
    Tour {
        travel_date: Option<Date>,
        travelers: u32,
    },
}

/// Wrapper type for displaying a quote together with the listing and
/// booking period it was computed for.
///
/// # Examples
///
/// ```rust
/// use haven_core::{
///     display::{QuotePeriod, QuoteResult},
///     models::FeeRatio,
///     pricing::quote,
/// };
/// use rust_decimal::Decimal;
///
/// let result = QuoteResult {
///     listing_id: "sundarbans-3d".to_string(),
///     listing_name: "Sundarbans Mangrove Expedition".to_string(),
///     period: QuotePeriod::Tour {
///         travel_date: None,
///         travelers: 2,
///     },
///     quote: quote(Decimal::from(350), 2, FeeRatio::platform_default())?,
/// };
/// assert!(result.to_string().contains("- Travelers: 2"));
/// # Ok::<(), haven_core::HavenError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteResult {
    pub listing_id: String,
    pub listing_name: String,
    pub period: QuotePeriod,
    pub quote: BookingQuote,
}

impl QuoteResult {
    /// Create a new QuoteResult for `listing`.
    pub fn new(listing: &Listing, period: QuotePeriod, quote: BookingQuote) -> Self {
        Self {
            listing_id: listing.id.clone(),
            listing_name: listing.name.clone(),
            period,
            quote,
        }
    }
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Quote for {} (ID: {})",
            self.listing_name, self.listing_id
        )?;
        writeln!(f)?;

        match &self.period {
            QuotePeriod::Stay {
                check_in,
                check_out,
                guests,
            } => {
                writeln!(f, "- Check-in: {}", StayDate(check_in))?;
                writeln!(f, "- Check-out: {}", StayDate(check_out))?;
                writeln!(f, "- Guests: {guests}")?;
            }
            QuotePeriod::Tour {
                travel_date,
                travelers,
            } => {
                if let Some(date) = travel_date {
                    writeln!(f, "- Date: {}", date.strftime("%Y-%m-%d"))?;
                }
                writeln!(f, "- Travelers: {travelers}")?;
            }
        }

        writeln!(f, "\n## Price breakdown")?;
        writeln!(f)?;
        write!(f, "{}", self.quote)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{FeeRatio, PriceUnit};

    #[test]
    fn test_stay_quote_result_display() {
        let result = QuoteResult {
            listing_id: "gulshan-loft".to_string(),
            listing_name: "Luxury Apartment in Gulshan".to_string(),
            period: QuotePeriod::Stay {
                check_in: "2024-03-15T00:00".parse().unwrap(),
                check_out: "2024-03-18T00:00".parse().unwrap(),
                guests: 2,
            },
            quote: BookingQuote {
                base_price: Decimal::from(150),
                multiplier: 3,
                unit: PriceUnit::Night,
                fee_ratio: FeeRatio::platform_default(),
                subtotal: Decimal::from(450),
                fee: Decimal::from(45),
                counterpart_revenue: Decimal::from(405),
            },
        };

        let output = format!("{result}");

        assert!(output.starts_with("# Quote for Luxury Apartment in Gulshan (ID: gulshan-loft)"));
        assert!(output.contains("- Check-in: 2024-03-15"));
        assert!(output.contains("- Check-out: 2024-03-18"));
        assert!(output.contains("- Guests: 2"));
        assert!(output.contains("## Price breakdown"));
        assert!(output.contains("- BDT 150 x 3 nights: BDT 450"));
    }
}
