//! Price breakdown types produced by the price calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{HavenError, Result};

/// Decimal places platform fees are rounded to.
pub const CURRENCY_SCALE: u32 = 2;

/// What one unit of a listing's base price buys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    /// One night's stay at a property
    Night,
    /// One traveler on a tour
    Person,
    /// A bare multiplier with no booking context
    Unit,
}

impl PriceUnit {
    /// Singular label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Night => "night",
            PriceUnit::Person => "person",
            PriceUnit::Unit => "unit",
        }
    }

    /// Label for `count` units as shown in a price breakdown line.
    pub fn count_label(&self, count: u32) -> &'static str {
        match (self, count) {
            (PriceUnit::Night, 1) => "night",
            (PriceUnit::Night, _) => "nights",
            (PriceUnit::Person, 1) => "traveler",
            (PriceUnit::Person, _) => "travelers",
            (PriceUnit::Unit, 1) => "unit",
            (PriceUnit::Unit, _) => "units",
        }
    }
}

/// Share of a booking's subtotal the platform keeps, in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FeeRatio(Decimal);

impl FeeRatio {
    /// The platform's 10% fee, applied uniformly to stays and tours.
    pub fn platform_default() -> Self {
        Self(Decimal::new(10, 2))
    }

    /// Create a fee ratio from an exact decimal.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::InvalidInput` if the ratio lies outside [0, 1].
    pub fn new(ratio: Decimal) -> Result<Self> {
        if ratio < Decimal::ZERO || ratio > Decimal::ONE {
            return Err(HavenError::invalid_input("fee_ratio")
                .with_reason(format!("Fee ratio {ratio} must be between 0 and 1")));
        }
        Ok(Self(ratio.normalize()))
    }

    /// Create a fee ratio from a float supplied at an interface boundary.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::InvalidInput` if the value is not finite or lies
    /// outside [0, 1].
    pub fn from_f64(ratio: f64) -> Result<Self> {
        let ratio = Decimal::try_from(ratio).map_err(|_| {
            HavenError::invalid_input("fee_ratio")
                .with_reason(format!("Fee ratio {ratio} is not a finite number"))
        })?;
        Self::new(ratio)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The ratio expressed as a percentage, e.g. `10` for 0.10.
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl Default for FeeRatio {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Computed price breakdown for a prospective booking.
///
/// `fee + counterpart_revenue == subtotal` holds exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingQuote {
    /// Price of one unit (night or person)
    pub base_price: Decimal,

    /// Number of nights or travelers
    pub multiplier: u32,

    pub unit: PriceUnit,

    pub fee_ratio: FeeRatio,

    /// `base_price * multiplier`; what the guest pays
    pub subtotal: Decimal,

    /// Platform fee retained by the marketplace
    pub fee: Decimal,

    /// What the host receives
    pub counterpart_revenue: Decimal,
}

/// Convert a float price supplied at an interface boundary into an exact
/// non-negative amount.
///
/// # Errors
///
/// Returns `HavenError::InvalidInput` for non-finite or negative values.
pub fn money_from_f64(field: &str, value: f64) -> Result<Decimal> {
    let amount = Decimal::try_from(value).map_err(|_| {
        HavenError::invalid_input(field).with_reason(format!("{value} is not a finite amount"))
    })?;
    if amount < Decimal::ZERO {
        return Err(HavenError::invalid_input(field)
            .with_reason(format!("Amount {value} must not be negative")));
    }
    Ok(amount.normalize())
}
