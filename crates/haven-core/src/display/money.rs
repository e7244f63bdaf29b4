//! Currency formatting.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CURRENCY_SCALE;

/// Currency code amounts are shown in.
pub const CURRENCY: &str = "BDT";

/// A wrapper around an amount that formats it as marketplace currency.
///
/// Whole amounts are shown without a fraction, anything else with two
/// decimal places, and the integer part is grouped in thousands.
///
/// # Examples
///
/// ```rust
/// use haven_core::display::Money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(Money(Decimal::from(1500)).to_string(), "BDT 1,500");
/// assert_eq!(Money(Decimal::new(123_450, 2)).to_string(), "BDT 1,234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .0
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let sign = if amount < Decimal::ZERO { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        write!(f, "{CURRENCY} {sign}{}", group_thousands(whole))?;
        if cents != "00" {
            write!(f, ".{cents}")?;
        }
        Ok(())
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
