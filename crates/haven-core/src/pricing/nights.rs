//! Stay-length arithmetic over civil dates.

use jiff::civil::{Date, DateTime, Time};

use crate::error::{HavenError, Result};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parse a check-in/check-out/travel value.
///
/// Accepts a bare date (`2024-03-15`, read as midnight) or a civil date-time
/// (`2024-03-15T14:00`).
///
/// # Errors
///
/// Returns `HavenError::InvalidInput` for `field` when the value is neither.
pub fn parse_stay_date(field: &str, raw: &str) -> Result<DateTime> {
    let raw = raw.trim();
    if let Ok(date_time) = raw.parse::<DateTime>() {
        return Ok(date_time);
    }
    raw.parse::<Date>()
        .map(|date| date.to_datetime(Time::midnight()))
        .map_err(|e| {
            HavenError::invalid_input(field)
                .with_reason(format!("'{raw}' is not a valid date (expected YYYY-MM-DD): {e}"))
        })
}

/// Number of nights between check-in and check-out.
///
/// Partial days round up, so a late check-out counts as another night; the
/// result is at least 1.
///
/// # Errors
///
/// Returns `HavenError::InvalidRange` when `check_out` is not after
/// `check_in`.
///
/// # Examples
///
/// ```rust
/// use haven_core::pricing::{nights_between, parse_stay_date};
///
/// let check_in = parse_stay_date("check_in", "2024-03-15")?;
/// let check_out = parse_stay_date("check_out", "2024-03-18")?;
/// assert_eq!(nights_between(check_in, check_out)?, 3);
///
/// let late = parse_stay_date("check_out", "2024-03-18T12:00")?;
/// assert_eq!(nights_between(check_in, late)?, 4);
///
/// assert!(nights_between(check_out, check_in).is_err());
/// # Ok::<(), haven_core::HavenError>(())
/// ```
pub fn nights_between(check_in: DateTime, check_out: DateTime) -> Result<u32> {
    if check_out <= check_in {
        return Err(HavenError::invalid_range("check_out").with_reason(format!(
            "Check-out {check_out} must be after check-in {check_in}"
        )));
    }

    let seconds = check_out.duration_since(check_in).as_secs();
    let nights = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;

    u32::try_from(nights.max(1)).map_err(|_| {
        HavenError::invalid_range("check_out")
            .with_reason(format!("A stay of {nights} nights is too long to quote"))
    })
}
