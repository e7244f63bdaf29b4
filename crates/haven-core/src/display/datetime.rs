//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps and booking dates in a
//! consistent, human-readable format.

use std::fmt;

use jiff::{
    civil::{DateTime, Time},
    tz::TimeZone,
    Timestamp,
};

/// A wrapper around `Timestamp` that formats it in the system timezone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ`, in 24-hour time with the timezone abbreviation
/// (e.g. UTC, +06).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A wrapper around a civil check-in/check-out value.
///
/// Midnight values are shown as a bare date (`2024-03-15`), anything else
/// with the time of day (`2024-03-15 14:00`).
pub struct StayDate<'a>(pub &'a DateTime);

impl<'a> fmt::Display for StayDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.time() == Time::midnight() {
            write!(f, "{}", self.0.strftime("%Y-%m-%d"))
        } else {
            write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
        }
    }
}
