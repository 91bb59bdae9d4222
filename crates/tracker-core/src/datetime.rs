//! Date-string parsing and calendar arithmetic for event validation.
//!
//! Events carry dates as client-supplied strings. Accepted forms are the
//! ISO extended date `YYYY-MM-DD` and the datetime variants
//! `YYYY-MM-DDThh:mm`, `YYYY-MM-DDThh:mm:ss`, and
//! `YYYY-MM-DDThh:mm:ss.fff`; the date part is what validation rules
//! operate on. Anything else, including calendar-invalid components like
//! month 13, is rejected.

use chrono::{Days, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Accepted datetime formats, tried in order after the plain-date form.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid date string")]
pub struct DateParseError {
    pub value: String,
}

/// Parse a client-supplied date string into a calendar date.
///
/// # Errors
///
/// Returns `DateParseError` when the string matches none of the accepted
/// forms or names an impossible calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    Err(DateParseError {
        value: value.to_string(),
    })
}

/// Returns true if the string parses as an accepted date form.
pub fn is_valid_date_string(value: &str) -> bool {
    parse_date(value).is_ok()
}

/// Add a number of calendar days to a date.
///
/// Saturates at the calendar maximum; expiry windows are small enough that
/// the boundary comparison stays meaningful either way.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
