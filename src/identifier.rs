//! Sortable timestamp identifiers.
//!
//! Every note name starts with a fixed-width `YYYYMMDDTHHMMSS` identifier
//! derived from its creation timestamp, so lexicographic order of names
//! equals chronological order of creation. Timestamps use the caller's
//! local timezone at capture time.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::{DirnoteError, Result};

/// The fixed identifier pattern: `YYYYMMDDTHHMMSS`.
pub const IDENTIFIER_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Formats a timestamp as a sortable identifier string.
pub fn format_identifier(timestamp: &DateTime<Local>) -> String {
    timestamp.format(IDENTIFIER_FORMAT).to_string()
}

/// Parses user-entered date text into a timestamp.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD HH:MM:SS`;
/// anything else, including out-of-range components, fails with
/// [`DirnoteError::InvalidDateFormat`].
///
/// When the parsed seconds are exactly `00` the current seconds-of-minute
/// value is added, so two invocations sharing minute-truncated input are
/// unlikely to collide. Best effort only: two invocations in the same
/// second still produce the same identifier.
pub fn parse_date(text: &str) -> Result<DateTime<Local>> {
    parse_date_with_seconds(text, Local::now().second())
}

fn parse_date_with_seconds(text: &str, current_seconds: u32) -> Result<DateTime<Local>> {
    let trimmed = text.trim();

    let invalid = || DirnoteError::InvalidDateFormat {
        input: text.to_string(),
    };

    let mut naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| invalid())?;

    if naive.second() == 0 {
        naive += Duration::seconds(i64::from(current_seconds));
    }

    Local.from_local_datetime(&naive).earliest().ok_or_else(invalid)
}
