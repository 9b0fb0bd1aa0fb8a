//! Human-readable date formatting.
//!
//! Timestamps are anchored to UTC before the calendar date is taken, so a
//! timestamp renders the same day regardless of the server's local zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::CoreError;

/// Accepted layouts for timestamps that carry no offset.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp and return its UTC calendar date.
///
/// Accepts RFC 3339 timestamps (`2024-01-15T12:00:00Z`,
/// `2024-01-15T07:00:00-05:00`), offset-less date-times (treated as UTC) and
/// bare dates (`2024-01-15`).
pub fn parse_calendar_date(iso: &str) -> Result<NaiveDate, CoreError> {
    let input = iso.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.date());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Invalid ISO-8601 timestamp: {iso:?}")))
}

/// Render an ISO-8601 timestamp as a long-form date, e.g. `"January 15, 2024"`.
pub fn format_date(iso: &str) -> Result<String, CoreError> {
    let date = parse_calendar_date(iso)?;
    Ok(date.format("%B %-d, %Y").to_string())
}
