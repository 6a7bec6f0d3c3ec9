//! Calendar-day helpers for the date column.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// UTC calendar day of a date or timestamp string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to UTC) and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps (read as UTC).
pub fn utc_calendar_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

/// Midnight UTC of `day` in the millisecond ISO form the list service expects,
/// e.g. `2024-05-01T00:00:00.000Z`.
pub fn start_of_day_iso(day: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", day.format("%Y-%m-%d"))
}
