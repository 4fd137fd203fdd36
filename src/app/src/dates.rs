//! Event date parsing and display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

pub const DATE_TBA: &str = "Date TBA";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a catalog date.
///
/// Timestamps with an offset keep the wall-clock time of that offset.
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format like `Sat, 14 Mar 2026, 10:00`, or [`DATE_TBA`]
pub fn format_event_date(raw: Option<&str>) -> String {
    raw.and_then(parse_event_date)
        .map(|date| date.format("%a, %-d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| DATE_TBA.to_string())
}

/// Calendar-day part of a catalog date, compared against the date filter
pub fn date_prefix(raw: Option<&str>) -> String {
    raw.unwrap_or_default().chars().take(10).collect()
}

/// Ascending order with unparseable dates last
pub fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.and_then(parse_event_date);
    let b = b.and_then(parse_event_date);

    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
