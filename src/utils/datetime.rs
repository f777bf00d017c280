//! Deadline parsing and formatting.
//!
//! Deadlines are kept as the raw text the user typed. This module turns that
//! text into a point in local time when it can, and formats points in time for
//! display. Unparsable input yields `None` so callers can fall back to a
//! neutral presentation.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Date-time layouts accepted for deadlines, interpreted as local time.
///
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw deadline into a local date-time.
///
/// Accepts `datetime-local` style values (`2024-01-01T12:00`), the same with
/// seconds or a space separator, bare dates (midnight) and RFC 3339 values
/// with an offset, which are converted to local time.
///
pub fn parse_deadline(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, NAIVE_DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Local).naive_local())
}

/// Whether `format` is a usable `chrono` format string.
///
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Format a date-time with the given `chrono` format string. A malformed
/// format falls back to the ISO 8601 layout.
///
pub fn format_datetime(value: &NaiveDateTime, format: &str) -> String {
    let mut formatted = String::new();
    match write!(formatted, "{}", value.format(format)) {
        Ok(()) => formatted,
        Err(_) => value.to_string(),
    }
}

/// Return the current local wall-clock time.
///
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
