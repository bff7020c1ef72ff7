//! Member Entry
//!
//! Typed record read from a roster row's data attributes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const ATTR_NAME: &str = "data-name";
pub const ATTR_PRESENTED: &str = "data-cpre";
pub const ATTR_PAID: &str = "data-cpay";
pub const ATTR_DUE: &str = "data-cdue";
pub const ATTR_LAST: &str = "data-last";

/// Offset-less layouts, read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// One roster row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    /// Display, sort and filter key
    pub name: String,
    /// Crocette taken (`data-cpre`)
    pub presented: i64,
    /// Crocette paid (`data-cpay`)
    pub paid: i64,
    /// Crocette still due (`data-cdue`)
    pub due: i64,
    /// Last activity, milliseconds since the Unix epoch (0 when unknown)
    pub last_activity_ms: i64,
}

impl Member {
    /// Build a member from an attribute lookup.
    ///
    /// Missing or malformed values fall back to an empty name, zero counters
    /// and the epoch.
    pub fn from_attributes<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_attributes_with(get, |_| None)
    }

    /// Same as [`Member::from_attributes`], with a second chance for date
    /// strings none of the built-in layouts accept.
    pub fn from_attributes_with<F, D>(get: F, fallback_date: D) -> Self
    where
        F: Fn(&str) -> Option<String>,
        D: Fn(&str) -> Option<i64>,
    {
        let counter = |attr: &str| get(attr).map(|raw| parse_counter(&raw)).unwrap_or(0);
        let last_activity_ms = get(ATTR_LAST)
            .and_then(|raw| parse_timestamp(&raw).or_else(|| fallback_date(raw.as_str())))
            .unwrap_or(0);

        Self {
            name: get(ATTR_NAME).unwrap_or_default(),
            presented: counter(ATTR_PRESENTED),
            paid: counter(ATTR_PAID),
            due: counter(ATTR_DUE),
            last_activity_ms,
        }
    }
}

/// Read the leading integer of `raw`.
///
/// Leading whitespace and one sign are skipped, then ASCII digits are taken
/// until the first other character. No digits yields 0; overflow saturates.
pub fn parse_counter(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    if negative {
        -value
    } else {
        value
    }
}

/// Parse a date-like string into epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.timestamp_millis());
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc().timestamp_millis());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
