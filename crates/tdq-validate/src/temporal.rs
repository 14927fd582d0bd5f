//! Date and timestamp parsing for record validation.
//!
//! Two parsers are provided:
//!
//! - [`parse_iso_datetime`] accepts ISO 8601 calendar dates and date-times
//!   only (`YYYY-MM-DD`, `YYYY-MM-DDThh:mm[:ss[.fff]]`, a space instead of
//!   `T`, and RFC 3339 with an offset).
//! - [`parse_flexible_datetime`] additionally accepts the slash, month-name
//!   and day-first layouts commonly found in adverse event exports.
//!
//! Offset timestamps are converted to local time so they compare against
//! [`ReferenceTime::now`] consistently.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;

/// Strict `YYYY-MM-DD` layout (RFC 3339 full-date).
static FULL_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid full-date regex"));

const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const FLEXIBLE_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const FLEXIBLE_DATETIME_FORMATS: &[&str] = &["%Y/%m/%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"];

/// Source of "now" for future-date checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferenceTime {
    /// Local wall-clock time, read at each call.
    #[default]
    WallClock,
    /// A fixed instant, used for reproducible runs and tests.
    Fixed(NaiveDateTime),
}

impl ReferenceTime {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::WallClock => Local::now().naive_local(),
            Self::Fixed(instant) => *instant,
        }
    }
}

/// Outcome of checking a timestamp against the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// Parsed and not later than the reference time.
    Valid(NaiveDateTime),
    /// Parsed but later than the reference time.
    Future(NaiveDateTime),
    /// Not a string, or no accepted layout matched.
    Unparseable,
}

/// Parse `value` with `parser` and compare it against `reference`.
pub fn check_not_future(
    value: Option<&str>,
    parser: fn(&str) -> Option<NaiveDateTime>,
    reference: NaiveDateTime,
) -> DateCheck {
    match value.and_then(parser) {
        Some(instant) if instant > reference => DateCheck::Future(instant),
        Some(instant) => DateCheck::Valid(instant),
        None => DateCheck::Unparseable,
    }
}

/// True when `value` is exactly a valid `YYYY-MM-DD` calendar date.
pub fn is_full_date(value: &str) -> bool {
    FULL_DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Parse an ISO 8601 date or date-time.
///
/// A bare date is interpreted as midnight.
pub fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in ISO_DATETIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(instant);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|instant| instant.with_timezone(&Local).naive_local())
}

/// Parse any supported date layout, ISO first.
pub fn parse_flexible_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Some(instant) = parse_iso_datetime(value) {
        return Some(instant);
    }

    let trimmed = value.trim();
    for format in FLEXIBLE_DATETIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(instant);
        }
    }

    FLEXIBLE_DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}
