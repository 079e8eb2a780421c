//! Timestamp utilities
//!
//! Show start times are wall-clock local times without a zone, stored and
//! exposed as `YYYY-MM-DD HH:MM:SS`.

use chrono::{Local, NaiveDateTime};

/// Canonical start time pattern used for storage and for callers
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Patterns accepted from form input, tried in order
const INPUT_FORMATS: &[&str] = &[
    START_TIME_FORMAT,
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a start time as `YYYY-MM-DD HH:MM:SS`
pub fn format_start_time(value: &NaiveDateTime) -> String {
    value.format(START_TIME_FORMAT).to_string()
}

/// Parse a start time from user input
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` and the HTML
/// `datetime-local` forms (`T` separator, with or without seconds).
pub fn parse_start_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Display styles for show times on rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Monday May, 21, 2035 at 9:30PM`
    Full,
    /// `Mon 05, 21, 2035 9:30PM`
    Medium,
}

/// Format a show time for display
pub fn format_datetime(value: &NaiveDateTime, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}
