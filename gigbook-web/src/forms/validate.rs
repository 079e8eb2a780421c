//! Field validators shared by the venue, artist and show forms

use gigbook_common::choices::{is_genre, is_state};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::FieldErrors;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_A_CHOICE: &str = "Not a valid choice.";
pub const INVALID_PHONE: &str = "Invalid phone number format";

/// Limit for names, cities, addresses and phone numbers
pub const SHORT_TEXT_MAX: usize = 120;
/// Limit for links and the seeking description
pub const LONG_TEXT_MAX: usize = 500;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("valid phone regex")
});

fn too_long(max: usize) -> String {
    format!("Field cannot be longer than {} characters.", max)
}

/// Non-empty text up to `max` characters
pub fn required_text(errors: &mut FieldErrors, field: &str, value: &str, max: usize) -> Option<String> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    if value.chars().count() > max {
        errors.add(field, too_long(max));
        return None;
    }
    Some(value.to_string())
}

/// Optional text up to `max` characters; blank means none
pub fn optional_text(errors: &mut FieldErrors, field: &str, value: &str, max: usize) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > max {
        errors.add(field, too_long(max));
        return None;
    }
    Some(value.to_string())
}

/// Two-letter state code from the fixed list
pub fn state(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        None
    } else if !is_state(value) {
        errors.add(field, NOT_A_CHOICE);
        None
    } else {
        Some(value.to_string())
    }
}

pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Required phone number in one of the North American layouts
pub fn phone(errors: &mut FieldErrors, field: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        None
    } else if !is_phone(value) {
        errors.add(field, INVALID_PHONE);
        None
    } else {
        Some(value.to_string())
    }
}

/// At least one genre, each from the fixed list
pub fn genres(errors: &mut FieldErrors, field: &str, values: &[&str]) -> Vec<String> {
    let values: Vec<&str> = values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).collect();
    if values.is_empty() {
        errors.add(field, REQUIRED);
        return Vec::new();
    }

    let mut accepted = Vec::with_capacity(values.len());
    for value in values {
        if is_genre(value) {
            if !accepted.iter().any(|g: &String| g == value) {
                accepted.push(value.to_string());
            }
        } else {
            errors.add(field, format!("'{}' is not a valid choice for this field.", value));
        }
    }
    accepted
}

/// Absolute http(s) URL whose host has at least one dot
pub fn is_web_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url
                    .host_str()
                    .map(|host| {
                        let host = host.trim_end_matches('.');
                        host.contains('.') && !host.starts_with('.')
                    })
                    .unwrap_or(false)
        }
        Err(_) => false,
    }
}

/// Optional link; `message` is reported when present but not a web URL
pub fn optional_url(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    message: &str,
) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > LONG_TEXT_MAX {
        errors.add(field, too_long(LONG_TEXT_MAX));
        return None;
    }
    if !is_web_url(value) {
        errors.add(field, message);
        return None;
    }
    Some(value.to_string())
}

/// Checkbox state: `y`, `on`, `true` or `1` (any case) mean checked
pub fn checkbox(value: Option<&str>) -> bool {
    value
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "y" | "on" | "true" | "1"))
        .unwrap_or(false)
}
