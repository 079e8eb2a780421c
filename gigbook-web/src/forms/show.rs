//! Show create form
//!
//! Syntax is checked here; whether the artist and venue exist is checked by
//! the handler against the store before inserting.

use chrono::NaiveDateTime;
use gigbook_common::time::{format_start_time, parse_start_time};

use super::validate::REQUIRED;
use super::{FieldErrors, FormData};

pub const INVALID_ID: &str = "Not a valid integer value.";
pub const INVALID_DATETIME: &str = "Not a valid datetime value.";
pub const NO_SUCH_ARTIST: &str = "No artist with this id.";
pub const NO_SUCH_VENUE: &str = "No venue with this id.";

/// Syntactically valid show input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

fn positive_id(errors: &mut FieldErrors, field: &str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, INVALID_ID);
            None
        }
    }
}

impl ShowForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Blank form with the start time defaulted to `now`
    pub fn with_start_time(now: NaiveDateTime) -> Self {
        Self {
            start_time: format_start_time(&now),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ShowInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let artist_id = positive_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = positive_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = if self.start_time.is_empty() {
            errors.add("start_time", REQUIRED);
            None
        } else {
            let parsed = parse_start_time(&self.start_time);
            if parsed.is_none() {
                errors.add("start_time", INVALID_DATETIME);
            }
            parsed
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(ShowInput {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_show_accepts_datetime_local() {
        let data = FormData::parse(b"artist_id=4&venue_id=1&start_time=2035-04-01T20%3A00");
        let input = ShowForm::from_data(&data).validate().unwrap();

        assert_eq!(input.artist_id, 4);
        assert_eq!(input.venue_id, 1);
        assert_eq!(format_start_time(&input.start_time), "2035-04-01 20:00:00");
    }

    #[test]
    fn test_invalid_values() {
        let data = FormData::parse(b"artist_id=four&venue_id=-2&start_time=next+tuesday");
        let errors = ShowForm::from_data(&data).validate().unwrap_err();

        assert_eq!(errors.get("artist_id"), [INVALID_ID]);
        assert_eq!(errors.get("venue_id"), [INVALID_ID]);
        assert_eq!(errors.get("start_time"), [INVALID_DATETIME]);
    }

    #[test]
    fn test_missing_values() {
        let errors = ShowForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("start_time").iter().all(|m| m == REQUIRED));
    }
}
