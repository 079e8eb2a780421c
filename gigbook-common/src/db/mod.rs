//! Entity store for venues, artists and shows

pub mod artists;
pub mod init;
pub mod models;
pub mod seed;
pub mod shows;
pub mod venues;

pub use init::{init_database, init_memory_database};
pub use models::*;

use chrono::NaiveDateTime;

use crate::schedule::count_upcoming;

/// Build a `LIKE` pattern matching `term` anywhere, with `\` as escape char
///
/// `%`, `_` and `\` in the term match literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Lowercased name stored in `search_name`; search terms go through it too
pub(crate) fn search_key(name: &str) -> String {
    name.to_lowercase()
}

/// Genre list column encoding
pub(crate) fn encode_genres(genres: &[String]) -> crate::Result<String> {
    Ok(serde_json::to_string(genres)?)
}

pub(crate) fn decode_genres(raw: &str) -> crate::Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

/// Collapse `(id, name, start_time?)` rows (ordered so each id is contiguous)
/// into one summary per id
pub(crate) fn summarize(
    rows: Vec<(i64, String, Option<NaiveDateTime>)>,
    now: NaiveDateTime,
) -> Vec<EntitySummary> {
    let mut summaries: Vec<EntitySummary> = Vec::new();
    let mut starts: Vec<NaiveDateTime> = Vec::new();

    for (id, name, start) in rows {
        if summaries.last().map(|s| s.id) != Some(id) {
            if let Some(last) = summaries.last_mut() {
                last.num_upcoming_shows = count_upcoming(starts.drain(..), now);
            }
            summaries.push(EntitySummary {
                id,
                name,
                num_upcoming_shows: 0,
            });
        }
        if let Some(start) = start {
            starts.push(start);
        }
    }
    if let Some(last) = summaries.last_mut() {
        last.num_upcoming_shows = count_upcoming(starts.drain(..), now);
    }

    summaries
}
