//! Show database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::models::{NewShow, ShowListing};
use crate::time::format_start_time;
use crate::Result;

const SELECT_LISTING: &str = r#"
    SELECT s.id AS show_id, s.start_time,
           v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

fn listing_from_row(row: &SqliteRow) -> Result<ShowListing> {
    Ok(ShowListing {
        show_id: row.try_get("show_id")?,
        venue_id: row.try_get("venue_id")?,
        venue_name: row.try_get("venue_name")?,
        venue_image_link: row.try_get("venue_image_link")?,
        artist_id: row.try_get("artist_id")?,
        artist_name: row.try_get("artist_name")?,
        artist_image_link: row.try_get("artist_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

/// Book an artist at a venue, returning the new show id
///
/// Both ids must exist; the foreign keys reject anything else.
pub async fn create(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(format_start_time(&show.start_time))
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!(
        "Inserted show {} (artist {} at venue {})",
        id, show.artist_id, show.venue_id
    );
    Ok(id)
}

/// Every show with its venue and artist, earliest first
pub async fn list(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!("{} ORDER BY s.start_time, s.id", SELECT_LISTING))
        .fetch_all(pool)
        .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Shows booked at one venue
pub async fn for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id",
        SELECT_LISTING
    ))
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Shows played by one artist
pub async fn for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(&format!(
        "{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id",
        SELECT_LISTING
    ))
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(listing_from_row).collect()
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(pool)
        .await?)
}
