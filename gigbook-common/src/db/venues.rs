//! Venue database operations

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use super::models::{EntitySummary, Place, Venue, VenueChange, VenueFields};
use super::{contains_pattern, decode_genres, encode_genres, search_key, summarize};
use crate::{Error, Result};

const SELECT_VENUE: &str = r#"
    SELECT id, name, city, state, address, phone, genres, facebook_link,
           image_link, website, seeking_talent, seeking_description
    FROM venues
"#;

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.try_get("genres")?;
    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        genres: decode_genres(&genres)?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        website: row.try_get("website")?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

async fn fetch(conn: &mut SqliteConnection, id: i64) -> Result<Venue> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_VENUE))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    match row {
        Some(row) => venue_from_row(&row),
        None => Err(Error::NotFound(format!("venue {}", id))),
    }
}

/// Insert a venue, returning its assigned id
pub async fn create(pool: &SqlitePool, fields: &VenueFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, search_name, city, state, address, phone, genres, facebook_link,
            image_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(search_key(&fields.name))
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(&fields.website)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!("Inserted venue {} ({})", id, fields.name);
    Ok(id)
}

/// Load a venue by id, `Error::NotFound` when absent
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Venue> {
    let mut conn = pool.acquire().await?;
    fetch(&mut conn, id).await
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// All venues ordered by name
pub async fn list(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("{} ORDER BY name, id", SELECT_VENUE))
        .fetch_all(pool)
        .await?;

    rows.iter().map(venue_from_row).collect()
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(pool)
        .await?)
}

/// Venues grouped by (city, state), each with its upcoming-show count
///
/// Places are ordered by state then city; venues within a place by name.
pub async fn list_places(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<Place>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.city, v.state, s.start_time
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id
        ORDER BY v.state, v.city, v.name, v.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut places: Vec<Place> = Vec::new();
    let mut pending: Vec<(i64, String, Option<NaiveDateTime>)> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for row in &rows {
        let city: String = row.try_get("city")?;
        let state: String = row.try_get("state")?;
        if current.as_ref() != Some(&(city.clone(), state.clone())) {
            if let Some((city, state)) = current.take() {
                places.push(Place {
                    city,
                    state,
                    venues: summarize(std::mem::take(&mut pending), now),
                });
            }
            current = Some((city, state));
        }
        pending.push((
            row.try_get("id")?,
            row.try_get("name")?,
            row.try_get("start_time")?,
        ));
    }
    if let Some((city, state)) = current {
        places.push(Place {
            city,
            state,
            venues: summarize(pending, now),
        });
    }

    Ok(places)
}

/// Venues whose name contains `term`, ignoring case
///
/// Matches against the lowercased `search_name` column, so case folding
/// covers non-ASCII letters too.
pub async fn search_by_name(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<EntitySummary>> {
    let rows: Vec<(i64, String, Option<NaiveDateTime>)> = sqlx::query_as(
        r#"
        SELECT v.id, v.name, s.start_time
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id
        WHERE v.search_name LIKE ? ESCAPE '\'
        ORDER BY v.name, v.id
        "#,
    )
    .bind(contains_pattern(&search_key(term)))
    .fetch_all(pool)
    .await?;

    Ok(summarize(rows, now))
}

async fn write_row(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, search_name = ?, city = ?, state = ?, address = ?, phone = ?,
            genres = ?, facebook_link = ?, image_link = ?, website = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(search_key(&venue.name))
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(encode_genres(&venue.genres)?)
    .bind(&venue.facebook_link)
    .bind(&venue.image_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(venue.id)
    .execute(conn)
    .await?;
    Ok(())
}

/// Overwrite the named fields of a venue, returning the updated record
pub async fn update(pool: &SqlitePool, id: i64, changes: Vec<VenueChange>) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let mut venue = fetch(&mut tx, id).await?;
    for change in changes {
        venue.apply(change);
    }
    write_row(&mut tx, &venue).await?;

    tx.commit().await?;
    debug!("Updated venue {}", id);
    Ok(venue)
}

/// Delete a venue and every show booked there, returning the removed venue
///
/// Shows go first, then the venue, in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let venue = fetch(&mut tx, id).await?;

    let shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    debug!("Deleted venue {} and {} show(s)", id, shows.rows_affected());
    Ok(venue)
}
