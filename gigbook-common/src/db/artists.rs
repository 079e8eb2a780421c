//! Artist database operations

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use super::models::{Artist, ArtistChange, ArtistFields, EntitySummary};
use super::{contains_pattern, decode_genres, encode_genres, search_key, summarize};
use crate::{Error, Result};

const SELECT_ARTIST: &str = r#"
    SELECT id, name, city, state, phone, genres, facebook_link, image_link,
           website, seeking_venue, seeking_description
    FROM artists
"#;

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.try_get("genres")?;
    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        genres: decode_genres(&genres)?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        website: row.try_get("website")?,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

async fn fetch(conn: &mut SqliteConnection, id: i64) -> Result<Artist> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_ARTIST))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    match row {
        Some(row) => artist_from_row(&row),
        None => Err(Error::NotFound(format!("artist {}", id))),
    }
}

/// Insert an artist, returning its assigned id
pub async fn create(pool: &SqlitePool, fields: &ArtistFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, search_name, city, state, phone, genres, facebook_link,
            image_link, website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(search_key(&fields.name))
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(&fields.website)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!("Inserted artist {} ({})", id, fields.name);
    Ok(id)
}

/// Load an artist by id, `Error::NotFound` when absent
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Artist> {
    let mut conn = pool.acquire().await?;
    fetch(&mut conn, id).await
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// All artists ordered by name
pub async fn list(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("{} ORDER BY name, id", SELECT_ARTIST))
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(pool)
        .await?)
}

/// Artists whose name contains `term`, ignoring case
pub async fn search_by_name(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<Vec<EntitySummary>> {
    let rows: Vec<(i64, String, Option<NaiveDateTime>)> = sqlx::query_as(
        r#"
        SELECT a.id, a.name, s.start_time
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id
        WHERE a.search_name LIKE ? ESCAPE '\'
        ORDER BY a.name, a.id
        "#,
    )
    .bind(contains_pattern(&search_key(term)))
    .fetch_all(pool)
    .await?;

    Ok(summarize(rows, now))
}

/// Overwrite the named fields of an artist, returning the updated record
pub async fn update(pool: &SqlitePool, id: i64, changes: Vec<ArtistChange>) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let mut artist = fetch(&mut tx, id).await?;
    for change in changes {
        artist.apply(change);
    }

    sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, search_name = ?, city = ?, state = ?, phone = ?, genres = ?,
            facebook_link = ?, image_link = ?, website = ?, seeking_venue = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(search_key(&artist.name))
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(encode_genres(&artist.genres)?)
    .bind(&artist.facebook_link)
    .bind(&artist.image_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(artist.id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    debug!("Updated artist {}", id);
    Ok(artist)
}

/// Delete an artist and all of its shows, returning the removed artist
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let artist = fetch(&mut tx, id).await?;

    let shows = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    debug!("Deleted artist {} and {} show(s)", id, shows.rows_affected());
    Ok(artist)
}
