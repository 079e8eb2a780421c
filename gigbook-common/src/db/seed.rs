//! Sample data set
//!
//! Replaces the database contents with three venues, three artists and five
//! shows. Show times are placed relative to `now` so the data always has a
//! mix of past and upcoming bookings.

use chrono::{Duration, NaiveDateTime};
use sqlx::SqlitePool;
use tracing::info;

use super::models::{ArtistFields, NewShow, VenueFields};
use super::{artists, shows, venues};
use crate::Result;

/// Counts of what was inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn sample_venues() -> Vec<VenueFields> {
    vec![
        VenueFields {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
            image_link: Some(
                "https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".to_string(),
            ),
            website: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
        },
        VenueFields {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: Some("914-003-1132".to_string()),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            facebook_link: Some("https://www.facebook.com/theduelingpianos".to_string()),
            image_link: Some(
                "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750".to_string(),
            ),
            website: Some("https://www.theduelingpianos.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        },
        VenueFields {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: Some("415-000-1234".to_string()),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            facebook_link: Some(
                "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            ),
            image_link: Some(
                "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747".to_string(),
            ),
            website: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
            seeking_talent: false,
            seeking_description: None,
        },
    ]
}

fn sample_artists() -> Vec<ArtistFields> {
    vec![
        ArtistFields {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: strings(&["Rock n Roll"]),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            image_link: Some(
                "https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".to_string(),
            ),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
        },
        ArtistFields {
            name: "Matt Quevado".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: Some("300-400-5000".to_string()),
            genres: strings(&["Jazz"]),
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            image_link: Some(
                "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".to_string(),
            ),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
        ArtistFields {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("432-325-5432".to_string()),
            genres: strings(&["Jazz", "Classical"]),
            facebook_link: None,
            image_link: Some(
                "https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".to_string(),
            ),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        },
    ]
}

/// Wipe all tables and load the sample data set
pub async fn seed(pool: &SqlitePool, now: NaiveDateTime) -> Result<SeedSummary> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM shows").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM artists").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM venues").execute(&mut *tx).await?;
    tx.commit().await?;

    let mut venue_ids = Vec::new();
    for venue in sample_venues() {
        venue_ids.push(venues::create(pool, &venue).await?);
    }
    let mut artist_ids = Vec::new();
    for artist in sample_artists() {
        artist_ids.push(artists::create(pool, &artist).await?);
    }

    // (artist, venue, offset from now in hours)
    let bookings: [(usize, usize, i64); 5] = [
        (0, 0, -24 * 400),
        (1, 2, -24 * 30),
        (2, 2, 24 * 7),
        (2, 2, 24 * 14),
        (2, 2, 24 * 21),
    ];
    for (artist, venue, hours) in bookings {
        shows::create(
            pool,
            &NewShow {
                artist_id: artist_ids[artist],
                venue_id: venue_ids[venue],
                start_time: now + Duration::hours(hours),
            },
        )
        .await?;
    }

    let summary = SeedSummary {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: bookings.len(),
    };
    info!(
        "Seeded {} venues, {} artists, {} shows",
        summary.venues, summary.artists, summary.shows
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_database;
    use crate::schedule::ShowSchedule;

    #[tokio::test]
    async fn test_seed_replaces_contents() {
        let pool = init_memory_database().await.unwrap();
        let now = crate::time::now();

        seed(&pool, now).await.unwrap();
        let summary = seed(&pool, now).await.unwrap();

        assert_eq!(summary, SeedSummary { venues: 3, artists: 3, shows: 5 });
        assert_eq!(venues::count(&pool).await.unwrap(), 3);
        assert_eq!(artists::count(&pool).await.unwrap(), 3);
        assert_eq!(shows::count(&pool).await.unwrap(), 5);

        let all = shows::list(&pool).await.unwrap();
        let schedule = ShowSchedule::partition(all, now);
        assert_eq!(schedule.past_count(), 2);
        assert_eq!(schedule.upcoming_count(), 3);
    }
}
