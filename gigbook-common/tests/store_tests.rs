//! Entity store behavior across venues, artists and shows

use chrono::{Duration, NaiveDateTime};
use gigbook_common::db::{
    artists, init_memory_database, seed, shows, venues, ArtistFields, NewShow, VenueChange,
    VenueFields,
};
use gigbook_common::ShowSchedule;
use sqlx::SqlitePool;

fn venue(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        website: Some("https://www.themusicalhop.com".to_string()),
        seeking_talent: true,
        seeking_description: Some("Looking for local acts".to_string()),
        ..Default::default()
    }
}

fn artist(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..Default::default()
    }
}

async fn book(pool: &SqlitePool, artist_id: i64, venue_id: i64, start_time: NaiveDateTime) -> i64 {
    shows::create(pool, &NewShow { artist_id, venue_id, start_time })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_search_venues_by_substring() {
    let pool = init_memory_database().await.unwrap();
    venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    venues::create(&pool, &venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();
    let now = gigbook_common::time::now();

    let hop = venues::search_by_name(&pool, "Hop", now).await.unwrap();
    assert_eq!(hop.len(), 1);
    assert_eq!(hop[0].name, "The Musical Hop");

    let music = venues::search_by_name(&pool, "Music", now).await.unwrap();
    let names: Vec<&str> = music.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);

    let lower = venues::search_by_name(&pool, "music", now).await.unwrap();
    assert_eq!(lower.len(), 2);

    let all = venues::search_by_name(&pool, "", now).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_search_counts_only_upcoming_shows() {
    let pool = init_memory_database().await.unwrap();
    let venue_id = venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id = artists::create(&pool, &artist("Guns N Petals")).await.unwrap();
    let now = gigbook_common::time::parse_start_time("2030-06-01 12:00:00").unwrap();

    book(&pool, artist_id, venue_id, now - Duration::days(3)).await;
    book(&pool, artist_id, venue_id, now).await;
    book(&pool, artist_id, venue_id, now + Duration::days(3)).await;

    let venue_hits = venues::search_by_name(&pool, "hop", now).await.unwrap();
    assert_eq!(venue_hits[0].num_upcoming_shows, 1);
    let artist_hits = artists::search_by_name(&pool, "petals", now).await.unwrap();
    assert_eq!(artist_hits[0].num_upcoming_shows, 1);
}

#[tokio::test]
async fn test_places_group_by_city_and_state() {
    let pool = init_memory_database().await.unwrap();
    venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
    venues::create(&pool, &venue("The Dueling Pianos Bar", "New York", "NY")).await.unwrap();
    venues::create(&pool, &venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
        .await
        .unwrap();

    let places = venues::list_places(&pool, gigbook_common::time::now()).await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!((places[0].city.as_str(), places[0].state.as_str()), ("San Francisco", "CA"));
    assert_eq!(places[0].venues.len(), 2);
    assert_eq!(places[0].venues[0].name, "Park Square Live Music & Coffee");
    assert_eq!((places[1].city.as_str(), places[1].state.as_str()), ("New York", "NY"));
    assert_eq!(places[1].venues.len(), 1);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let pool = init_memory_database().await.unwrap();
    let doomed = venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let other = venues::create(&pool, &venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let artist_id = artists::create(&pool, &artist("Guns N Petals")).await.unwrap();
    let now = gigbook_common::time::now();
    book(&pool, artist_id, doomed, now + Duration::days(1)).await;
    book(&pool, artist_id, doomed, now - Duration::days(1)).await;
    book(&pool, artist_id, other, now + Duration::days(2)).await;

    let removed = venues::delete(&pool, doomed).await.unwrap();

    assert_eq!(removed.name, "The Musical Hop");
    assert!(!venues::exists(&pool, doomed).await.unwrap());
    assert!(shows::for_venue(&pool, doomed).await.unwrap().is_empty());
    assert_eq!(shows::count(&pool).await.unwrap(), 1);
    assert!(venues::delete(&pool, doomed).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let pool = init_memory_database().await.unwrap();
    let venue_id = venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist_id = artists::create(&pool, &artist("The Wild Sax Band")).await.unwrap();
    let now = gigbook_common::time::now();
    book(&pool, artist_id, venue_id, now + Duration::days(7)).await;
    book(&pool, artist_id, venue_id, now + Duration::days(14)).await;

    let removed = artists::delete(&pool, artist_id).await.unwrap();

    assert_eq!(removed.name, "The Wild Sax Band");
    assert_eq!(shows::count(&pool).await.unwrap(), 0);
    assert_eq!(venues::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_edit_name_leaves_other_fields() {
    let pool = init_memory_database().await.unwrap();
    let id = venues::create(&pool, &venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let before = venues::get(&pool, id).await.unwrap();

    let updated = venues::update(&pool, id, vec![VenueChange::Name("The Musical Hop II".to_string())])
        .await
        .unwrap();
    let after = venues::get(&pool, id).await.unwrap();

    assert_eq!(updated, after);
    assert_eq!(after.name, "The Musical Hop II");
    assert_eq!(after.city, before.city);
    assert_eq!(after.address, before.address);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.genres, before.genres);
    assert_eq!(after.website, before.website);
    assert_eq!(after.seeking_talent, before.seeking_talent);
    assert_eq!(after.seeking_description, before.seeking_description);
}

#[tokio::test]
async fn test_venue_detail_schedule_from_seed() {
    let pool = init_memory_database().await.unwrap();
    let now = gigbook_common::time::now();
    seed::seed(&pool, now).await.unwrap();

    let park = venues::search_by_name(&pool, "Park Square", now).await.unwrap();
    assert_eq!(park.len(), 1);
    let listings = shows::for_venue(&pool, park[0].id).await.unwrap();
    let schedule = ShowSchedule::partition(&listings, now);

    assert_eq!(schedule.past_count(), 1);
    assert_eq!(schedule.upcoming_count(), 3);
    assert_eq!(park[0].num_upcoming_shows, 3);
}
