//! Database models
//!
//! `VenueFields`/`ArtistFields` are the validated field sets produced by the
//! forms. They are applied to records through explicit typed setters
//! (`VenueChange`/`ArtistChange`), one variant per editable column.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::schedule::Scheduled;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Editable venue columns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// One venue column overwrite
#[derive(Debug, Clone, PartialEq)]
pub enum VenueChange {
    Name(String),
    City(String),
    State(String),
    Address(String),
    Phone(Option<String>),
    Genres(Vec<String>),
    FacebookLink(Option<String>),
    ImageLink(Option<String>),
    Website(Option<String>),
    SeekingTalent(bool),
    SeekingDescription(Option<String>),
}

impl VenueFields {
    /// Every field as an overwrite, for a full edit-form submission
    pub fn into_changes(self) -> Vec<VenueChange> {
        vec![
            VenueChange::Name(self.name),
            VenueChange::City(self.city),
            VenueChange::State(self.state),
            VenueChange::Address(self.address),
            VenueChange::Phone(self.phone),
            VenueChange::Genres(self.genres),
            VenueChange::FacebookLink(self.facebook_link),
            VenueChange::ImageLink(self.image_link),
            VenueChange::Website(self.website),
            VenueChange::SeekingTalent(self.seeking_talent),
            VenueChange::SeekingDescription(self.seeking_description),
        ]
    }
}

impl Venue {
    pub fn apply(&mut self, change: VenueChange) {
        match change {
            VenueChange::Name(v) => self.name = v,
            VenueChange::City(v) => self.city = v,
            VenueChange::State(v) => self.state = v,
            VenueChange::Address(v) => self.address = v,
            VenueChange::Phone(v) => self.phone = v,
            VenueChange::Genres(v) => self.genres = v,
            VenueChange::FacebookLink(v) => self.facebook_link = v,
            VenueChange::ImageLink(v) => self.image_link = v,
            VenueChange::Website(v) => self.website = v,
            VenueChange::SeekingTalent(v) => self.seeking_talent = v,
            VenueChange::SeekingDescription(v) => self.seeking_description = v,
        }
    }

    /// Current values, used to pre-populate the edit form
    pub fn to_fields(&self) -> VenueFields {
        VenueFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            facebook_link: self.facebook_link.clone(),
            image_link: self.image_link.clone(),
            website: self.website.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Editable artist columns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// One artist column overwrite
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistChange {
    Name(String),
    City(String),
    State(String),
    Phone(Option<String>),
    Genres(Vec<String>),
    FacebookLink(Option<String>),
    ImageLink(Option<String>),
    Website(Option<String>),
    SeekingVenue(bool),
    SeekingDescription(Option<String>),
}

impl ArtistFields {
    pub fn into_changes(self) -> Vec<ArtistChange> {
        vec![
            ArtistChange::Name(self.name),
            ArtistChange::City(self.city),
            ArtistChange::State(self.state),
            ArtistChange::Phone(self.phone),
            ArtistChange::Genres(self.genres),
            ArtistChange::FacebookLink(self.facebook_link),
            ArtistChange::ImageLink(self.image_link),
            ArtistChange::Website(self.website),
            ArtistChange::SeekingVenue(self.seeking_venue),
            ArtistChange::SeekingDescription(self.seeking_description),
        ]
    }
}

impl Artist {
    pub fn apply(&mut self, change: ArtistChange) {
        match change {
            ArtistChange::Name(v) => self.name = v,
            ArtistChange::City(v) => self.city = v,
            ArtistChange::State(v) => self.state = v,
            ArtistChange::Phone(v) => self.phone = v,
            ArtistChange::Genres(v) => self.genres = v,
            ArtistChange::FacebookLink(v) => self.facebook_link = v,
            ArtistChange::ImageLink(v) => self.image_link = v,
            ArtistChange::Website(v) => self.website = v,
            ArtistChange::SeekingVenue(v) => self.seeking_venue = v,
            ArtistChange::SeekingDescription(v) => self.seeking_description = v,
        }
    }

    pub fn to_fields(&self) -> ArtistFields {
        ArtistFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            facebook_link: self.facebook_link.clone(),
            image_link: self.image_link.clone(),
            website: self.website.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description.clone(),
        }
    }
}

/// Validated input for a new show
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show joined with the names and images of its artist and venue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// Minimal projection used by listings and search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}
