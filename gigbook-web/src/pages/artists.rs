//! Artist pages

use askama::Template;
use gigbook_common::db::{Artist, EntitySummary, ShowListing};
use gigbook_common::ShowSchedule;

use super::widgets::{show_cards, Counterpart, FormField, ShowCard};
use super::{FormPage, PageContext, SearchPage};
use crate::forms::{ArtistForm, FieldErrors};

#[derive(Template)]
#[template(path = "artists.html")]
pub struct ArtistListing {
    pub ctx: PageContext,
    pub artists: Vec<Artist>,
}

#[derive(Template)]
#[template(path = "artist.html")]
pub struct ArtistDetail {
    pub ctx: PageContext,
    pub artist: Artist,
    pub upcoming: Vec<ShowCard>,
    pub past: Vec<ShowCard>,
}

pub fn listing_page(ctx: PageContext, artists: Vec<Artist>) -> ArtistListing {
    ArtistListing { ctx, artists }
}

pub fn search_page(ctx: PageContext, term: String, results: Vec<EntitySummary>) -> SearchPage {
    SearchPage {
        ctx,
        heading: "Artists",
        base: "/artists",
        term,
        results,
    }
}

pub fn detail_page(
    ctx: PageContext,
    artist: Artist,
    schedule: ShowSchedule<ShowListing>,
) -> ArtistDetail {
    ArtistDetail {
        ctx,
        artist,
        upcoming: show_cards(schedule.upcoming, Counterpart::Venue),
        past: show_cards(schedule.past, Counterpart::Venue),
    }
}

pub fn form_page(
    ctx: PageContext,
    heading: &str,
    action: String,
    form: &ArtistForm,
    errors: &FieldErrors,
) -> FormPage {
    FormPage {
        ctx,
        heading: heading.to_string(),
        action,
        submit: heading.to_string(),
        fields: vec![
            FormField::text("name", "Name", &form.name, errors),
            FormField::text("city", "City", &form.city, errors),
            FormField::state(&form.state, errors),
            FormField::text("phone", "Phone", &form.phone, errors),
            FormField::genres(&form.genres, errors),
            FormField::text("facebook_link", "Facebook Link", &form.facebook_link, errors),
            FormField::text("image_link", "Image Link", &form.image_link, errors),
            FormField::text("website", "Website", &form.website, errors),
            FormField::checkbox("seeking_venue", "Seeking venues", form.seeking_venue),
            FormField::textarea(
                "seeking_description",
                "Seeking Description",
                &form.seeking_description,
                errors,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_links_each_artist() {
        let artist = Artist {
            id: 7,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec!["Rock n Roll".to_string()],
            facebook_link: None,
            image_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        };

        let html = listing_page(PageContext::new("1.abc".to_string(), None), vec![artist])
            .render()
            .unwrap();

        assert!(html.contains(r#"<a href="/artists/7">Guns N Petals</a>"#));
        assert!(!html.contains("No artists listed yet."));
    }

    #[test]
    fn test_edit_form_checks_seeking_box() {
        let form = ArtistForm {
            seeking_venue: true,
            ..Default::default()
        };

        let html = form_page(
            PageContext::new("1.abc".to_string(), None),
            "Edit artist",
            "/artists/7/edit".to_string(),
            &form,
            &FieldErrors::new(),
        )
        .render()
        .unwrap();

        assert!(html.contains("<h1>Edit artist</h1>"));
        assert!(html.contains(r#"name="seeking_venue" value="y" checked>"#));
        assert!(!html.contains("field-error"));
    }
}
