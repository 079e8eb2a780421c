//! Venue pages

use askama::Template;
use gigbook_common::db::{EntitySummary, Place, ShowListing, Venue};
use gigbook_common::ShowSchedule;

use super::widgets::{show_cards, Counterpart, FormField, ShowCard};
use super::{FormPage, PageContext, SearchPage};
use crate::forms::{FieldErrors, VenueForm};

/// Venues grouped under their city and state
#[derive(Template)]
#[template(path = "venues.html")]
pub struct VenueListing {
    pub ctx: PageContext,
    pub places: Vec<Place>,
}

#[derive(Template)]
#[template(path = "venue.html")]
pub struct VenueDetail {
    pub ctx: PageContext,
    pub venue: Venue,
    pub upcoming: Vec<ShowCard>,
    pub past: Vec<ShowCard>,
}

pub fn listing_page(ctx: PageContext, places: Vec<Place>) -> VenueListing {
    VenueListing { ctx, places }
}

pub fn search_page(ctx: PageContext, term: String, results: Vec<EntitySummary>) -> SearchPage {
    SearchPage {
        ctx,
        heading: "Venues",
        base: "/venues",
        term,
        results,
    }
}

pub fn detail_page(
    ctx: PageContext,
    venue: Venue,
    schedule: ShowSchedule<ShowListing>,
) -> VenueDetail {
    VenueDetail {
        ctx,
        venue,
        upcoming: show_cards(schedule.upcoming, Counterpart::Artist),
        past: show_cards(schedule.past, Counterpart::Artist),
    }
}

/// Create or edit form; `action` is where the form posts
pub fn form_page(
    ctx: PageContext,
    heading: &str,
    action: String,
    form: &VenueForm,
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
            FormField::text("address", "Address", &form.address, errors),
            FormField::text("phone", "Phone", &form.phone, errors),
            FormField::genres(&form.genres, errors),
            FormField::text("facebook_link", "Facebook Link", &form.facebook_link, errors),
            FormField::text("image_link", "Image Link", &form.image_link, errors),
            FormField::text("website", "Website", &form.website, errors),
            FormField::checkbox("seeking_talent", "Seeking talent", form.seeking_talent),
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
    use gigbook_common::time::parse_start_time;

    fn venue() -> Venue {
        Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string(), "R&B".to_string()],
            facebook_link: None,
            image_link: None,
            website: Some("https://www.themusicalhop.com".to_string()),
            seeking_talent: true,
            seeking_description: Some("Looking for <loud> bands".to_string()),
        }
    }

    #[test]
    fn test_detail_page_lists_schedule() {
        let now = parse_start_time("2030-01-01 12:00").unwrap();
        let show = ShowListing {
            show_id: 9,
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
            artist_id: 4,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time: parse_start_time("2030-02-01 20:00").unwrap(),
        };
        let schedule = ShowSchedule::partition(vec![show], now);

        let html = detail_page(PageContext::new("1.abc".to_string(), None), venue(), schedule)
            .render()
            .unwrap();

        assert!(html.contains("<title>The Musical Hop | gigbook</title>"));
        assert!(html.contains("1 Upcoming Shows"));
        assert!(html.contains("0 Past Shows"));
        assert!(html.contains("The Wild Sax Band"));
        assert!(html.contains(r#"<span class="genre">R&amp;B</span>"#));
        assert!(html.contains("Looking for &lt;loud&gt; bands"));
        assert!(html.contains("No Phone"));
        assert!(html.contains(r#"action="/venues/1""#));
    }

    #[test]
    fn test_form_page_shows_errors_next_to_fields() {
        let form = VenueForm {
            name: "Park Square Live Music & Coffee".to_string(),
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        errors.add("city", "This field is required.");

        let html = form_page(
            PageContext::new("1.abc".to_string(), None),
            "List a new venue",
            "/venues/create".to_string(),
            &form,
            &errors,
        )
        .render()
        .unwrap();

        assert!(html.contains(r#"value="Park Square Live Music &amp; Coffee""#));
        assert!(html.contains("<li>This field is required.</li>"));
        assert!(html.contains(r#"<option value="R&amp;B">R&amp;B</option>"#));
        assert!(html.contains(r#"name="seeking_talent" value="y">"#));
    }
}
