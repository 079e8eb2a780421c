//! Show pages

use askama::Template;
use gigbook_common::db::ShowListing;
use gigbook_common::time::{format_datetime, DateStyle};

use super::widgets::FormField;
use super::{FormPage, PageContext};
use crate::forms::{FieldErrors, ShowForm};

/// A listed show with its display time
pub struct ShowRow {
    pub show: ShowListing,
    pub when: String,
}

#[derive(Template)]
#[template(path = "shows.html")]
pub struct ShowsListing {
    pub ctx: PageContext,
    pub rows: Vec<ShowRow>,
}

pub fn listing_page(ctx: PageContext, shows: Vec<ShowListing>) -> ShowsListing {
    let rows = shows
        .into_iter()
        .map(|show| ShowRow {
            when: format_datetime(&show.start_time, DateStyle::Medium),
            show,
        })
        .collect();
    ShowsListing { ctx, rows }
}

pub fn form_page(ctx: PageContext, form: &ShowForm, errors: &FieldErrors) -> FormPage {
    FormPage {
        ctx,
        heading: "List a new show".to_string(),
        action: "/shows/create".to_string(),
        submit: "Create Show".to_string(),
        fields: vec![
            FormField::text("artist_id", "Artist ID", &form.artist_id, errors),
            FormField::text("venue_id", "Venue ID", &form.venue_id, errors),
            FormField::text(
                "start_time",
                "Start Time (YYYY-MM-DD HH:MM:SS)",
                &form.start_time,
                errors,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigbook_common::time::parse_start_time;

    #[test]
    fn test_listing_uses_medium_dates() {
        let show = ShowListing {
            show_id: 1,
            venue_id: 2,
            venue_name: "Park Square Live Music & Coffee".to_string(),
            venue_image_link: None,
            artist_id: 3,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time: parse_start_time("2035-05-21 21:30").unwrap(),
        };

        let html = listing_page(PageContext::new("1.abc".to_string(), None), vec![show])
            .render()
            .unwrap();

        assert!(html.contains("Mon 05, 21, 2035 9:30PM"));
        assert!(html.contains("Park Square Live Music &amp; Coffee"));
        assert!(html.contains(r#"href="/venues/2""#));
    }
}
