//! View models shared by the entity pages

use gigbook_common::choices::{GENRES, STATES};
use gigbook_common::db::ShowListing;
use gigbook_common::time::{format_datetime, DateStyle};

use crate::forms::FieldErrors;

/// How `field.html` draws a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select,
    MultiSelect,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }
}

/// One labelled input with its submitted value and validation messages
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub checked: bool,
    pub errors: Vec<String>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, errors: &FieldErrors) -> Self {
        Self {
            name,
            label,
            kind,
            value: String::new(),
            options: Vec::new(),
            checked: false,
            errors: errors.get(name).to_vec(),
        }
    }

    pub fn text(name: &'static str, label: &'static str, value: &str, errors: &FieldErrors) -> Self {
        Self {
            value: value.to_string(),
            ..Self::new(name, label, FieldKind::Text, errors)
        }
    }

    pub fn textarea(
        name: &'static str,
        label: &'static str,
        value: &str,
        errors: &FieldErrors,
    ) -> Self {
        Self {
            value: value.to_string(),
            ..Self::new(name, label, FieldKind::TextArea, errors)
        }
    }

    /// US state dropdown with a blank prompt first
    pub fn state(value: &str, errors: &FieldErrors) -> Self {
        let mut options = vec![SelectOption {
            value: String::new(),
            label: "Choose a state".to_string(),
            selected: value.is_empty(),
        }];
        options.extend(STATES.iter().map(|s| SelectOption::new(s, *s == value)));
        Self {
            options,
            ..Self::new("state", "State", FieldKind::Select, errors)
        }
    }

    pub fn genres(selected: &[String], errors: &FieldErrors) -> Self {
        let options = GENRES
            .iter()
            .map(|g| SelectOption::new(g, selected.iter().any(|s| s == g)))
            .collect();
        Self {
            options,
            ..Self::new("genres", "Genres", FieldKind::MultiSelect, errors)
        }
    }

    pub fn checkbox(name: &'static str, label: &'static str, checked: bool) -> Self {
        Self {
            checked,
            ..Self::new(name, label, FieldKind::Checkbox, &FieldErrors::new())
        }
    }
}

/// Which side of a show to describe on a detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Artist,
    Venue,
}

/// A show as seen from a venue or artist page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    pub href: String,
    pub name: String,
    pub image_link: Option<String>,
    pub when: String,
}

impl ShowCard {
    pub fn new(show: ShowListing, counterpart: Counterpart) -> Self {
        let when = format_datetime(&show.start_time, DateStyle::Full);
        match counterpart {
            Counterpart::Artist => Self {
                href: format!("/artists/{}", show.artist_id),
                name: show.artist_name,
                image_link: show.artist_image_link,
                when,
            },
            Counterpart::Venue => Self {
                href: format!("/venues/{}", show.venue_id),
                name: show.venue_name,
                image_link: show.venue_image_link,
                when,
            },
        }
    }
}

pub fn show_cards(shows: Vec<ShowListing>, counterpart: Counterpart) -> Vec<ShowCard> {
    shows
        .into_iter()
        .map(|show| ShowCard::new(show, counterpart))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigbook_common::time::parse_start_time;

    #[test]
    fn test_text_field_carries_value_and_errors() {
        let mut errors = FieldErrors::new();
        errors.add("name", "This field is required.");

        let field = FormField::text("name", "Name", "A \"quoted\" name", &errors);

        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.value, "A \"quoted\" name");
        assert_eq!(field.errors, vec!["This field is required.".to_string()]);
    }

    #[test]
    fn test_genre_field_marks_selection() {
        let field = FormField::genres(&["R&B".to_string()], &FieldErrors::new());

        let selected: Vec<&str> = field
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["R&B"]);
        assert_eq!(field.options.len(), GENRES.len());
    }

    #[test]
    fn test_state_field_prompts_when_blank() {
        let blank = FormField::state("", &FieldErrors::new());
        assert!(blank.options[0].selected);

        let chosen = FormField::state("NY", &FieldErrors::new());
        assert!(!chosen.options[0].selected);
        assert!(chosen.options.iter().any(|o| o.value == "NY" && o.selected));
    }

    #[test]
    fn test_show_card_describes_counterpart() {
        let show = ShowListing {
            show_id: 1,
            venue_id: 2,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
            artist_id: 3,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: Some("https://images.example.com/gnp.jpg".to_string()),
            start_time: parse_start_time("2035-05-21 21:30:00").unwrap(),
        };

        let card = ShowCard::new(show.clone(), Counterpart::Artist);
        assert_eq!(card.href, "/artists/3");
        assert_eq!(card.name, "Guns N Petals");
        assert_eq!(card.when, "Monday May, 21, 2035 at 9:30PM");

        let card = ShowCard::new(show, Counterpart::Venue);
        assert_eq!(card.href, "/venues/2");
        assert!(card.image_link.is_none());
    }
}
