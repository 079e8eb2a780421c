//! Venue create/edit form

use gigbook_common::db::{Venue, VenueFields};

use super::validate::{self, LONG_TEXT_MAX, SHORT_TEXT_MAX};
use super::{FieldErrors, FormData};

/// Raw venue form values, kept as submitted so the form can be re-rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            genres: data.get_all("genres").into_iter().map(str::to_string).collect(),
            facebook_link: data.text("facebook_link"),
            image_link: data.text("image_link"),
            website: data.text("website"),
            seeking_talent: validate::checkbox(data.get("seeking_talent")),
            seeking_description: data.text("seeking_description"),
        }
    }

    /// Pre-populated from an existing venue, for the edit page
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        let e = &mut errors;

        let name = validate::required_text(e, "name", &self.name, SHORT_TEXT_MAX);
        let city = validate::required_text(e, "city", &self.city, SHORT_TEXT_MAX);
        let state = validate::state(e, "state", &self.state);
        let address = validate::required_text(e, "address", &self.address, SHORT_TEXT_MAX);
        let phone = validate::phone(e, "phone", &self.phone);
        let genre_values: Vec<&str> = self.genres.iter().map(String::as_str).collect();
        let genres = validate::genres(e, "genres", &genre_values);
        let image_link = validate::optional_url(e, "image_link", &self.image_link, "Invalid Image Link");
        let facebook_link =
            validate::optional_url(e, "facebook_link", &self.facebook_link, "Invalid Facebook Link");
        let website = validate::optional_url(e, "website", &self.website, "Invalid Website Link");
        let seeking_description = validate::optional_text(
            e,
            "seeking_description",
            &self.seeking_description,
            LONG_TEXT_MAX,
        );

        match (name, city, state, address) {
            (Some(name), Some(city), Some(state), Some(address)) if errors.is_empty() => {
                Ok(VenueFields {
                    name,
                    city,
                    state,
                    address,
                    phone,
                    genres,
                    facebook_link,
                    image_link,
                    website,
                    seeking_talent: self.seeking_talent,
                    seeking_description,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> &'static [u8] {
        b"name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street\
          &phone=123-123-1234&genres=Jazz&genres=Reggae\
          &website=https%3A%2F%2Fwww.themusicalhop.com&seeking_talent=y\
          &seeking_description=Local+acts+wanted"
    }

    #[test]
    fn test_valid_submission() {
        let form = VenueForm::from_data(&FormData::parse(valid_body()));
        let fields = form.validate().unwrap();

        assert_eq!(fields.name, "The Musical Hop");
        assert_eq!(fields.genres, vec!["Jazz".to_string(), "Reggae".to_string()]);
        assert_eq!(fields.phone.as_deref(), Some("123-123-1234"));
        assert_eq!(fields.website.as_deref(), Some("https://www.themusicalhop.com"));
        assert_eq!(fields.image_link, None);
        assert!(fields.seeking_talent);
    }

    #[test]
    fn test_missing_name_reports_field_error() {
        let mut form = VenueForm::from_data(&FormData::parse(valid_body()));
        form.name.clear();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), ["This field is required."]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_bad_links_and_phone() {
        let mut form = VenueForm::from_data(&FormData::parse(valid_body()));
        form.phone = "555".to_string();
        form.image_link = "not a url".to_string();
        form.facebook_link = "facebook.com/hop".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("phone"), ["Invalid phone number format"]);
        assert_eq!(errors.get("image_link"), ["Invalid Image Link"]);
        assert_eq!(errors.get("facebook_link"), ["Invalid Facebook Link"]);
    }

    #[test]
    fn test_edit_form_round_trips_venue() {
        let form = VenueForm::from_data(&FormData::parse(valid_body()));
        let fields = form.validate().unwrap();
        let venue = Venue {
            id: 1,
            name: fields.name.clone(),
            city: fields.city.clone(),
            state: fields.state.clone(),
            address: fields.address.clone(),
            phone: fields.phone.clone(),
            genres: fields.genres.clone(),
            facebook_link: fields.facebook_link.clone(),
            image_link: fields.image_link.clone(),
            website: fields.website.clone(),
            seeking_talent: fields.seeking_talent,
            seeking_description: fields.seeking_description.clone(),
        };

        assert_eq!(VenueForm::from_venue(&venue), form);
    }
}
