//! Artist create/edit form

use gigbook_common::db::{Artist, ArtistFields};

use super::validate::{self, LONG_TEXT_MAX, SHORT_TEXT_MAX};
use super::{FieldErrors, FormData};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub image_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            genres: data.get_all("genres").into_iter().map(str::to_string).collect(),
            facebook_link: data.text("facebook_link"),
            image_link: data.text("image_link"),
            website: data.text("website"),
            seeking_venue: validate::checkbox(data.get("seeking_venue")),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistFields, FieldErrors> {
        let mut errors = FieldErrors::new();
        let e = &mut errors;

        let name = validate::required_text(e, "name", &self.name, SHORT_TEXT_MAX);
        let city = validate::required_text(e, "city", &self.city, SHORT_TEXT_MAX);
        let state = validate::state(e, "state", &self.state);
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

        match (name, city, state) {
            (Some(name), Some(city), Some(state)) if errors.is_empty() => Ok(ArtistFields {
                name,
                city,
                state,
                phone,
                genres,
                facebook_link,
                image_link,
                website,
                seeking_venue: self.seeking_venue,
                seeking_description,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_artist() {
        let data = FormData::parse(
            b"name=Guns+N+Petals&city=San+Francisco&state=CA&phone=326-123-5000\
              &genres=Rock+n+Roll&seeking_venue=on",
        );
        let fields = ArtistForm::from_data(&data).validate().unwrap();

        assert_eq!(fields.name, "Guns N Petals");
        assert_eq!(fields.genres, vec!["Rock n Roll".to_string()]);
        assert!(fields.seeking_venue);
        assert_eq!(fields.seeking_description, None);
    }

    #[test]
    fn test_unknown_genre_and_state() {
        let data = FormData::parse(
            b"name=Guns+N+Petals&city=San+Francisco&state=XX&phone=326-123-5000&genres=Polka",
        );
        let errors = ArtistForm::from_data(&data).validate().unwrap_err();

        assert_eq!(errors.get("state"), ["Not a valid choice."]);
        assert_eq!(errors.get("genres"), ["'Polka' is not a valid choice for this field."]);
    }

    #[test]
    fn test_no_genres_selected() {
        let data = FormData::parse(b"name=Solo&city=Austin&state=TX&phone=512-555-0100");
        let errors = ArtistForm::from_data(&data).validate().unwrap_err();
        assert_eq!(errors.get("genres"), ["This field is required."]);
    }
}
