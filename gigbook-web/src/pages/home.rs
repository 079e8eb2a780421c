//! Home page

use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub ctx: PageContext,
}
