//! Server-rendered HTML pages
//!
//! Every page is an askama template under `templates/` extending
//! `base.html`. Askama escapes interpolated values, so page structs carry
//! plain data.

pub mod artists;
pub mod errors;
pub mod home;
pub mod shows;
pub mod venues;
pub mod widgets;

use askama::Template;
use axum::response::Html;
use gigbook_common::db::EntitySummary;

use crate::flash::Flash;
use crate::{WebError, WebResult};
pub use widgets::{FieldKind, FormField, SelectOption, ShowCard};

/// Per-request values the layout needs
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Token for the forms on the page; error pages render without one
    pub csrf_token: Option<String>,
    pub flash: Option<Flash>,
}

impl PageContext {
    pub fn new(csrf_token: String, flash: Option<Flash>) -> Self {
        Self {
            csrf_token: Some(csrf_token),
            flash,
        }
    }

    pub fn token(&self) -> &str {
        self.csrf_token.as_deref().unwrap_or_default()
    }
}

/// Render a page into a response body
pub fn render<T: Template>(page: &T) -> WebResult<Html<String>> {
    page.render()
        .map(Html)
        .map_err(|e| WebError::Internal(format!("Failed to render page: {}", e)))
}

/// Create and edit form for any entity
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    pub ctx: PageContext,
    pub heading: String,
    pub action: String,
    pub submit: String,
    pub fields: Vec<FormField>,
}

/// Name search results, linked under `base`
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub ctx: PageContext,
    pub heading: &'static str,
    pub base: &'static str,
    pub term: String,
    pub results: Vec<EntitySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(ctx: PageContext, term: &str) -> String {
        SearchPage {
            ctx,
            heading: "Venues",
            base: "/venues",
            term: term.to_string(),
            results: vec![EntitySummary {
                id: 3,
                name: "Park Square Live Music & Coffee".to_string(),
                num_upcoming_shows: 2,
            }],
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_layout_includes_flash_and_search_forms() {
        let ctx = PageContext::new(
            "1.abc".to_string(),
            Some(Flash::success("Venue <X> was successfully listed!")),
        );
        let html = search(ctx, "Music");

        assert!(html.contains("<title>Venues Search | gigbook</title>"));
        assert!(html.contains(r#"class="flash flash-success""#));
        assert!(html.contains("Venue &lt;X&gt; was successfully listed!"));
        assert!(html.contains(r#"action="/venues/search""#));
        assert!(html.contains(r#"value="1.abc""#));
    }

    #[test]
    fn test_search_results_are_escaped() {
        let html = search(PageContext::new("1.abc".to_string(), None), "<script>");

        assert!(html.contains(r#"Number of search results for "&lt;script&gt;": 1"#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Park Square Live Music &amp; Coffee"));
        assert!(html.contains("(2 upcoming)"));
    }

    #[test]
    fn test_layout_without_token_omits_search() {
        let html = search(PageContext::default(), "Hop");
        assert!(!html.contains("search_term"));
    }
}
