//! Error pages

use askama::Template;
use axum::http::StatusCode;

use super::PageContext;

/// Full error page; rendered without a token since no state is at hand
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub ctx: PageContext,
    pub code: u16,
    pub title: &'static str,
    pub message: &'static str,
    pub detail: Option<String>,
}

/// Error page for `status`, with an optional reason line
pub fn error_page(status: StatusCode, detail: Option<String>) -> ErrorPage {
    let (title, message) = match status {
        StatusCode::NOT_FOUND => ("Not Found", "The page you were looking for does not exist."),
        StatusCode::BAD_REQUEST => ("Bad Request", "The request could not be processed."),
        _ => (
            "Server Error",
            "Something went wrong on our side. Please try again later.",
        ),
    };
    ErrorPage {
        ctx: PageContext::default(),
        code: status.as_u16(),
        title,
        message,
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page() {
        let html = error_page(StatusCode::NOT_FOUND, None).render().unwrap();
        assert!(html.contains("404 Not Found"));
        assert!(!html.contains("search_term"));
    }

    #[test]
    fn test_bad_request_shows_reason() {
        let page = error_page(
            StatusCode::BAD_REQUEST,
            Some("The CSRF token is missing.".to_string()),
        );
        let html = page.render().unwrap();
        assert!(html.contains("400 Bad Request"));
        assert!(html.contains("The CSRF token is missing."));
    }
}
