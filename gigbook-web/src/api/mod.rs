//! HTTP handlers for gigbook-web

pub mod artists;
pub mod csrf;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use csrf::csrf_middleware;
pub use health::health_routes;
pub use home::{home_routes, not_found_page};
pub use shows::show_routes;
pub use venues::venue_routes;

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::flash::{self, Flash};
use crate::pages::PageContext;
use crate::{AppState, WebError, WebResult};

/// Parse a path id; anything that is not a positive integer is a 404
pub(crate) fn parse_id(raw: &str, kind: &str) -> WebResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| WebError::NotFound(format!("{} {}", kind, raw)))
}

/// Consume the pending flash and issue a token for the page's forms
pub(crate) fn page_context(state: &AppState, jar: CookieJar) -> (CookieJar, PageContext) {
    let (jar, flash) = flash::take(jar);
    (jar, PageContext::new(state.csrf_token(), flash))
}

/// 303 redirect carrying a flash message
pub(crate) fn redirect_with_flash(jar: CookieJar, to: &str, message: Flash) -> Response {
    (flash::set(jar, message), Redirect::to(to)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "venue").unwrap(), 12);
        assert!(matches!(parse_id("0", "venue"), Err(WebError::NotFound(_))));
        assert!(matches!(parse_id("abc", "venue"), Err(WebError::NotFound(_))));
    }
}
