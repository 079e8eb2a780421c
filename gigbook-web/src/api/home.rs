//! Home page and fallback

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;

use super::page_context;
use crate::pages::{home::HomePage, render};
use crate::{AppState, WebError, WebResult};

/// GET /
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&HomePage { ctx })?).into_response())
}

/// Any unmatched route
pub async fn not_found_page() -> WebError {
    WebError::NotFound("page".to_string())
}

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
