//! Show handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use gigbook_common::db::{artists, shows, venues, NewShow};
use gigbook_common::time::now;
use tracing::{error, info};

use super::{page_context, redirect_with_flash};
use crate::flash::Flash;
use crate::forms::show::{ShowInput, NO_SUCH_ARTIST, NO_SUCH_VENUE};
use crate::forms::{FieldErrors, FormData, ShowForm};
use crate::pages::{render, shows as page};
use crate::{AppState, WebResult};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    let listing = shows::list(&state.db).await?;
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::listing_page(ctx, listing))?).into_response())
}

/// GET /shows/create
pub async fn create_show_form(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    let (jar, ctx) = page_context(&state, jar);
    let page = page::form_page(ctx, &ShowForm::with_start_time(now()), &FieldErrors::new());
    Ok((jar, render(&page)?).into_response())
}

/// Syntax check, then confirm both parents exist
async fn validate_show(
    state: &AppState,
    form: &ShowForm,
) -> gigbook_common::Result<Result<ShowInput, FieldErrors>> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return Ok(Err(errors)),
    };

    let mut errors = FieldErrors::new();
    if !artists::exists(&state.db, input.artist_id).await? {
        errors.add("artist_id", NO_SUCH_ARTIST);
    }
    if !venues::exists(&state.db, input.venue_id).await? {
        errors.add("venue_id", NO_SUCH_VENUE);
    }

    Ok(if errors.is_empty() { Ok(input) } else { Err(errors) })
}

fn listing_failed(jar: CookieJar) -> Response {
    redirect_with_flash(
        jar,
        "/",
        Flash::error("An error occurred. Show could not be listed."),
    )
}

/// POST /shows/create
pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    data: FormData,
) -> WebResult<Response> {
    let form = ShowForm::from_data(&data);
    let input = match validate_show(&state, &form).await {
        Ok(Ok(input)) => input,
        Ok(Err(errors)) => {
            let (jar, ctx) = page_context(&state, jar);
            let page = page::form_page(ctx, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, render(&page)?).into_response());
        }
        Err(e) => {
            error!("Failed to check show parents: {}", e);
            return Ok(listing_failed(jar));
        }
    };

    let new_show = NewShow {
        artist_id: input.artist_id,
        venue_id: input.venue_id,
        start_time: input.start_time,
    };
    let response = match shows::create(&state.db, &new_show).await {
        Ok(id) => {
            info!(
                "Show {} listed (artist {} at venue {})",
                id, new_show.artist_id, new_show.venue_id
            );
            redirect_with_flash(jar, "/shows", Flash::success("Show was successfully listed!"))
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            listing_failed(jar)
        }
    };
    Ok(response)
}

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
}
