//! Venue handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use gigbook_common::db::{shows, venues};
use gigbook_common::time::now;
use gigbook_common::ShowSchedule;
use tracing::{error, info};

use super::{page_context, parse_id, redirect_with_flash};
use crate::flash::Flash;
use crate::forms::{FieldErrors, FormData, VenueForm};
use crate::pages::{render, venues as page};
use crate::{AppState, WebError, WebResult};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    let places = venues::list_places(&state.db, now()).await?;
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::listing_page(ctx, places))?).into_response())
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    jar: CookieJar,
    data: FormData,
) -> WebResult<Response> {
    let term = data.get("search_term").unwrap_or_default().to_string();
    let results = venues::search_by_name(&state.db, &term, now()).await?;
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::search_page(ctx, term, results))?).into_response())
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "venue")?;
    let venue = venues::get(&state.db, id).await?;
    let listings = shows::for_venue(&state.db, id).await?;
    let schedule = ShowSchedule::partition(listings, now());

    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::detail_page(ctx, venue, schedule))?).into_response())
}

/// GET /venues/create
pub async fn create_venue_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> WebResult<Response> {
    let (jar, ctx) = page_context(&state, jar);
    let page = page::form_page(
        ctx,
        "List a new venue",
        "/venues/create".to_string(),
        &VenueForm::default(),
        &FieldErrors::new(),
    );
    Ok((jar, render(&page)?).into_response())
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    data: FormData,
) -> WebResult<Response> {
    let form = VenueForm::from_data(&data);
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let (jar, ctx) = page_context(&state, jar);
            let action = "/venues/create".to_string();
            let page = page::form_page(ctx, "List a new venue", action, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, render(&page)?).into_response());
        }
    };

    let response = match venues::create(&state.db, &fields).await {
        Ok(id) => {
            info!("Venue {} ({}) listed", id, fields.name);
            redirect_with_flash(
                jar,
                "/venues",
                Flash::success(format!("Venue {} was successfully listed!", fields.name)),
            )
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", fields.name, e);
            redirect_with_flash(
                jar,
                "/",
                Flash::error(format!(
                    "An error occurred. Venue {} could not be listed.",
                    fields.name
                )),
            )
        }
    };
    Ok(response)
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "venue")?;
    let venue = venues::get(&state.db, id).await?;

    let (jar, ctx) = page_context(&state, jar);
    let page = page::form_page(
        ctx,
        "Edit venue",
        format!("/venues/{}/edit", id),
        &VenueForm::from_venue(&venue),
        &FieldErrors::new(),
    );
    Ok((jar, render(&page)?).into_response())
}

/// POST /venues/:id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    data: FormData,
) -> WebResult<Response> {
    let id = parse_id(&id, "venue")?;
    let form = VenueForm::from_data(&data);

    match venues::exists(&state.db, id).await {
        Ok(true) => {}
        Ok(false) => return Err(WebError::NotFound(format!("venue {}", id))),
        Err(e) => {
            error!("Failed to look up venue {}: {}", id, e);
            return Ok(update_failed(jar, &form.name));
        }
    }

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let (jar, ctx) = page_context(&state, jar);
            let action = format!("/venues/{}/edit", id);
            let page = page::form_page(ctx, "Edit venue", action, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, render(&page)?).into_response());
        }
    };

    match venues::update(&state.db, id, fields.into_changes()).await {
        Ok(venue) => {
            info!("Venue {} ({}) updated", id, venue.name);
            Ok(redirect_with_flash(
                jar,
                &format!("/venues/{}", id),
                Flash::success(format!("Venue {} was successfully updated!", venue.name)),
            ))
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            Ok(update_failed(jar, &form.name))
        }
    }
}

fn update_failed(jar: CookieJar, name: &str) -> Response {
    redirect_with_flash(
        jar,
        "/",
        Flash::error(format!("An error occurred. Venue {} could not be updated.", name)),
    )
}

/// POST or DELETE /venues/:id
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "venue")?;
    match venues::delete(&state.db, id).await {
        Ok(venue) => {
            info!("Venue {} ({}) deleted with its shows", id, venue.name);
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::success(format!("Venue {} was successfully deleted.", venue.name)),
            ))
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::error("An error occurred. Venue could not be deleted."),
            ))
        }
    }
}

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(show_venue).post(delete_venue).delete(delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
}
