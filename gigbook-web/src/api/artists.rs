//! Artist handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use gigbook_common::db::{artists, shows};
use gigbook_common::time::now;
use gigbook_common::ShowSchedule;
use tracing::{error, info};

use super::{page_context, parse_id, redirect_with_flash};
use crate::flash::Flash;
use crate::forms::{ArtistForm, FieldErrors, FormData};
use crate::pages::{artists as page, render};
use crate::{AppState, WebError, WebResult};

const CREATE_HEADING: &str = "List a new artist";
const EDIT_HEADING: &str = "Edit artist";

/// GET /artists
pub async fn list_artists(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    let all = artists::list(&state.db).await?;
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::listing_page(ctx, all))?).into_response())
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    jar: CookieJar,
    data: FormData,
) -> WebResult<Response> {
    let term = data.get("search_term").unwrap_or_default().to_string();
    let results = artists::search_by_name(&state.db, &term, now()).await?;
    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::search_page(ctx, term, results))?).into_response())
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "artist")?;
    let artist = artists::get(&state.db, id).await?;
    let schedule = ShowSchedule::partition(shows::for_artist(&state.db, id).await?, now());

    let (jar, ctx) = page_context(&state, jar);
    Ok((jar, render(&page::detail_page(ctx, artist, schedule))?).into_response())
}

/// GET /artists/create
pub async fn create_artist_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> WebResult<Response> {
    let (jar, ctx) = page_context(&state, jar);
    let page = page::form_page(
        ctx,
        CREATE_HEADING,
        "/artists/create".to_string(),
        &ArtistForm::default(),
        &FieldErrors::new(),
    );
    Ok((jar, render(&page)?).into_response())
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    data: FormData,
) -> WebResult<Response> {
    let form = ArtistForm::from_data(&data);
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let (jar, ctx) = page_context(&state, jar);
            let action = "/artists/create".to_string();
            let page = page::form_page(ctx, CREATE_HEADING, action, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, render(&page)?).into_response());
        }
    };

    let response = match artists::create(&state.db, &fields).await {
        Ok(id) => {
            info!("Artist {} ({}) listed", id, fields.name);
            redirect_with_flash(
                jar,
                "/artists",
                Flash::success(format!("Artist {} was successfully listed!", fields.name)),
            )
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", fields.name, e);
            redirect_with_flash(
                jar,
                "/",
                Flash::error(format!(
                    "An error occurred. Artist {} could not be listed.",
                    fields.name
                )),
            )
        }
    };
    Ok(response)
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "artist")?;
    let artist = artists::get(&state.db, id).await?;

    let (jar, ctx) = page_context(&state, jar);
    let page = page::form_page(
        ctx,
        EDIT_HEADING,
        format!("/artists/{}/edit", id),
        &ArtistForm::from_artist(&artist),
        &FieldErrors::new(),
    );
    Ok((jar, render(&page)?).into_response())
}

/// POST /artists/:id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    data: FormData,
) -> WebResult<Response> {
    let id = parse_id(&id, "artist")?;
    let form = ArtistForm::from_data(&data);

    match artists::exists(&state.db, id).await {
        Ok(true) => {}
        Ok(false) => return Err(WebError::NotFound(format!("artist {}", id))),
        Err(e) => {
            error!("Failed to look up artist {}: {}", id, e);
            return Ok(update_failed(jar, &form.name));
        }
    }

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let (jar, ctx) = page_context(&state, jar);
            let action = format!("/artists/{}/edit", id);
            let page = page::form_page(ctx, EDIT_HEADING, action, &form, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, render(&page)?).into_response());
        }
    };

    match artists::update(&state.db, id, fields.into_changes()).await {
        Ok(artist) => {
            info!("Artist {} ({}) updated", id, artist.name);
            Ok(redirect_with_flash(
                jar,
                &format!("/artists/{}", id),
                Flash::success(format!("Artist {} was successfully updated!", artist.name)),
            ))
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            Ok(update_failed(jar, &form.name))
        }
    }
}

fn update_failed(jar: CookieJar, name: &str) -> Response {
    redirect_with_flash(
        jar,
        "/",
        Flash::error(format!("An error occurred. Artist {} could not be updated.", name)),
    )
}

/// POST or DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id(&id, "artist")?;
    match artists::delete(&state.db, id).await {
        Ok(artist) => {
            info!("Artist {} ({}) deleted with its shows", id, artist.name);
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::success(format!("Artist {} was successfully deleted.", artist.name)),
            ))
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to delete artist {}: {}", id, e);
            Ok(redirect_with_flash(
                jar,
                "/",
                Flash::error("An error occurred. Artist could not be deleted."),
            ))
        }
    }
}

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route(
            "/artists/:id",
            get(show_artist).post(delete_artist).delete(delete_artist),
        )
        .route(
            "/artists/:id/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
}
