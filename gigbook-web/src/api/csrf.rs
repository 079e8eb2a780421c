//! Anti-forgery middleware
//!
//! Every request except GET, HEAD and OPTIONS must carry a valid token,
//! either in the `X-CSRFToken` header or in the `csrf_token` form field.
//! When the token travels in the body, the body is buffered for inspection
//! and handed to the handler unchanged.

use axum::{
    body::Body,
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use gigbook_common::csrf::{validate_token, CsrfError};
use tracing::warn;

use crate::forms::FormData;
use crate::{AppState, WebError};

pub const HEADER_NAME: &str = "x-csrftoken";
pub const FIELD_NAME: &str = "csrf_token";

/// Largest form body accepted while looking for the token
const MAX_BODY_BYTES: usize = 1024 * 1024;

fn is_safe(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

pub async fn csrf_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    if !state.config.csrf_enabled || is_safe(request.method()) {
        return Ok(next.run(request).await);
    }

    let header_token = request
        .headers()
        .get(HEADER_NAME)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let (request, token) = match header_token {
        Some(token) => (request, Some(token)),
        None => {
            let (parts, body) = request.into_parts();
            let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|e| WebError::BadRequest(format!("Failed to read body: {}", e)))?;
            let token = FormData::parse(&body_bytes).get(FIELD_NAME).map(str::to_string);
            (Request::from_parts(parts, Body::from(body_bytes)), token)
        }
    };

    let checked = match token {
        Some(token) => validate_token(&token, &state.config.secret_key, state.config.csrf_time_limit),
        None => Err(CsrfError::Missing),
    };
    if let Err(e) = checked {
        warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
