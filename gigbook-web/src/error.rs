//! Error types for gigbook-web
//!
//! Every variant renders as an HTML error page with the matching status.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use gigbook_common::csrf::CsrfError;
use thiserror::Error;
use tracing::error;

use crate::pages::errors::error_page;

#[derive(Debug, Error)]
pub enum WebError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Anti-forgery token rejected (400)
    #[error("Anti-forgery check failed: {0}")]
    Csrf(#[from] CsrfError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// gigbook-common error
    #[error("Common error: {0}")]
    Common(#[from] gigbook_common::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) | WebError::Csrf(_) => StatusCode::BAD_REQUEST,
            WebError::Common(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            WebError::Internal(_) | WebError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            WebError::BadRequest(msg) => Some(msg.clone()),
            WebError::Csrf(err) => Some(err.to_string()),
            _ => None,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        match error_page(status, detail).render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (status, status.canonical_reason().unwrap_or_default()).into_response()
            }
        }
    }
}

/// Result type for handlers
pub type WebResult<T> = Result<T, WebError>;
