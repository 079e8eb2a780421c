//! gigbook-web library - booking directory HTTP service
//!
//! Server-rendered pages for browsing, searching and editing venues, artists
//! and shows. Exposed as a library so the router can be driven from tests.

use std::sync::Arc;

use axum::{middleware, Router};
use chrono::{DateTime, Utc};
use gigbook_common::config::AppConfig;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod flash;
pub mod forms;
pub mod pages;

pub use crate::error::{WebError, WebResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolved configuration, built once in `main`
    pub config: Arc<AppConfig>,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
            startup_time: Utc::now(),
        }
    }

    /// Fresh anti-forgery token for a rendered form
    pub fn csrf_token(&self) -> String {
        gigbook_common::csrf::issue_token(&self.config.secret_key)
    }
}

/// Build application router
///
/// Every non-safe request passes the anti-forgery middleware before reaching
/// a handler. Unknown paths render the 404 page.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::home_routes())
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .fallback(api::not_found_page)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::csrf_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
