//! Common error types for gigbook

use thiserror::Error;

/// Common result type for gigbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the store and the web service
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Genre list (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True for the not-found case, so handlers can map it to a 404 page
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
