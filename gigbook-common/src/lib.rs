//! # gigbook common library
//!
//! Shared code for the gigbook booking directory:
//! - Entity store for venues, artists and shows (SQLite via sqlx)
//! - Upcoming/past show partitioning
//! - Configuration loading
//! - Anti-forgery token signing
//! - Date formatting helpers

pub mod choices;
pub mod config;
pub mod csrf;
pub mod db;
pub mod error;
pub mod schedule;
pub mod time;

pub use error::{Error, Result};
pub use schedule::{Scheduled, ShowSchedule};
