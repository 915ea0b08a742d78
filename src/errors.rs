//! Unified application error type.
//! All modules (db, limiter, scheduler, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Quota / identity
    // ---------------------------
    #[error("Not signed in: a user id is required for this action")]
    Unauthenticated,

    #[error("Weekly limit reached for '{0}' generation: try again next week or upgrade")]
    LimitReached(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown feature: {0}")]
    InvalidFeature(String),

    #[error("Unknown meal kind: {0}")]
    InvalidMealKind(String),

    // ---------------------------
    // Scheduler errors
    // ---------------------------
    #[error("No item '{1}' on {0}")]
    ItemNotFound(String, String),

    #[error("Plan store error: {0}")]
    Store(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
