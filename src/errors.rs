//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Snapshot store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Record '{id}' not found in table '{table}'")]
    RecordNotFound { table: String, id: String },

    #[error("Unknown field '{field}' in table '{table}'")]
    UnknownField { table: String, field: String },

    // ---------------------------
    // Upstream edge (coarse, user-facing)
    // ---------------------------
    #[error("No such client: {0}")]
    ClientNotFound(String),

    #[error("Failed to fetch {0}")]
    Fetch(String),

    #[error("Failed to update {0}")]
    Update(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid month filter (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base export: {0}")]
    InvalidBaseExport(String),

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
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
