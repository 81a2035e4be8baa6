use std::path::PathBuf;

use thiserror::Error;

/// Daybook error types
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Storage unavailable at '{path}': {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data file '{path}' is corrupted: {reason}")]
    DataCorruption { path: PathBuf, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Task #{0} not found")]
    NotFound(u64),

    #[error("Task ids exhausted: next_id {0} cannot advance")]
    IdsExhausted(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Daybook operations
pub type Result<T> = std::result::Result<T, DaybookError>;
