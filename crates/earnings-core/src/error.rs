//! Core error types for earnings-core.
//!
//! Storage failures are recoverable (the store falls back to defaults),
//! validation failures are surfaced to whoever edited the configuration, and
//! now-playing failures stay inside the widget that asked for them.

use thiserror::Error;

/// Core error type for earnings-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Now-playing fetch errors
    #[error("Now playing error: {0}")]
    NowPlaying(#[from] NowPlayingError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the key-value database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Could not resolve or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(#[from] std::io::Error),

    /// The stored blob is not a valid document
    #[error("Corrupt value under '{key}': {message}")]
    Corrupt { key: String, message: String },

    /// Preferences file could not be parsed or written
    #[error("Preferences error: {0}")]
    Preferences(String),
}

/// Validation errors raised when a configuration value is entered.
///
/// The `Display` text is the short message shown next to the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input is empty or not a number
    #[error("Please enter a valid number")]
    NotANumber { field: String },

    /// Input is a number but not an integer where one is required
    #[error("Please enter a whole number")]
    NotAnInteger { field: String },

    /// Below the field's declared minimum
    #[error("Value must be at least {min}")]
    BelowMin { field: String, min: f64 },

    /// Above the field's declared maximum
    #[error("Value must be at most {max}")]
    AboveMax { field: String, max: f64 },

    /// The working-hours window is empty or inverted
    #[error("End hour ({end}) must be after start hour ({start})")]
    EmptyWorkWindow { start: u8, end: u8 },

    /// Salary type outside the three supported kinds
    #[error("Unknown salary type '{0}' (expected monthly, annual or hourly)")]
    UnknownSalaryType(String),

    /// Unknown settings field name
    #[error("Unknown field '{0}'")]
    UnknownField(String),
}

impl ValidationError {
    /// Name of the field the error belongs to, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NotANumber { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::BelowMin { field, .. }
            | ValidationError::AboveMax { field, .. } => Some(field),
            ValidationError::EmptyWorkWindow { .. } => Some("work-end-hour"),
            ValidationError::UnknownSalaryType(_) => Some("salary-type"),
            ValidationError::UnknownField(_) => None,
        }
    }
}

/// Errors from the optional now-playing widget.
#[derive(Error, Debug)]
pub enum NowPlayingError {
    /// No access token was configured
    #[error("Spotify access token not configured")]
    MissingToken,

    /// Transport or decoding failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Spotify returned HTTP {status}")]
    Status { status: u16 },

    /// The configured base URL is unusable
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
