//! Error types for landscape operations.

use thiserror::Error;

/// Errors that can occur while loading or configuring the landscape.
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// Row data was not a valid JSON array of records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading row data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value could not be used.
    #[error("invalid configuration '{name}': {reason}")]
    Config { name: String, reason: String },
}

impl LandscapeError {
    pub(crate) fn config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for landscape operations.
pub type Result<T> = std::result::Result<T, LandscapeError>;
