//! Custom error types for the hsk-vocab crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum HskError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A word list contained byte sequences invalid for the selected encoding.
    #[error("Failed to decode {} as {}", .path.display(), .encoding)]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// A level value outside the supported range.
    #[error("Invalid HSK level: {0}. Levels 1-6 and 7 (the combined 7-9 band) are supported.")]
    InvalidLevel(u8),

    /// An error raised while reading or writing a vocabulary document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience `Result` type alias using the crate's `HskError` type.
pub type Result<T> = std::result::Result<T, HskError>;
