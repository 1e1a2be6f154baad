//! Error handling for the converter core.
//!
//! Provides structured error types for reading the source survey
//! archive and resolving its structured entries. All error types use
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while reading the source survey archive.
///
/// Fatal by design: a survey that cannot be opened or is missing a
/// mandatory structured entry produces no output at all.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The input path does not exist.
    #[error("Survey archive not found: {path}")]
    NotFound {
        /// The path that was requested.
        path: String,
    },

    /// The input exists but is not a valid zip container.
    #[error("Not a valid survey archive: {path}")]
    MalformedArchive {
        /// The path that failed to open.
        path: String,
    },

    /// A mandatory structured entry is absent from the archive.
    #[error("Missing required file in archive: {entry}")]
    MissingEntry {
        /// The name of the absent entry.
        entry: String,
    },

    /// An entry is present but could not be parsed as JSON.
    #[error("Malformed entry '{entry}': {source}")]
    MalformedEntry {
        /// The name of the unparseable entry.
        entry: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// I/O error while reading the archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Archive access or entry parsing error.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error names a missing mandatory entry.
    pub fn is_missing_entry(&self) -> bool {
        matches!(self, Error::Archive(ArchiveError::MissingEntry { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
