//! Error types for the conversion pipeline.
//!
//! Fatal errors abort the run before any output archive is written;
//! the pipeline never leaves a partial archive behind.

use std::io;
use thiserror::Error;

/// Errors that can occur while transforming a survey into an
/// OpenIntent archive.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No raster candidate exists for a floor.
    #[error("No floor image found for '{floor}' (expected entries prefixed with 'image-')")]
    NoFloorImage {
        /// Display name of the floor without an image.
        floor: String,
    },

    /// A raster entry could not be decoded.
    #[error("Failed to decode image entry '{entry}': {reason}")]
    ImageDecode {
        /// The archive entry that failed to decode.
        entry: String,
        /// The underlying decoder message.
        reason: String,
    },

    /// The selected raster could not be re-encoded.
    #[error("Failed to encode floor image: {0}")]
    ImageEncode(String),

    /// The output archive could not be written.
    #[error("Failed to write output archive: {0}")]
    ArchiveWrite(String),

    /// An error from the source model layer.
    #[error(transparent)]
    Core(#[from] oiconvert_core::Error),

    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
