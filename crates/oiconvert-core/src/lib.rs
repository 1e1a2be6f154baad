//! # OIConvert Core
//!
//! Core types and utilities for the ESX → OpenIntent converter.
//! Provides the source-side survey model, archive entry access,
//! unit/coordinate conversion helpers, and shared error types.

pub mod data;
pub mod error;
pub mod sanitize;
pub mod units;

pub use data::archive::EsxArchive;
pub use data::project::Project;

pub use error::{ArchiveError, Error, Result};
pub use sanitize::sanitize_filename;
