//! Data model for the source site survey
//!
//! This module provides:
//! - Read access to the survey's zip container
//! - Typed records for every structured JSON entry
//! - The resolved `Project` model consumed by the conversion pipeline

pub mod archive;
pub mod esx;
pub mod project;
