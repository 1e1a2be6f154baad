//! # OIConvert
//!
//! Converts Ekahau `.esx` site-survey archives into OpenIntent 2.x
//! archives for WLAN planning importers.
//!
//! ## Architecture
//!
//! OIConvert is organized as a workspace with two crates plus this
//! binary:
//!
//! 1. **oiconvert-core** - Source survey model, archive access, unit
//!    and coordinate conversion
//! 2. **oiconvert-convert** - Transformation pipeline: materials,
//!    floor plans, access points, document assembly, archive writing
//! 3. **oiconvert** - The CLI binary that wires them together
//!
//! ## What gets emitted
//!
//! - **Floorplans**: name, map URI, pixel/meter/feet dimensions (the
//!   pixel record's height is the ceiling height in pixels), wall
//!   segments Y-flipped to align with the images
//! - **Wall materials**: derived from the survey's wall types, with a
//!   name prefix and 1-decimal rounding (used-only by default)
//! - **Access points**: minimal radios and antennas, coordinates in
//!   pixels, meters, and feet; original vendor/model preserved in
//!   passthrough fields
//! - **Switches**: always empty, kept for schema parity

pub use oiconvert_convert::{
    ConversionSummary, ConvertError, ConvertOptions, EsxConverter, OpenIntentDocument,
};
pub use oiconvert_core::{EsxArchive, Project};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr (stdout stays clean for shell pipelines)
/// - RUST_LOG environment variable support
/// - DEBUG default level when `verbose` is set, INFO otherwise
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
