use anyhow::Result;
use clap::Parser;
use oiconvert::{init_logging, ConvertOptions, EsxConverter};
use oiconvert_convert::options::{
    DEFAULT_FALLBACK_MODEL, DEFAULT_FALLBACK_VENDOR, DEFAULT_MATERIAL_PREFIX,
};
use std::path::PathBuf;
use tracing::info;

/// Convert an Ekahau .esx site survey into an OpenIntent 2.x archive.
#[derive(Parser, Debug)]
#[command(
    name = "oiconvert",
    version,
    about = "Convert Ekahau .esx surveys to OpenIntent 2.x archives"
)]
struct Args {
    /// Path to the input .esx survey
    #[arg(long = "esx", value_name = "PATH")]
    esx: PathBuf,

    /// Path of the output archive
    #[arg(long = "out", value_name = "PATH")]
    out: PathBuf,

    /// Prefix for imported material names
    #[arg(long, default_value = DEFAULT_MATERIAL_PREFIX)]
    prefix: String,

    /// Export all wall types (default: only those used by segments)
    #[arg(long = "all-materials")]
    all_materials: bool,

    /// Vendor written to emitted access points
    #[arg(long = "fallback-manufacturer", default_value = DEFAULT_FALLBACK_VENDOR)]
    fallback_manufacturer: String,

    /// Model written to emitted access points
    #[arg(long = "fallback-model", default_value = DEFAULT_FALLBACK_MODEL)]
    fallback_model: String,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let options = ConvertOptions {
        material_prefix: args.prefix,
        all_materials: args.all_materials,
        fallback_vendor: args.fallback_manufacturer,
        fallback_model: args.fallback_model,
    };
    let summary = EsxConverter::new(options).convert(&args.esx, &args.out)?;
    info!(
        floors = summary.floors,
        materials = summary.materials,
        access_points = summary.access_points,
        wall_segments = summary.wall_segments,
        dropped_segments = summary.dropped_segments,
        "Conversion complete"
    );

    Ok(())
}
