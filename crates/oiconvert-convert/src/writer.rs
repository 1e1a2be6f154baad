//! Output archive writer.
//!
//! Writes the finished document and its floor images as one
//! deflate-compressed zip. Runs only after the whole document has been
//! assembled, so a fatal conversion error never leaves a partial
//! archive behind.

use crate::document::{OpenIntentDocument, DOCUMENT_ENTRY};
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write the output archive: an `images/` directory with one PNG per
/// floor, plus the compact JSON document at the top level.
pub fn write_archive<P: AsRef<Path>>(
    path: P,
    document: &OpenIntentDocument,
    images: &[(String, Vec<u8>)],
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.add_directory("images/", options).map_err(zip_error)?;
    for (relative_path, payload) in images {
        zip.start_file(relative_path.as_str(), options)
            .map_err(zip_error)?;
        zip.write_all(payload)?;
    }

    zip.start_file(DOCUMENT_ENTRY, options).map_err(zip_error)?;
    let json = serde_json::to_vec(document)?;
    zip.write_all(&json)?;
    zip.finish().map_err(zip_error)?;

    info!("Wrote {}", path.display());
    Ok(())
}

fn zip_error(err: zip::result::ZipError) -> ConvertError {
    ConvertError::ArchiveWrite(err.to_string())
}
