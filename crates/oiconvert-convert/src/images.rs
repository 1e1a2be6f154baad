//! Floor image selection.
//!
//! A survey archive may carry several raster candidates (scans at
//! different resolutions, transposed exports). The target wants exactly
//! one bitmap per floor, so candidates are scored against the floor's
//! nominal size and the winner is re-encoded as canonical PNG. Its
//! decoded height, not the nominal metadata height, is the ground truth
//! for every downstream Y flip.

use crate::error::{ConvertError, Result};
use image::{ImageFormat, ImageReader};
use oiconvert_core::EsxArchive;
use std::io::Cursor;
use tracing::{debug, warn};

/// Prefix convention identifying raster candidates inside the archive.
pub const IMAGE_PREFIX: &str = "image-";

/// A selected, normalized floor image.
#[derive(Debug, Clone)]
pub struct FloorImage {
    /// The source entry the image came from.
    pub entry: String,
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
    /// Canonical PNG payload for the output archive.
    pub png: Vec<u8>,
}

/// True when an entry name follows the floor-image naming convention.
fn is_image_candidate(name: &str) -> bool {
    name.rsplit('/')
        .next()
        .map(|base| base.to_ascii_lowercase().starts_with(IMAGE_PREFIX))
        .unwrap_or(false)
}

/// Rotation-aware city-block distance between candidate and target
/// dimensions. A candidate stored transposed scores as if upright.
fn dimension_score(width: u32, height: u32, target_w: u32, target_h: u32) -> u64 {
    let distance = |a: u32, b: u32| u64::from(a.abs_diff(b));
    let upright = distance(width, target_w) + distance(height, target_h);
    let transposed = distance(height, target_w) + distance(width, target_h);
    upright.min(transposed)
}

/// Probe an image's dimensions without decoding the pixel data.
fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Pick the raster candidate best matching the floor's nominal size.
///
/// Ties go to the first candidate in archive order. Candidates that
/// fail to decode are skipped; if every candidate fails, the first one
/// is decoded again so its error surfaces as the fatal cause. An empty
/// candidate set is a `NoFloorImage` error.
pub fn select_floor_image(
    archive: &mut EsxArchive,
    floor_name: &str,
    target_w: u32,
    target_h: u32,
) -> Result<FloorImage> {
    let candidates: Vec<String> = archive
        .entry_names()
        .into_iter()
        .filter(|name| is_image_candidate(name))
        .collect();
    if candidates.is_empty() {
        return Err(ConvertError::NoFloorImage {
            floor: floor_name.to_string(),
        });
    }

    let mut best: Option<(u64, &str)> = None;
    for entry in &candidates {
        let bytes = match archive.read_bytes(entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Skipping unreadable image entry '{}': {}", entry, err);
                continue;
            }
        };
        let Some((width, height)) = probe_dimensions(&bytes) else {
            warn!("Skipping undecodable image entry '{}'", entry);
            continue;
        };
        let score = dimension_score(width, height, target_w, target_h);
        // strictly-less keeps the first candidate on ties
        if best.is_none_or(|(best_score, _)| score < best_score) {
            best = Some((score, entry.as_str()));
        }
    }

    let entry = match best {
        Some((score, entry)) => {
            debug!(floor = floor_name, entry, score, "Selected floor image");
            entry.to_string()
        }
        // every candidate failed to probe; retry the first so its
        // decode error becomes the fatal cause
        None => candidates[0].clone(),
    };

    let bytes = archive.read_bytes(&entry)?;
    let decoded = image::load_from_memory(&bytes).map_err(|err| ConvertError::ImageDecode {
        entry: entry.clone(),
        reason: err.to_string(),
    })?;
    let (width, height) = (decoded.width(), decoded.height());

    let mut png = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| ConvertError::ImageEncode(err.to_string()))?;

    Ok(FloorImage {
        entry,
        width,
        height,
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_naming_convention() {
        assert!(is_image_candidate("image-1f2e3d"));
        assert!(is_image_candidate("maps/image-floor.png"));
        assert!(is_image_candidate("Image-UPPER"));
        assert!(!is_image_candidate("floorPlans.json"));
        assert!(!is_image_candidate("images/floor.png"));
        assert!(!is_image_candidate("my-image-1"));
    }

    #[test]
    fn test_rotation_aware_score() {
        // exact match either upright or transposed
        assert_eq!(dimension_score(400, 300, 400, 300), 0);
        assert_eq!(dimension_score(300, 400, 400, 300), 0);
        // plain city-block distance otherwise
        assert_eq!(dimension_score(410, 290, 400, 300), 20);
        // the transposed reading wins when it is closer
        assert_eq!(dimension_score(310, 390, 400, 300), dimension_score(390, 310, 400, 300));
    }
}
