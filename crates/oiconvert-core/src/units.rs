//! Unit and coordinate conversion for floor-plan geometry.
//!
//! The source survey is pixel-based with a top-down Y axis; the target
//! schema wants bottom-up pixel, meter, and feet variants side by side.
//! Every conversion is a pure function of the input coordinate, the
//! floor's decoded raster height, and its meters-per-pixel scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assumed ceiling height in meters.
pub const CEILING_HEIGHT_M: f64 = 2.5;

/// Feet per meter, applied to every imperial variant.
pub const FEET_PER_METER: f64 = 3.28084;

/// Assumed ceiling height expressed in feet.
pub const CEILING_HEIGHT_FT: f64 = 8.202;

/// Length unit of a dimension or coordinate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Raster pixels of the floor image.
    Pixels,
    /// Physical meters.
    Meters,
    /// Physical feet.
    Feet,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels => write!(f, "pixels"),
            Self::Meters => write!(f, "meters"),
            Self::Feet => write!(f, "feet"),
        }
    }
}

/// Flip a top-down pixel Y coordinate into the bottom-up space.
///
/// Involutive for a fixed height: `flip_y(flip_y(y, h), h) == y`.
/// The height must be the decoded raster height of the floor image,
/// never the nominal size recorded in the survey metadata.
pub fn flip_y(y: f64, height: f64) -> f64 {
    height - y
}

/// The assumed ceiling height expressed in pixel units (`2.5 / scale`).
///
/// Returns `None` when the floor has no usable scale, in which case the
/// caller keeps whatever default it started with.
pub fn pixel_ceiling_height(meters_per_pixel: f64) -> Option<f64> {
    if meters_per_pixel > 0.0 {
        Some(CEILING_HEIGHT_M / meters_per_pixel)
    } else {
        None
    }
}

/// Convert a pixel length to meters using the floor's scale.
pub fn pixels_to_meters(value: f64, meters_per_pixel: f64) -> f64 {
    value * meters_per_pixel
}

/// Convert meters to feet.
pub fn meters_to_feet(value: f64) -> f64 {
    value * FEET_PER_METER
}

/// Round to one decimal place, half away from zero.
///
/// Works on the decimal rendering of the value rather than its binary
/// representation, so 0.25 rounds to 0.3 the way a human-authored
/// export would, instead of the nearest-even 0.2.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let text = format!("{:.6}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), ""),
    };
    let Ok(whole) = int_part.parse::<i64>() else {
        // out of integer range; decimal-string rounding is moot there
        return (value * 10.0).round() / 10.0;
    };
    let mut tenths = whole * 10;
    let digits = frac_part.as_bytes();
    if let Some(&first) = digits.first() {
        tenths += i64::from(first - b'0');
    }
    if digits.get(1).is_some_and(|&d| d >= b'5') {
        tenths += 1;
    }
    let rounded = tenths as f64 / 10.0;
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}
