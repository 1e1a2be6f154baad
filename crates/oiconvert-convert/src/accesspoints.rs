//! Access-point mapping.
//!
//! Applies the same flip/scale pipeline as the floor geometry to AP
//! placements, clamps them into the floor bounds, and attaches a fixed
//! fallback radio/antenna profile so pins and BOMs render in common
//! importers. The original vendor/model strings ride along untouched.

use crate::document::{
    AccessPoint, Antenna, AntennaBand, Coordinate, CoordinateXyz, Dot11Radio, Orientation,
};
use crate::floorplan::AssembledFloors;
use crate::options::{ConvertOptions, DEFAULT_FALLBACK_MODEL, DEFAULT_FALLBACK_VENDOR};
use oiconvert_core::data::esx::EsxAccessPoint;
use oiconvert_core::data::project::{Project, DEFAULT_FLOOR_NAME};
use oiconvert_core::units::{self, LengthUnit};
use tracing::debug;

/// Band identifier of the 2.4 GHz radio.
pub const BAND_2_4_GHZ: &str = "FREQ_2.4GHZ";

/// Band identifier of the 5 GHz radio.
pub const BAND_5_GHZ: &str = "FREQ_5GHZ";

/// Radio function written to every emitted radio.
const RADIO_FUNCTION: &str = "CLIENT_ACCESS";

/// Display color of emitted access points.
const AP_DISPLAY_COLOR: &str = "#4687f0";

/// Build the output access points.
///
/// Every source AP is emitted; placements that cannot be resolved onto
/// a floor just carry an empty coordinate list.
pub fn map_access_points(
    project: &Project,
    floors: &AssembledFloors,
    options: &ConvertOptions,
) -> Vec<AccessPoint> {
    let vendor = non_empty(&options.fallback_vendor, DEFAULT_FALLBACK_VENDOR).to_lowercase();
    let model = non_empty(&options.fallback_model, DEFAULT_FALLBACK_MODEL).to_lowercase();

    project
        .access_points
        .iter()
        .enumerate()
        .map(|(index, ap)| {
            let floor_id = resolve_floor_id(ap);
            let floor_name = floor_id
                .and_then(|id| project.floor_name(id))
                .unwrap_or(DEFAULT_FLOOR_NAME);
            let coordinates = build_coordinates(ap, floor_id, project, floors);
            if coordinates.is_empty() {
                debug!(ap = %display_name(ap, index), "Access point has no resolvable placement");
            }

            AccessPoint {
                name: display_name(ap, index),
                floorplan_name: floor_name.to_string(),
                manufacturer: vendor.clone(),
                model: model.clone(),
                dot11_radios: fallback_radios(),
                antennas: vec![fallback_antenna(&vendor, &model)],
                coordinates,
                orientation: Orientation {
                    rotation: 0.0,
                    tilt: 0.0,
                },
                display_color: AP_DISPLAY_COLOR.to_string(),
                manufacturer_original: original_vendor(ap),
                model_original: ap.model.as_deref().unwrap_or_default().trim().to_string(),
            }
        })
        .collect()
}

fn display_name(ap: &EsxAccessPoint, index: usize) -> String {
    ap.name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("AP-{index}"))
}

fn original_vendor(ap: &EsxAccessPoint) -> String {
    ap.vendor
        .as_deref()
        .or(ap.manufacturer.as_deref())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn resolve_floor_id(ap: &EsxAccessPoint) -> Option<&str> {
    ap.location
        .as_ref()
        .and_then(|location| location.floor_plan_id.as_deref())
        .or(ap.floor_plan_id.as_deref())
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Pixel/meter/feet coordinate entries for one access point.
///
/// The placement is flipped with the floor's decoded image height,
/// then clamped into the floor's pixel dimension record. Floors
/// without a usable scale emit only the pixel entry, with z left at 0.
fn build_coordinates(
    ap: &EsxAccessPoint,
    floor_id: Option<&str>,
    project: &Project,
    floors: &AssembledFloors,
) -> Vec<Coordinate> {
    let Some(floor_id) = floor_id else {
        return Vec::new();
    };
    let Some(coord) = ap.location.as_ref().and_then(|location| location.coord) else {
        return Vec::new();
    };
    let (Some(x), Some(y)) = (coord.x, coord.y) else {
        return Vec::new();
    };

    let image_height = floors.image_heights.get(floor_id).copied().unwrap_or(0.0);
    let mut x_px = x;
    let mut y_px = if image_height > 0.0 {
        units::flip_y(y, image_height)
    } else {
        y
    };
    if let Some(pixel_dims) = floors.pixel_dimensions(floor_id) {
        x_px = x_px.clamp(0.0, pixel_dims.width);
        y_px = y_px.clamp(0.0, pixel_dims.length);
    }

    let meters_per_pixel = project.scale_for(floor_id);
    let Some(pixel_ceiling) = units::pixel_ceiling_height(meters_per_pixel) else {
        return vec![pixel_coordinate(x_px, y_px, 0.0)];
    };

    let x_m = units::pixels_to_meters(x_px, meters_per_pixel);
    let y_m = units::pixels_to_meters(y_px, meters_per_pixel);
    vec![
        pixel_coordinate(x_px, y_px, pixel_ceiling),
        Coordinate {
            coordinate_xyz: CoordinateXyz {
                x: x_m,
                y: y_m,
                z: units::CEILING_HEIGHT_M,
                unit: LengthUnit::Meters,
            },
        },
        Coordinate {
            coordinate_xyz: CoordinateXyz {
                x: units::meters_to_feet(x_m),
                y: units::meters_to_feet(y_m),
                z: units::CEILING_HEIGHT_FT,
                unit: LengthUnit::Feet,
            },
        },
    ]
}

fn pixel_coordinate(x: f64, y: f64, z: f64) -> Coordinate {
    Coordinate {
        coordinate_xyz: CoordinateXyz {
            x,
            y,
            z,
            unit: LengthUnit::Pixels,
        },
    }
}

/// The fixed fallback radio pair: one 2.4 GHz and one 5 GHz client
/// access radio with conservative channel/width/power defaults.
fn fallback_radios() -> Vec<Dot11Radio> {
    vec![
        Dot11Radio {
            id: 0,
            radio_function: RADIO_FUNCTION.to_string(),
            band: BAND_2_4_GHZ.to_string(),
            channel: 11,
            channel_width: "20_MHz".to_string(),
            transmit_power: 6,
            mimo_chains: 2,
        },
        Dot11Radio {
            id: 1,
            radio_function: RADIO_FUNCTION.to_string(),
            band: BAND_5_GHZ.to_string(),
            channel: 36,
            channel_width: "80_MHz".to_string(),
            transmit_power: 6,
            mimo_chains: 2,
        },
    ]
}

fn fallback_antenna(vendor: &str, model: &str) -> Antenna {
    Antenna {
        vendor: vendor.to_string(),
        model: model.to_string(),
        bands: vec![
            AntennaBand {
                band: BAND_2_4_GHZ.to_string(),
            },
            AntennaBand {
                band: BAND_5_GHZ.to_string(),
            },
        ],
    }
}
