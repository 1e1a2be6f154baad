//! Target document model for OpenIntent 2.x.
//!
//! These types serialize to the structured document written at the top
//! of the output archive. Field declaration order matches the emitted
//! JSON for easy diffing against other exports.

use oiconvert_core::units::LengthUnit;
use serde::{Deserialize, Serialize};

/// Version string written to every produced document.
pub const OPENINTENT_VERSION: &str = "2.0.0";

/// Name of the document entry inside the output archive.
pub const DOCUMENT_ENTRY: &str = "openintent.json";

/// The versioned output container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenIntentDocument {
    /// Target schema version (always 2.0.0).
    pub openintent_version: String,
    pub floorplans: Vec<Floorplan>,
    pub wall_materials: Vec<WallMaterial>,
    pub accesspoints: Vec<AccessPoint>,
    /// Always empty; kept for schema parity with 2.x importers.
    pub switches: Vec<serde_json::Value>,
}

impl OpenIntentDocument {
    /// Assemble the final document from the independently built parts.
    pub fn assemble(
        floorplans: Vec<Floorplan>,
        wall_materials: Vec<WallMaterial>,
        accesspoints: Vec<AccessPoint>,
    ) -> Self {
        Self {
            openintent_version: OPENINTENT_VERSION.to_string(),
            floorplans,
            wall_materials,
            accesspoints,
            switches: Vec::new(),
        }
    }
}

/// One output floor with its image reference and wall geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floorplan {
    pub name: String,
    /// `file://images/...` reference to the floor's image entry.
    pub map_uri: String,
    /// Pixel record first; meter and feet records only when scaled.
    pub dimensions: Vec<Dimension>,
    pub coverage_areas: Vec<serde_json::Value>,
    pub wall_segments: Vec<WallSegment>,
    pub project_name: String,
    pub rotation: f64,
    pub reference_markers: Vec<serde_json::Value>,
    pub floor_id: String,
}

/// One dimension record of a floor.
///
/// For the pixel unit the `height` field carries the assumed ceiling
/// height expressed in pixels, not the raster height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub length: f64,
    pub unit: LengthUnit,
    pub height: f64,
}

/// A wall segment with resolved material name and flipped endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSegment {
    pub wall_type: String,
    pub start_point: PlanPoint,
    pub end_point: PlanPoint,
}

/// A 2D point in the floor's bottom-up pixel space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x: f64,
    pub y: f64,
}

/// A deduplicated wall material derived from a source wall type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallMaterial {
    pub name: String,
    pub itu_material_type: String,
    pub rf_properties: RfProperties,
    pub thickness_m: f64,
    pub display_color: String,
}

/// RF attenuation of a wall material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RfProperties {
    /// Attenuation across the whole wall (per-meter × thickness).
    pub attenuation_flat: f64,
    /// Attenuation per meter of wall thickness.
    pub attenuation_per_m: f64,
}

/// One output access point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPoint {
    pub name: String,
    pub floorplan_name: String,
    pub manufacturer: String,
    pub model: String,
    pub dot11_radios: Vec<Dot11Radio>,
    pub antennas: Vec<Antenna>,
    pub coordinates: Vec<Coordinate>,
    pub orientation: Orientation,
    pub display_color: String,
    /// Original vendor string, preserved verbatim.
    pub manufacturer_original: String,
    /// Original model string, preserved verbatim.
    pub model_original: String,
}

/// A synthesized 802.11 radio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dot11Radio {
    pub id: u32,
    pub radio_function: String,
    pub band: String,
    pub channel: u32,
    pub channel_width: String,
    pub transmit_power: i32,
    pub mimo_chains: u32,
}

/// A synthesized antenna entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Antenna {
    pub vendor: String,
    pub model: String,
    pub bands: Vec<AntennaBand>,
}

/// One band supported by an antenna.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntennaBand {
    pub band: String,
}

/// A coordinate entry in one unit system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub coordinate_xyz: CoordinateXyz,
}

/// A 3D coordinate with its unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinateXyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub unit: LengthUnit,
}

/// Mounting orientation of an access point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: f64,
    pub tilt: f64,
}
