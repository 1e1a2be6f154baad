//! Typed records for the structured entries of an ESX survey archive.
//!
//! Field names mirror the JSON written by the survey tool. Optional
//! fields stay optional here; defaults are applied where the value is
//! consumed, not at parse time. Unknown fields are ignored.

use serde::Deserialize;

/// Top-level wrapper of `floorPlans.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorPlansEntry {
    /// The floors of the surveyed site.
    #[serde(rename = "floorPlans", default)]
    pub floor_plans: Vec<EsxFloorPlan>,
}

/// A floor in the source survey.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxFloorPlan {
    /// Floor identity, referenced by wall points and access points.
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Declared raster width in pixels.
    pub width: Option<f64>,

    /// Declared raster height in pixels.
    pub height: Option<f64>,

    /// Crop bounding box, used when the declared size is absent.
    #[serde(rename = "cropMaxX")]
    pub crop_max_x: Option<f64>,

    /// Crop bounding box, used when the declared size is absent.
    #[serde(rename = "cropMaxY")]
    pub crop_max_y: Option<f64>,

    /// Scale factor: physical meters per raster pixel.
    #[serde(rename = "metersPerUnit")]
    pub meters_per_unit: Option<f64>,
}

/// Top-level wrapper of `wallSegments.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct WallSegmentsEntry {
    /// Every wall segment of the project, across all floors.
    #[serde(rename = "wallSegments", default)]
    pub wall_segments: Vec<EsxWallSegment>,
}

/// A wall segment between two referenced wall points.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxWallSegment {
    /// Segment identity.
    pub id: Option<String>,

    /// Ids of the endpoints. Exactly two are expected; anything else
    /// is dropped during geometry resolution.
    #[serde(rename = "wallPoints", default)]
    pub wall_points: Vec<String>,

    /// The wall type this segment is built from.
    #[serde(rename = "wallTypeId")]
    pub wall_type_id: Option<String>,
}

/// Top-level wrapper of `wallPoints.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct WallPointsEntry {
    /// Every wall point of the project.
    #[serde(rename = "wallPoints", default)]
    pub wall_points: Vec<EsxWallPoint>,
}

/// A wall endpoint, referenced (never owned) by segments.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxWallPoint {
    /// Point identity.
    pub id: String,

    /// Floor membership and pixel coordinate.
    pub location: Option<EsxLocation>,
}

/// Floor membership plus a pixel-space coordinate.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxLocation {
    /// The floor this location belongs to.
    #[serde(rename = "floorPlanId")]
    pub floor_plan_id: Option<String>,

    /// Position in top-down pixel space.
    pub coord: Option<EsxCoord>,
}

/// A 2D pixel coordinate with a top-down Y axis.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EsxCoord {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Top-level wrapper of `wallTypes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct WallTypesEntry {
    /// The wall type catalog of the project.
    #[serde(rename = "wallTypes", default)]
    pub wall_types: Vec<EsxWallType>,
}

/// A physical wall definition referenced by segments.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxWallType {
    /// Wall type identity, referenced by segments.
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Stable key, used as the name fallback.
    pub key: Option<String>,

    /// Display color as `#rrggbb`.
    pub color: Option<String>,

    /// Wall thickness in meters.
    pub thickness: Option<f64>,

    /// Per-frequency-band propagation attenuation records.
    #[serde(rename = "propagationProperties", default)]
    pub propagation_properties: Vec<EsxPropagation>,
}

/// Propagation attenuation for one frequency band.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxPropagation {
    /// Band identifier (`TWO`, `FIVE`, `SIX`).
    pub band: Option<String>,

    /// Attenuation in dB per meter of wall thickness.
    #[serde(rename = "attenuationFactor")]
    pub attenuation_factor: Option<f64>,
}

/// Top-level wrapper of `accessPoints.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessPointsEntry {
    /// The surveyed or simulated access points.
    #[serde(rename = "accessPoints", default)]
    pub access_points: Vec<EsxAccessPoint>,
}

/// An access-point placement.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxAccessPoint {
    /// Access point identity.
    pub id: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Floor membership and pixel coordinate.
    pub location: Option<EsxLocation>,

    /// Floor reference used by exports that omit the nested location.
    #[serde(rename = "floorPlanId", alias = "floorId")]
    pub floor_plan_id: Option<String>,

    /// Original vendor string. Some exports use `manufacturer` instead.
    pub vendor: Option<String>,

    /// Original manufacturer string.
    pub manufacturer: Option<String>,

    /// Original model string.
    pub model: Option<String>,
}

/// Top-level wrapper of `simulatedRadios.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatedRadiosEntry {
    /// Simulated radio records. Loaded for completeness; the 2.x
    /// target document does not consume them.
    #[serde(rename = "simulatedRadios", default)]
    pub simulated_radios: Vec<EsxSimulatedRadio>,
}

/// A simulated radio attached to an access point.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxSimulatedRadio {
    /// Radio identity.
    pub id: Option<String>,

    /// The access point this radio belongs to.
    #[serde(rename = "accessPointId")]
    pub access_point_id: Option<String>,
}

/// Top-level wrapper of `project.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    /// Project metadata.
    pub project: EsxProjectMeta,
}

/// Project metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct EsxProjectMeta {
    /// Project title.
    pub title: Option<String>,

    /// Project name, used when the title is absent.
    pub name: Option<String>,
}
