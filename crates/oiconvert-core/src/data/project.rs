//! The resolved in-memory survey model.
//!
//! Built once per run from the archive's structured entries, consumed
//! read-only by every downstream stage, and discarded at process end.

use crate::data::archive::EsxArchive;
use crate::data::esx::{
    AccessPointsEntry, EsxAccessPoint, EsxFloorPlan, EsxSimulatedRadio, EsxWallPoint,
    EsxWallSegment, EsxWallType, FloorPlansEntry, ProjectEntry, SimulatedRadiosEntry,
    WallPointsEntry, WallSegmentsEntry, WallTypesEntry,
};
use crate::error::Result;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Entry names of the structured files inside a survey archive.
pub mod entries {
    /// Floor list (mandatory).
    pub const FLOOR_PLANS: &str = "floorPlans.json";
    /// Wall segment list (mandatory).
    pub const WALL_SEGMENTS: &str = "wallSegments.json";
    /// Wall point list (mandatory).
    pub const WALL_POINTS: &str = "wallPoints.json";
    /// Wall type catalog (mandatory).
    pub const WALL_TYPES: &str = "wallTypes.json";
    /// Access point list (optional).
    pub const ACCESS_POINTS: &str = "accessPoints.json";
    /// Simulated radio list (optional).
    pub const SIMULATED_RADIOS: &str = "simulatedRadios.json";
    /// Project metadata (optional).
    pub const PROJECT: &str = "project.json";
}

/// Project title used when the metadata entry is absent.
pub const DEFAULT_PROJECT_TITLE: &str = "Project";

/// Floor display name used when a floor has none.
pub const DEFAULT_FLOOR_NAME: &str = "Floor";

/// The fully loaded source model.
#[derive(Debug)]
pub struct Project {
    /// Project title, used to derive the output image namespace.
    pub title: String,

    /// Floors in source order.
    pub floors: Vec<EsxFloorPlan>,

    /// Every wall segment of the project, across all floors.
    pub wall_segments: Vec<EsxWallSegment>,

    /// Wall points indexed by id.
    pub wall_points: HashMap<String, EsxWallPoint>,

    /// Wall types in source order (drives deterministic material output).
    pub wall_types: Vec<EsxWallType>,

    /// Access points in source order.
    pub access_points: Vec<EsxAccessPoint>,

    /// Simulated radios; carried for completeness, unused by the 2.x target.
    pub simulated_radios: Vec<EsxSimulatedRadio>,

    /// Meters-per-pixel scale per floor id; 0 when the floor is unscaled.
    pub meters_per_pixel: HashMap<String, f64>,
}

impl Project {
    /// Load and validate the structured entries of a survey archive.
    ///
    /// The mandatory entries (floors, wall segments, wall points, wall
    /// types) fail the load when absent or unparseable. Optional
    /// entries degrade to empty collections or defaults.
    pub fn load(archive: &mut EsxArchive) -> Result<Self> {
        let floors = archive
            .read_json::<FloorPlansEntry>(entries::FLOOR_PLANS)?
            .floor_plans;
        let wall_segments = archive
            .read_json::<WallSegmentsEntry>(entries::WALL_SEGMENTS)?
            .wall_segments;
        let wall_points_list = archive
            .read_json::<WallPointsEntry>(entries::WALL_POINTS)?
            .wall_points;
        let wall_types = archive
            .read_json::<WallTypesEntry>(entries::WALL_TYPES)?
            .wall_types;

        let access_points = load_optional(archive, entries::ACCESS_POINTS, |e: AccessPointsEntry| {
            e.access_points
        });
        let simulated_radios =
            load_optional(archive, entries::SIMULATED_RADIOS, |e: SimulatedRadiosEntry| {
                e.simulated_radios
            });

        let title = load_title(archive);

        let meters_per_pixel = floors
            .iter()
            .map(|floor| (floor.id.clone(), floor.meters_per_unit.unwrap_or(0.0)))
            .collect();
        let wall_points: HashMap<String, EsxWallPoint> = wall_points_list
            .into_iter()
            .map(|point| (point.id.clone(), point))
            .collect();

        debug!(
            floors = floors.len(),
            wall_segments = wall_segments.len(),
            wall_points = wall_points.len(),
            wall_types = wall_types.len(),
            access_points = access_points.len(),
            simulated_radios = simulated_radios.len(),
            "Loaded survey model"
        );

        Ok(Self {
            title,
            floors,
            wall_segments,
            wall_points,
            wall_types,
            access_points,
            simulated_radios,
            meters_per_pixel,
        })
    }

    /// Look up a floor by id.
    pub fn floor(&self, id: &str) -> Option<&EsxFloorPlan> {
        self.floors.iter().find(|floor| floor.id == id)
    }

    /// Display name of a floor id, when the floor exists and has one.
    pub fn floor_name(&self, id: &str) -> Option<&str> {
        self.floor(id)
            .and_then(|floor| floor.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Look up a wall type by id.
    pub fn wall_type(&self, id: &str) -> Option<&EsxWallType> {
        self.wall_types.iter().find(|wall_type| wall_type.id == id)
    }

    /// Meters-per-pixel for a floor id; 0 when unknown or unscaled.
    pub fn scale_for(&self, floor_id: &str) -> f64 {
        self.meters_per_pixel.get(floor_id).copied().unwrap_or(0.0)
    }
}

/// Read an optional entry, degrading to empty on absence or parse failure.
fn load_optional<T, E, F>(archive: &mut EsxArchive, entry: &str, extract: F) -> Vec<T>
where
    E: serde::de::DeserializeOwned,
    F: FnOnce(E) -> Vec<T>,
{
    if !archive.has_entry(entry) {
        return Vec::new();
    }
    match archive.read_json::<E>(entry) {
        Ok(parsed) => extract(parsed),
        Err(err) => {
            warn!("Ignoring malformed optional entry '{}': {}", entry, err);
            Vec::new()
        }
    }
}

/// Project title from the metadata entry, with a fixed fallback.
fn load_title(archive: &mut EsxArchive) -> String {
    if !archive.has_entry(entries::PROJECT) {
        return DEFAULT_PROJECT_TITLE.to_string();
    }
    match archive.read_json::<ProjectEntry>(entries::PROJECT) {
        Ok(entry) => {
            let meta = entry.project;
            meta.title
                .into_iter()
                .chain(meta.name)
                .find(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_PROJECT_TITLE.to_string())
        }
        Err(err) => {
            warn!("Ignoring malformed project metadata: {}", err);
            DEFAULT_PROJECT_TITLE.to_string()
        }
    }
}
