//! Floor assembly and wall geometry.
//!
//! Combines the unit transform, the image selector, and the wall
//! segment geometry into one output floor record per source floor.
//! Wall segments are resolved project-wide first, so segments with
//! unresolvable or cross-floor endpoints are counted exactly once.

use crate::document::{Dimension, Floorplan, PlanPoint, WallSegment};
use crate::error::Result;
use crate::images;
use crate::materials::{ResolvedMaterials, GENERIC_WALL_NAME};
use crate::options::ConvertOptions;
use oiconvert_core::data::esx::{EsxFloorPlan, EsxWallPoint, EsxWallSegment};
use oiconvert_core::data::project::{Project, DEFAULT_FLOOR_NAME};
use oiconvert_core::sanitize::sanitize_filename;
use oiconvert_core::units::{self, LengthUnit};
use oiconvert_core::EsxArchive;
use std::collections::HashMap;
use tracing::{debug, info};

/// URI scheme prepended to the image's archive-relative path.
const MAP_URI_SCHEME: &str = "file://";

/// Directory inside the output archive holding the floor images.
pub const IMAGES_DIR: &str = "images";

/// Everything produced by floor assembly.
#[derive(Debug, Default)]
pub struct AssembledFloors {
    /// Output floor plans in source floor order.
    pub floorplans: Vec<Floorplan>,
    /// PNG payloads keyed by archive-relative path, in floor order.
    pub images: Vec<(String, Vec<u8>)>,
    /// Decoded image height per floor id; ground truth for AP flipping.
    pub image_heights: HashMap<String, f64>,
    /// Segments dropped for unresolvable, incomplete, or cross-floor
    /// endpoints.
    pub dropped_segments: usize,
}

impl AssembledFloors {
    /// The pixel dimension record of a floor id, when assembled.
    pub fn pixel_dimensions(&self, floor_id: &str) -> Option<&Dimension> {
        self.floorplans
            .iter()
            .find(|floorplan| floorplan.floor_id == floor_id)
            .and_then(|floorplan| floorplan.dimensions.first())
    }
}

/// A wall segment with both endpoints resolved onto a single floor.
#[derive(Debug)]
struct ResolvedSegment<'a> {
    floor_id: &'a str,
    start: (f64, f64),
    end: (f64, f64),
    wall_type_id: Option<&'a str>,
}

/// Build every output floor plan, selecting and normalizing its image.
pub fn assemble_floors(
    archive: &mut EsxArchive,
    project: &Project,
    materials: &ResolvedMaterials,
    options: &ConvertOptions,
) -> Result<AssembledFloors> {
    let project_prefix = sanitize_filename(&project.title);
    let fallback_label = format!("{}{}", options.material_prefix, GENERIC_WALL_NAME);
    let (resolved_segments, dropped) =
        resolve_segments(&project.wall_segments, &project.wall_points);
    if dropped > 0 {
        info!(dropped, "Dropped wall segments with unresolved endpoints");
    }

    let mut assembled = AssembledFloors {
        dropped_segments: dropped,
        ..AssembledFloors::default()
    };
    for floor in &project.floors {
        let name = floor
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_FLOOR_NAME.to_string());
        let (target_w, target_h) = nominal_dimensions(floor);
        let image = images::select_floor_image(archive, &name, target_w, target_h)?;
        debug!(
            floor = %name,
            entry = %image.entry,
            width = image.width,
            height = image.height,
            "Normalized floor image"
        );

        let image_rel = format!(
            "{}/{}_{}.png",
            IMAGES_DIR,
            project_prefix,
            sanitize_filename(&name)
        );
        let scale = project.scale_for(&floor.id);
        let wall_segments = build_wall_segments(
            &floor.id,
            f64::from(image.height),
            &resolved_segments,
            materials,
            &fallback_label,
        );

        assembled.image_heights.insert(floor.id.clone(), f64::from(image.height));
        assembled.floorplans.push(Floorplan {
            name,
            map_uri: format!("{}{}", MAP_URI_SCHEME, image_rel),
            dimensions: build_dimensions(image.width, image.height, scale),
            coverage_areas: Vec::new(),
            wall_segments,
            project_name: project.title.clone(),
            rotation: 0.0,
            reference_markers: Vec::new(),
            floor_id: floor.id.clone(),
        });
        // floors sharing a sanitized name share one image path; last wins
        match assembled
            .images
            .iter_mut()
            .find(|(existing, _)| *existing == image_rel)
        {
            Some(existing) => existing.1 = image.png,
            None => assembled.images.push((image_rel, image.png)),
        }
    }
    Ok(assembled)
}

/// Nominal matching target: the declared size, else the crop bounding
/// box, rounded to whole pixels.
fn nominal_dimensions(floor: &EsxFloorPlan) -> (u32, u32) {
    let pick = |declared: Option<f64>, crop: Option<f64>| {
        declared
            .filter(|value| *value != 0.0)
            .or(crop)
            .unwrap_or(0.0)
            .round()
            .max(0.0) as u32
    };
    (
        pick(floor.width, floor.crop_max_x),
        pick(floor.height, floor.crop_max_y),
    )
}

/// The pixel/meter/feet dimension records for one floor.
///
/// The pixel record's height starts as the decoded raster height and is
/// replaced by the ceiling height in pixel units once the floor's scale
/// is known. Unscaled floors emit the pixel record alone.
fn build_dimensions(width: u32, height: u32, meters_per_pixel: f64) -> Vec<Dimension> {
    let (w, h) = (f64::from(width), f64::from(height));
    let mut dimensions = vec![Dimension {
        width: w,
        length: h,
        unit: LengthUnit::Pixels,
        height: h,
    }];
    if let Some(pixel_ceiling) = units::pixel_ceiling_height(meters_per_pixel) {
        let (w_m, h_m) = (
            units::pixels_to_meters(w, meters_per_pixel),
            units::pixels_to_meters(h, meters_per_pixel),
        );
        dimensions.push(Dimension {
            width: w_m,
            length: h_m,
            unit: LengthUnit::Meters,
            height: units::CEILING_HEIGHT_M,
        });
        dimensions.push(Dimension {
            width: units::meters_to_feet(w_m),
            length: units::meters_to_feet(h_m),
            unit: LengthUnit::Feet,
            height: units::CEILING_HEIGHT_FT,
        });
        dimensions[0].height = pixel_ceiling;
    }
    dimensions
}

/// Filter the raw segment list down to segments with exactly two
/// resolvable endpoints on one shared floor. The dropped remainder is
/// counted once, project-wide.
fn resolve_segments<'a>(
    segments: &'a [EsxWallSegment],
    points: &'a HashMap<String, EsxWallPoint>,
) -> (Vec<ResolvedSegment<'a>>, usize) {
    let mut resolved = Vec::new();
    let mut dropped = 0;
    for segment in segments {
        match resolve_segment(segment, points) {
            Some(ok) => resolved.push(ok),
            None => dropped += 1,
        }
    }
    (resolved, dropped)
}

fn resolve_segment<'a>(
    segment: &'a EsxWallSegment,
    points: &'a HashMap<String, EsxWallPoint>,
) -> Option<ResolvedSegment<'a>> {
    let [start_id, end_id] = segment.wall_points.as_slice() else {
        return None;
    };
    let (floor_a, start) = resolve_point(points.get(start_id)?)?;
    let (floor_b, end) = resolve_point(points.get(end_id)?)?;
    if floor_a != floor_b {
        return None;
    }
    Some(ResolvedSegment {
        floor_id: floor_a,
        start,
        end,
        wall_type_id: segment.wall_type_id.as_deref(),
    })
}

fn resolve_point(point: &EsxWallPoint) -> Option<(&str, (f64, f64))> {
    let location = point.location.as_ref()?;
    let floor_id = location.floor_plan_id.as_deref()?;
    let coord = location.coord.as_ref()?;
    Some((floor_id, (coord.x?, coord.y?)))
}

/// One floor's wall segments, flipped into the bottom-up space with
/// their material names attached. Unresolved wall types fall back to
/// the generic prefixed label.
fn build_wall_segments(
    floor_id: &str,
    image_height: f64,
    resolved: &[ResolvedSegment<'_>],
    materials: &ResolvedMaterials,
    fallback_label: &str,
) -> Vec<WallSegment> {
    resolved
        .iter()
        .filter(|segment| segment.floor_id == floor_id)
        .map(|segment| WallSegment {
            wall_type: segment
                .wall_type_id
                .and_then(|id| materials.name_for(id))
                .unwrap_or(fallback_label)
                .to_string(),
            start_point: PlanPoint {
                x: segment.start.0,
                y: units::flip_y(segment.start.1, image_height),
            },
            end_point: PlanPoint {
                x: segment.end.0,
                y: units::flip_y(segment.end.1, image_height),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oiconvert_core::data::esx::{EsxCoord, EsxLocation};

    fn point(id: &str, floor: &str, x: f64, y: f64) -> (String, EsxWallPoint) {
        (
            id.to_string(),
            EsxWallPoint {
                id: id.to_string(),
                location: Some(EsxLocation {
                    floor_plan_id: Some(floor.to_string()),
                    coord: Some(EsxCoord {
                        x: Some(x),
                        y: Some(y),
                    }),
                }),
            },
        )
    }

    fn segment(ids: &[&str], wall_type: Option<&str>) -> EsxWallSegment {
        EsxWallSegment {
            id: None,
            wall_points: ids.iter().map(|id| id.to_string()).collect(),
            wall_type_id: wall_type.map(str::to_string),
        }
    }

    fn floor(id: &str) -> EsxFloorPlan {
        EsxFloorPlan {
            id: id.to_string(),
            name: None,
            width: Some(400.0),
            height: Some(300.0),
            crop_max_x: None,
            crop_max_y: None,
            meters_per_unit: None,
        }
    }

    #[test]
    fn test_nominal_dimensions_prefer_declared_size() {
        let mut f = floor("floor-1");
        assert_eq!(nominal_dimensions(&f), (400, 300));

        f.width = None;
        f.height = Some(0.0);
        f.crop_max_x = Some(640.4);
        f.crop_max_y = Some(480.5);
        assert_eq!(nominal_dimensions(&f), (640, 481));

        f.crop_max_x = None;
        f.crop_max_y = None;
        assert_eq!(nominal_dimensions(&f), (0, 0));
    }

    #[test]
    fn test_dimensions_without_scale_are_pixel_only() {
        let dims = build_dimensions(400, 300, 0.0);
        assert_eq!(dims.len(), 1);
        assert_eq!(dims[0].unit, LengthUnit::Pixels);
        assert_eq!(dims[0].width, 400.0);
        assert_eq!(dims[0].length, 300.0);
        // without scale the pixel height stays the raster height
        assert_eq!(dims[0].height, 300.0);
    }

    #[test]
    fn test_dimensions_with_scale_carry_all_units() {
        let dims = build_dimensions(400, 300, 0.01);
        assert_eq!(dims.len(), 3);
        assert!((dims[0].height - 250.0).abs() < 1e-9);
        assert_eq!(dims[1].unit, LengthUnit::Meters);
        assert!((dims[1].width - 4.0).abs() < 1e-9);
        assert!((dims[1].length - 3.0).abs() < 1e-9);
        assert_eq!(dims[1].height, units::CEILING_HEIGHT_M);
        assert_eq!(dims[2].unit, LengthUnit::Feet);
        assert_eq!(dims[2].width, dims[1].width * 3.28084);
        assert_eq!(dims[2].length, dims[1].length * 3.28084);
        assert_eq!(dims[2].height, units::CEILING_HEIGHT_FT);
    }

    #[test]
    fn test_segments_filtered_per_floor_and_flipped() {
        let points: HashMap<_, _> = [
            point("p1", "floor-1", 10.0, 20.0),
            point("p2", "floor-1", 30.0, 40.0),
            point("p3", "floor-2", 50.0, 60.0),
            point("p4", "floor-2", 70.0, 80.0),
        ]
        .into_iter()
        .collect();
        let segments = vec![segment(&["p1", "p2"], None), segment(&["p3", "p4"], None)];

        let (resolved, dropped) = resolve_segments(&segments, &points);
        assert_eq!(dropped, 0);

        let materials = ResolvedMaterials::default();
        let on_first = build_wall_segments("floor-1", 300.0, &resolved, &materials, "[Imported] Wall");
        assert_eq!(on_first.len(), 1);
        assert_eq!(on_first[0].start_point.y, 280.0);
        assert_eq!(on_first[0].end_point.y, 260.0);

        let on_second = build_wall_segments("floor-2", 300.0, &resolved, &materials, "[Imported] Wall");
        assert_eq!(on_second.len(), 1);
    }

    #[test]
    fn test_invalid_segments_are_dropped_and_counted() {
        let points: HashMap<_, _> = [
            point("p1", "floor-1", 10.0, 20.0),
            point("p2", "floor-2", 30.0, 40.0),
            point("p3", "floor-1", 50.0, 60.0),
        ]
        .into_iter()
        .collect();
        let segments = vec![
            // endpoints on different floors
            segment(&["p1", "p2"], None),
            // wrong endpoint count
            segment(&["p1"], None),
            segment(&["p1", "p2", "p3"], None),
            // dangling reference
            segment(&["p1", "p9"], None),
        ];

        let (resolved, dropped) = resolve_segments(&segments, &points);
        assert!(resolved.is_empty());
        assert_eq!(dropped, 4);
    }

    #[test]
    fn test_unresolved_wall_type_gets_generic_label() {
        let points: HashMap<_, _> = [
            point("p1", "floor-1", 10.0, 20.0),
            point("p2", "floor-1", 30.0, 40.0),
        ]
        .into_iter()
        .collect();
        let segments = vec![segment(&["p1", "p2"], Some("wt-unknown"))];

        let (resolved, _) = resolve_segments(&segments, &points);
        let materials = ResolvedMaterials::default();
        let built = build_wall_segments("floor-1", 300.0, &resolved, &materials, "[Imported] Wall");
        assert_eq!(built[0].wall_type, "[Imported] Wall");
    }
}
