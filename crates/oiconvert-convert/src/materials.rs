//! Wall material derivation.
//!
//! Maps the source wall-type catalog onto the target's deduplicated
//! material list. By default only wall types actually referenced by
//! segments are exported; the full catalog can be requested instead.

use crate::document::{RfProperties, WallMaterial};
use crate::options::ConvertOptions;
use oiconvert_core::data::esx::{EsxWallSegment, EsxWallType};
use oiconvert_core::units::round_to_tenth;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Material type written for every imported material.
pub const ITU_MATERIAL_UNKNOWN: &str = "ITU_R_UNKNOWN";

/// Base name when a wall type carries neither name nor key.
pub const GENERIC_WALL_NAME: &str = "Wall";

/// Display color when the source wall type has none.
const DEFAULT_COLOR: &str = "#888888";

/// Wall thickness in meters when the source omits it.
const DEFAULT_THICKNESS_M: f64 = 0.1;

/// Band identifiers in selection priority order: 5 GHz, 2.4 GHz, 6 GHz.
const BAND_PRIORITY: [&str; 3] = ["FIVE", "TWO", "SIX"];

/// The derived material list plus the wall-type id → rendered name map
/// used when resolving segments.
#[derive(Debug, Default)]
pub struct ResolvedMaterials {
    /// Materials in source wall-type order.
    pub materials: Vec<WallMaterial>,
    /// Rendered name per source wall-type id.
    pub name_by_type: HashMap<String, String>,
}

impl ResolvedMaterials {
    /// Rendered material name for a wall-type id, when it was exported.
    pub fn name_for(&self, wall_type_id: &str) -> Option<&str> {
        self.name_by_type.get(wall_type_id).map(String::as_str)
    }
}

/// Derive the target material list from the source wall types.
///
/// Names are `prefix + (name | key | "Wall")`; a rendered-name
/// collision is disambiguated by appending the source wall-type id.
pub fn resolve_materials(
    wall_types: &[EsxWallType],
    wall_segments: &[EsxWallSegment],
    options: &ConvertOptions,
) -> ResolvedMaterials {
    let used: HashSet<&str> = wall_segments
        .iter()
        .filter_map(|segment| segment.wall_type_id.as_deref())
        .collect();

    let mut resolved = ResolvedMaterials::default();
    let mut seen = HashSet::new();
    for wall_type in wall_types {
        if !options.all_materials && !used.contains(wall_type.id.as_str()) {
            continue;
        }

        let base = wall_type
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(wall_type.key.as_deref().filter(|key| !key.is_empty()))
            .unwrap_or(GENERIC_WALL_NAME);
        let mut name = format!("{}{}", options.material_prefix, base);
        if !seen.insert(name.clone()) {
            name = format!("{} ({})", name, wall_type.id);
            seen.insert(name.clone());
        }

        let thickness = match wall_type.thickness {
            Some(thickness) if thickness != 0.0 => thickness,
            _ => DEFAULT_THICKNESS_M,
        };
        let per_meter = attenuation_per_meter(wall_type);

        resolved.materials.push(WallMaterial {
            name: name.clone(),
            itu_material_type: ITU_MATERIAL_UNKNOWN.to_string(),
            rf_properties: RfProperties {
                attenuation_flat: round_to_tenth(per_meter * thickness),
                attenuation_per_m: round_to_tenth(per_meter),
            },
            thickness_m: thickness,
            display_color: wall_type
                .color
                .clone()
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        });
        resolved.name_by_type.insert(wall_type.id.clone(), name);
    }

    debug!(
        exported = resolved.materials.len(),
        catalog = wall_types.len(),
        all_materials = options.all_materials,
        "Resolved wall materials"
    );
    resolved
}

/// Attenuation in dB per meter, taking the first priority band that
/// carries a defined factor. Absent entirely yields 0.
fn attenuation_per_meter(wall_type: &EsxWallType) -> f64 {
    for band in BAND_PRIORITY {
        let record = wall_type
            .propagation_properties
            .iter()
            .find(|prop| prop.band.as_deref() == Some(band));
        if let Some(factor) = record.and_then(|prop| prop.attenuation_factor) {
            return factor;
        }
    }
    0.0
}
