//! Conversion pipeline orchestration.
//!
//! Wires the independent stages into the sequential load → transform →
//! write pipeline. The whole source model is loaded before any
//! cross-referencing, and the output archive is written only once
//! every part of the document exists.

use crate::accesspoints;
use crate::document::OpenIntentDocument;
use crate::error::Result;
use crate::floorplan::{self, AssembledFloors};
use crate::materials;
use crate::options::ConvertOptions;
use crate::writer;
use oiconvert_core::{EsxArchive, Project};
use std::path::Path;
use tracing::info;

/// Counts describing a finished conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionSummary {
    /// Floors written to the output document.
    pub floors: usize,
    /// Wall materials written.
    pub materials: usize,
    /// Access points written.
    pub access_points: usize,
    /// Wall segments written, across all floors.
    pub wall_segments: usize,
    /// Segments dropped for unresolvable or cross-floor endpoints.
    pub dropped_segments: usize,
}

/// One-shot converter from a survey archive to an OpenIntent archive.
#[derive(Debug, Default)]
pub struct EsxConverter {
    options: ConvertOptions,
}

impl EsxConverter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline, writing the output archive on success.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        esx_path: P,
        out_path: Q,
    ) -> Result<ConversionSummary> {
        let mut archive = EsxArchive::open(esx_path.as_ref())?;
        let project = Project::load(&mut archive)?;
        info!(
            floors = project.floors.len(),
            access_points = project.access_points.len(),
            "Loaded survey '{}'",
            project.title
        );

        let resolved = materials::resolve_materials(
            &project.wall_types,
            &project.wall_segments,
            &self.options,
        );
        let floors = floorplan::assemble_floors(&mut archive, &project, &resolved, &self.options)?;
        let access_points = accesspoints::map_access_points(&project, &floors, &self.options);

        let AssembledFloors {
            floorplans,
            images,
            image_heights: _,
            dropped_segments,
        } = floors;
        let summary = ConversionSummary {
            floors: floorplans.len(),
            materials: resolved.materials.len(),
            access_points: access_points.len(),
            wall_segments: floorplans
                .iter()
                .map(|floorplan| floorplan.wall_segments.len())
                .sum(),
            dropped_segments,
        };

        let document =
            OpenIntentDocument::assemble(floorplans, resolved.materials, access_points);
        writer::write_archive(out_path, &document, &images)?;
        Ok(summary)
    }
}
