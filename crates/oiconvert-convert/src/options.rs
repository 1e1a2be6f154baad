//! Conversion options.

use serde::{Deserialize, Serialize};

/// Default prefix for imported material names.
pub const DEFAULT_MATERIAL_PREFIX: &str = "[Imported] ";

/// Default vendor written to emitted access points.
pub const DEFAULT_FALLBACK_VENDOR: &str = "ubiquiti";

/// Default model written to emitted access points.
pub const DEFAULT_FALLBACK_MODEL: &str = "uap-ac-pro";

/// Options controlling a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Prefix applied to every imported material name.
    pub material_prefix: String,

    /// Export every wall type instead of only those referenced by
    /// segments.
    pub all_materials: bool,

    /// Vendor written to emitted access points. Originals are
    /// preserved in the passthrough fields regardless.
    pub fallback_vendor: String,

    /// Model written to emitted access points.
    pub fallback_model: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            material_prefix: DEFAULT_MATERIAL_PREFIX.to_string(),
            all_materials: false,
            fallback_vendor: DEFAULT_FALLBACK_VENDOR.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }
}
