//! Runtime object manifest
//!
//! The board renderer only needs `id`, `name` and `scale` for objects that
//! have a sprite image. This module reduces a descriptor list to that shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{SpriteDescriptor, Warning};

/// Scale used when a descriptor has no `scale` or a zero scale.
pub const DEFAULT_OBJECT_SCALE: f64 = 1.0 / 200.0;

/// One entry of the runtime manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: i64,
    pub name: String,
    pub scale: f64,
}

/// Manifest entries plus the descriptors that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    pub warnings: Vec<Warning>,
}

/// Build the runtime manifest from projected descriptors.
///
/// Descriptors without a non-empty `image` are left out silently; those
/// whose `id` is not an integer are left out with a warning.
pub fn build_manifest(descriptors: &[SpriteDescriptor], default_scale: f64) -> Manifest {
    let mut manifest = Manifest::default();

    for descriptor in descriptors {
        let has_image = descriptor.get("image").and_then(Value::as_str).is_some_and(|s| !s.is_empty());
        if !has_image {
            continue;
        }

        let name = descriptor.name().unwrap_or_default().to_string();
        let Some(id) = descriptor.id().and_then(Value::as_i64) else {
            manifest.warnings.push(Warning::new(
                name,
                "object has an image but no integer id, left out of the manifest",
            ));
            continue;
        };

        let scale = match descriptor.get("scale").and_then(Value::as_f64) {
            Some(s) if s != 0.0 => s,
            _ => default_scale,
        };

        manifest.entries.push(ManifestEntry { id, name, scale });
    }

    manifest
}
