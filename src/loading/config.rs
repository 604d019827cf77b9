use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the static campus datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// GeoJSON feature collection of walkable paths
    /// (LineString or MultiLineString geometries)
    pub paths_path: PathBuf,
    /// GeoJSON feature collection of named places (Point geometries
    /// with a `name` property)
    pub places_path: PathBuf,
}
