use geojson::{Feature, Geometry};
use serde_json::{Map, json};

use super::route::RouteInfo;

impl RouteInfo {
    /// Converts the route to a `GeoJSON` Feature for the display layer.
    pub fn to_feature(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert("distance_m".to_string(), json!(self.distance));
        properties.insert("duration_s".to_string(), json!(self.duration));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new((&self.geometry).into())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
