use geo::LineString;

use super::network::PathNetwork;
use super::places::Places;

/// Immutable campus dataset: the walkable path network, the raw polylines it
/// was built from, and the named destinations.
///
/// Routing treats this as read-only, so a single model can serve repeated
/// and concurrent queries.
#[derive(Debug, Clone)]
pub struct CampusModel {
    pub network: PathNetwork,
    pub places: Places,
    polylines: Vec<LineString<f64>>,
}

impl CampusModel {
    pub fn new(polylines: Vec<LineString<f64>>, places: Places) -> Self {
        let network = PathNetwork::build(&polylines);
        Self {
            network,
            places,
            polylines,
        }
    }

    pub fn polylines(&self) -> &[LineString<f64>] {
        &self.polylines
    }
}
