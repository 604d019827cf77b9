//! Path network components - nodes, edges and raw segments

use geo::Point;

use crate::Meters;
use crate::geometry::NodeKey;

/// Path graph node
#[derive(Debug, Clone)]
pub struct PathNode {
    /// Canonical identity of the node
    pub key: NodeKey,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Path graph edge (walkable stretch between two nodes)
#[derive(Debug, Clone)]
pub struct PathEdge {
    /// Walking distance in meters
    pub weight: Meters,
}

/// One segment of a source polyline, the atomic unit for snapping.
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub start: Point<f64>,
    pub end: Point<f64>,
    /// Index of the polyline this segment belongs to
    pub polyline: usize,
}
