use geo::{Distance, Haversine, LineString, Point};
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};

use super::dijkstra::shortest_path;
use super::snap::{SnapResult, snap_to_network};
use crate::geometry::{self, NodeKey};
use crate::model::CampusModel;
use crate::model::network::{PathEdge, PathNode};
use crate::{AVERAGE_WALKING_SPEED, Error, Meters, Seconds};

/// A computed walking route between two query points.
#[derive(Debug, Clone)]
pub struct RouteInfo {
    /// Route polyline, beginning and ending exactly at the query points
    pub geometry: LineString<f64>,
    /// Total walking distance in meters
    pub distance: Meters,
    /// Estimated walking time in seconds at [`AVERAGE_WALKING_SPEED`]
    pub duration: Seconds,
    /// The requested origin
    pub start: Point<f64>,
    /// The requested destination
    pub end: Point<f64>,
}

/// Disposable copy of the base graph that snap nodes are spliced into, so
/// the shared network stays untouched across queries.
struct QueryGraph {
    graph: UnGraph<PathNode, PathEdge>,
    node_index: HashMap<NodeKey, NodeIndex>,
}

impl QueryGraph {
    fn of(model: &CampusModel) -> Self {
        Self {
            graph: model.network.graph.clone(),
            node_index: model.network.node_index.clone(),
        }
    }

    /// Inserts the snapped point as a node bridged to its bracketing
    /// segment endpoints. The original endpoint-to-endpoint edge is kept,
    /// so traversal that merely passes the segment is unaffected. A snap
    /// that lands on an existing node reuses it.
    fn splice(&mut self, snap: &SnapResult) -> NodeIndex {
        let key = NodeKey::of(snap.point);
        if let Some(&existing) = self.node_index.get(&key) {
            return existing;
        }

        let node = self.graph.add_node(PathNode {
            key,
            geometry: snap.point,
        });
        self.node_index.insert(key, node);

        let mut anchors = [Some(snap.start), Some(snap.end)];
        if NodeKey::of(snap.start) == NodeKey::of(snap.end) {
            anchors[1] = None;
        }
        for endpoint in anchors.into_iter().flatten() {
            if let Some(&anchor) = self.node_index.get(&NodeKey::of(endpoint)) {
                let weight = Haversine.distance(snap.point, endpoint);
                self.graph.add_edge(node, anchor, PathEdge { weight });
            }
        }

        node
    }
}

/// Computes a walking route between two arbitrary points.
///
/// Both points are snapped onto the path network, spliced into a private
/// copy of the graph and connected by Dijkstra. The returned geometry
/// always starts and ends at the exact query points, even though the
/// interior vertices are network nodes.
///
/// # Errors
///
/// [`Error::NoNearbyPath`] when the network has no segments to snap to,
/// [`Error::NoPathFound`] when the two snap points are not connected.
pub fn route_between(
    model: &CampusModel,
    start: Point<f64>,
    end: Point<f64>,
) -> Result<RouteInfo, Error> {
    let start_snap = snap_to_network(model, start).ok_or(Error::NoNearbyPath)?;
    let end_snap = snap_to_network(model, end).ok_or(Error::NoNearbyPath)?;

    let mut query_graph = QueryGraph::of(model);
    let from = query_graph.splice(&start_snap);
    let to = query_graph.splice(&end_snap);

    let node_path = shortest_path(&query_graph.graph, from, to);
    if node_path.is_empty() {
        return Err(Error::NoPathFound);
    }

    let mut points: Vec<Point<f64>> = node_path
        .iter()
        .filter_map(|&idx| query_graph.graph.node_weight(idx))
        .map(|node| node.geometry)
        .collect();

    // The displayed route must begin and end at the query points
    // themselves, not at their snap locations
    if points.first() != Some(&start) {
        points.insert(0, start);
    }
    if points.last() != Some(&end) {
        points.push(end);
    }

    let geometry = LineString::from(points);
    let distance = geometry::path_length(&geometry);
    let duration = distance / AVERAGE_WALKING_SPEED;

    debug!(
        "route: {distance:.1} m, {duration:.0} s, {} vertices",
        geometry.0.len()
    );

    Ok(RouteInfo {
        geometry,
        distance,
        duration,
        start,
        end,
    })
}
