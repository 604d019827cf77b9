use std::fmt;

use geo::{Distance, Haversine, LineString, Point};
use hashbrown::HashMap;
use log::{debug, warn};
use petgraph::graph::{NodeIndex, UnGraph};
use rstar::RTree;
use rstar::primitives::{GeomWithData, Line};

use super::components::{PathEdge, PathNode, PathSegment};
use crate::geometry::NodeKey;

/// Spatially indexed segment; the payload indexes into [`PathNetwork::segments`].
pub type IndexedSegment = GeomWithData<Line<[f64; 2]>, usize>;

/// Weighted undirected graph over the campus path network, plus a spatial
/// index over the raw segments for snapping queries.
///
/// Built once from the static path dataset and immutable afterwards.
/// Per-query snap nodes are spliced into a disposable copy, never here.
#[derive(Clone)]
pub struct PathNetwork {
    pub graph: UnGraph<PathNode, PathEdge>,
    pub(crate) node_index: HashMap<NodeKey, NodeIndex>,
    segments: Vec<PathSegment>,
    rtree: RTree<IndexedSegment>,
}

impl PathNetwork {
    /// Builds the graph from the path polylines.
    ///
    /// Every consecutive coordinate pair becomes a symmetric edge weighted
    /// by its great-circle length. Endpoints shared between polylines merge
    /// through their [`NodeKey`]. A repeated edge between the same pair of
    /// nodes keeps the smaller weight.
    pub fn build(polylines: &[LineString<f64>]) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut node_index: HashMap<NodeKey, NodeIndex> = HashMap::new();
        let mut segments = Vec::new();

        for (polyline_idx, line) in polylines.iter().enumerate() {
            for segment in line.lines() {
                let (a, b) = (segment.start_point(), segment.end_point());
                if a == b {
                    debug!("zero-length path segment at ({:.6}, {:.6})", a.x(), a.y());
                    continue;
                }

                segments.push(PathSegment {
                    start: a,
                    end: b,
                    polyline: polyline_idx,
                });

                let na = intern(&mut graph, &mut node_index, a);
                let nb = intern(&mut graph, &mut node_index, b);
                if na == nb {
                    // Shorter than the key resolution; nothing to connect
                    continue;
                }

                let weight = Haversine.distance(a, b);
                match graph.find_edge(na, nb) {
                    Some(edge) => {
                        warn!(
                            "overlapping path segments between ({:.6}, {:.6}) and ({:.6}, {:.6})",
                            a.x(),
                            a.y(),
                            b.x(),
                            b.y()
                        );
                        if let Some(existing) = graph.edge_weight_mut(edge) {
                            if weight < existing.weight {
                                existing.weight = weight;
                            }
                        }
                    }
                    None => {
                        graph.add_edge(na, nb, PathEdge { weight });
                    }
                }
            }
        }

        let rtree = RTree::bulk_load(
            segments
                .iter()
                .enumerate()
                .map(|(idx, segment)| {
                    IndexedSegment::new(
                        Line::new(
                            [segment.start.x(), segment.start.y()],
                            [segment.end.x(), segment.end.y()],
                        ),
                        idx,
                    )
                })
                .collect(),
        );

        debug!(
            "path graph: {} nodes, {} edges, {} segments",
            graph.node_count(),
            graph.edge_count(),
            segments.len()
        );

        Self {
            graph,
            node_index,
            segments,
            rtree,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn node(&self, key: NodeKey) -> Option<NodeIndex> {
        self.node_index.get(&key).copied()
    }

    /// Nearest path segment to `query` in planar degree space.
    ///
    /// Returns `None` only when the network has no segments.
    pub fn nearest_segment(&self, query: Point<f64>) -> Option<(usize, &PathSegment)> {
        let found = self.rtree.nearest_neighbor(&[query.x(), query.y()])?;
        Some((found.data, &self.segments[found.data]))
    }
}

impl fmt::Debug for PathNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathNetwork")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("segments", &self.segments.len())
            .finish()
    }
}

fn intern(
    graph: &mut UnGraph<PathNode, PathEdge>,
    node_index: &mut HashMap<NodeKey, NodeIndex>,
    point: Point<f64>,
) -> NodeIndex {
    let key = NodeKey::of(point);
    *node_index
        .entry(key)
        .or_insert_with(|| graph.add_node(PathNode {
            key,
            geometry: point,
        }))
}
