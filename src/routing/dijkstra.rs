use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::model::network::{PathEdge, PathNode};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap); equal costs
// pop the lower node index first, so equally short paths resolve the same
// way on every run.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over the walking graph, between two nodes.
///
/// Returns the ordered node sequence from `start` to `target`, a single-node
/// sequence when `start == target`, or an empty vector when the two nodes
/// are not connected.
pub fn shortest_path(
    graph: &UnGraph<PathNode, PathEdge>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        // Examine neighbors
        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    if target != start && !predecessors.contains_key(&target) {
        return Vec::new();
    }

    // Follow predecessors backward from target to start, then flip
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::NodeKey;
    use geo::Point;

    fn add_node(graph: &mut UnGraph<PathNode, PathEdge>, x: f64, y: f64) -> NodeIndex {
        let geometry = Point::new(x, y);
        graph.add_node(PathNode {
            key: NodeKey::of(geometry),
            geometry,
        })
    }

    /// a--b--d is the short way (2 m), a--c--d the long one (6 m)
    fn diamond() -> (UnGraph<PathNode, PathEdge>, [NodeIndex; 4]) {
        let mut graph = UnGraph::new_undirected();
        let a = add_node(&mut graph, 0.0, 0.0);
        let b = add_node(&mut graph, 0.0, 1.0);
        let c = add_node(&mut graph, 1.0, 0.0);
        let d = add_node(&mut graph, 1.0, 1.0);

        graph.add_edge(a, b, PathEdge { weight: 1.0 });
        graph.add_edge(b, d, PathEdge { weight: 1.0 });
        graph.add_edge(a, c, PathEdge { weight: 5.0 });
        graph.add_edge(c, d, PathEdge { weight: 1.0 });

        (graph, [a, b, c, d])
    }

    #[test]
    fn picks_the_shorter_of_two_routes() {
        let (graph, [a, b, _, d]) = diamond();
        let path = shortest_path(&graph, a, d);
        assert_eq!(path, vec![a, b, d]);

        let total: f64 = path
            .windows(2)
            .map(|pair| {
                let edge = graph.find_edge(pair[0], pair[1]).unwrap();
                graph.edge_weight(edge).unwrap().weight
            })
            .sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn disconnected_nodes_yield_an_empty_path() {
        let mut graph = UnGraph::new_undirected();
        let a = add_node(&mut graph, 0.0, 0.0);
        let b = add_node(&mut graph, 0.0, 1.0);
        let c = add_node(&mut graph, 5.0, 5.0);
        let d = add_node(&mut graph, 5.0, 6.0);
        graph.add_edge(a, b, PathEdge { weight: 1.0 });
        graph.add_edge(c, d, PathEdge { weight: 1.0 });

        assert!(shortest_path(&graph, a, d).is_empty());
    }

    #[test]
    fn start_equals_target() {
        let (graph, [a, ..]) = diamond();
        assert_eq!(shortest_path(&graph, a, a), vec![a]);
    }

    #[test]
    fn equal_cost_paths_resolve_deterministically() {
        let mut graph = UnGraph::new_undirected();
        let a = add_node(&mut graph, 0.0, 0.0);
        let b = add_node(&mut graph, 0.0, 1.0);
        let c = add_node(&mut graph, 1.0, 0.0);
        let d = add_node(&mut graph, 1.0, 1.0);
        graph.add_edge(a, b, PathEdge { weight: 1.0 });
        graph.add_edge(b, d, PathEdge { weight: 1.0 });
        graph.add_edge(a, c, PathEdge { weight: 1.0 });
        graph.add_edge(c, d, PathEdge { weight: 1.0 });

        let first = shortest_path(&graph, a, d);
        for _ in 0..10 {
            assert_eq!(shortest_path(&graph, a, d), first);
        }
    }
}
