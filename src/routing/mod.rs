//! Snapping, shortest-path search and route assembly

pub mod dijkstra;
pub mod route;
pub mod snap;
mod to_geojson;

pub use dijkstra::shortest_path;
pub use route::{RouteInfo, route_between};
pub use snap::{SnapResult, snap_to_network, snap_to_polyline};
