//! Campus path network model

pub mod components;
pub mod graph;

pub use components::{PathEdge, PathNode, PathSegment};
pub use graph::{IndexedSegment, PathNetwork};
