//! Data model for campus path routing
//!
//! Contains the path network graph and the named-places registry.

pub mod campus;
pub mod network;
pub mod places;

pub use campus::CampusModel;
pub use network::{IndexedSegment, PathNetwork};
pub use places::{Place, Places};
