// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{ModelConfig, campus_model_from_geojson, create_campus_model};
pub use crate::model::{CampusModel, Place, Places};
pub use crate::routing::{RouteInfo, SnapResult, route_between, snap_to_network};
pub use crate::session::{PositionUpdate, Wayfinder};
pub use crate::tracking::{PositionFix, PositionTracker};

// Core measurement types and reference constants
pub use crate::{AVERAGE_WALKING_SPEED, Meters, ROUTE_SNAP_THRESHOLD, Seconds};
