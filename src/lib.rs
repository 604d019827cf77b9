//! Routing core for a browser-based campus wayfinding widget.
//!
//! Builds a weighted walking graph from a static GeoJSON path dataset,
//! snaps arbitrary points onto the network, computes shortest walking
//! routes and keeps the user's live position (and the active route) up to
//! date as position fixes arrive.
//!
//! The [`Wayfinder`] session exposes the two entry points the presentation
//! layer needs; the model, snapper and solver below it are usable on their
//! own.

pub mod error;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod session;
pub mod tracking;

pub use error::Error;
pub use model::CampusModel;
pub use session::{PositionUpdate, Wayfinder};

/// Distance in meters
pub type Meters = f64;
/// Duration in seconds
pub type Seconds = f64;

/// Average walking speed used for time estimates, m/s
pub const AVERAGE_WALKING_SPEED: f64 = 1.4;

/// Maximum distance at which a raw fix is still snapped onto the active
/// route, meters. Beyond it the user has left the path and is shown where
/// they really are.
pub const ROUTE_SNAP_THRESHOLD: Meters = 15.0;

/// Campus center, displayed when no position fix is available
pub const DEFAULT_LOCATION_LAT: f64 = 2.927953649184701;
pub const DEFAULT_LOCATION_LNG: f64 = 101.642168616230531;
