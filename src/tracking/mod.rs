//! Live position tracking against the active route.
//!
//! The position source itself (browser geolocation, a replay file) lives
//! outside the core; this module only consumes its fixes.

use geo::Point;
use log::warn;

use crate::geometry;
use crate::routing::{RouteInfo, snap_to_polyline};
use crate::{DEFAULT_LOCATION_LAT, DEFAULT_LOCATION_LNG, ROUTE_SNAP_THRESHOLD};

/// One raw report from the position source.
#[derive(Debug, Clone, Copy)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Compass heading in degrees, when the source provides one
    pub heading: Option<f64>,
    /// Horizontal accuracy radius in meters
    pub accuracy: Option<f64>,
}

impl PositionFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            heading: None,
            accuracy: None,
        }
    }

    pub(crate) fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// Tracks the user's displayed position across the fix stream.
///
/// Created when tracking starts and kept for the whole session. Before the
/// first fix arrives the displayed position is the fallback location, so
/// the rest of the widget can operate indoors or with geolocation denied.
#[derive(Debug, Clone)]
pub struct PositionTracker {
    raw: Option<Point<f64>>,
    displayed: Option<Point<f64>>,
    heading: Option<f64>,
    follow: bool,
    fallback: Point<f64>,
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTracker {
    pub fn new() -> Self {
        Self {
            raw: None,
            displayed: None,
            heading: None,
            follow: false,
            fallback: Point::new(DEFAULT_LOCATION_LNG, DEFAULT_LOCATION_LAT),
        }
    }

    /// Replaces the default location used before a fix arrives or after a
    /// position-source failure.
    pub fn with_fallback(mut self, fallback: Point<f64>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn has_fix(&self) -> bool {
        self.raw.is_some()
    }

    /// Position currently shown to the user: the latest (possibly
    /// route-snapped) fix, or the fallback before any fix arrives.
    pub fn displayed_position(&self) -> Point<f64> {
        self.displayed.unwrap_or(self.fallback)
    }

    pub fn raw_position(&self) -> Option<Point<f64>> {
        self.raw
    }

    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    pub fn follow_enabled(&self) -> bool {
        self.follow
    }

    /// Follow mode ends as soon as the user pans or zooms by hand.
    pub fn pause_follow(&mut self) {
        self.follow = false;
    }

    /// Explicit recenter action; returns the position to center on.
    pub fn recenter(&mut self) -> Point<f64> {
        self.follow = true;
        self.displayed_position()
    }

    pub(crate) fn set_follow(&mut self, follow: bool) {
        self.follow = follow;
    }

    /// Folds a new fix into the tracker and returns the displayed position.
    ///
    /// With an active route the fix is snapped onto the route geometry,
    /// unless it strays more than [`ROUTE_SNAP_THRESHOLD`] meters from it;
    /// a user who has clearly left the path is shown where they really are.
    pub fn update(&mut self, fix: &PositionFix, route: Option<&RouteInfo>) -> Point<f64> {
        let raw = fix.point();

        let displayed = match route.and_then(|route| snap_to_polyline(raw, &route.geometry)) {
            Some((snapped, distance)) if distance <= ROUTE_SNAP_THRESHOLD => snapped,
            _ => raw,
        };

        self.heading = fix
            .heading
            .or_else(|| {
                self.displayed.and_then(|previous| {
                    (previous != displayed)
                        .then(|| geometry::initial_bearing(previous, displayed))
                })
            })
            .or(self.heading);

        self.raw = Some(raw);
        self.displayed = Some(displayed);
        displayed
    }

    /// Position-source failure: keep operating from the fallback location.
    pub fn position_source_failed(&mut self) -> Point<f64> {
        warn!("position source failed, falling back to the default location");
        if self.displayed.is_none() {
            self.displayed = Some(self.fallback);
        }
        self.displayed_position()
    }

    /// Clears fix state when the tracking UI unsubscribes from the
    /// position stream. The fallback and a later re-subscription keep
    /// working.
    pub fn reset(&mut self) {
        self.raw = None;
        self.displayed = None;
        self.heading = None;
        self.follow = false;
    }
}
