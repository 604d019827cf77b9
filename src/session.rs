//! Session facade tying the campus model, router and tracker together.

use geo::Point;
use log::warn;

use crate::loading::{ModelConfig, campus_model_from_geojson, create_campus_model};
use crate::model::CampusModel;
use crate::routing::{RouteInfo, route_between};
use crate::tracking::{PositionFix, PositionTracker};
use crate::Error;

/// How many recent searches the session keeps for the search box.
const RECENT_SEARCH_LIMIT: usize = 5;

/// Result of folding one position fix into the session.
#[derive(Debug, Clone)]
pub struct PositionUpdate {
    /// Position to draw the user marker at
    pub displayed: Point<f64>,
    /// Marker heading in degrees, when one is known
    pub heading: Option<f64>,
    /// The active route, refreshed when a destination is set
    pub route: Option<RouteInfo>,
}

/// One user's wayfinding session: the loaded campus model, the live
/// position tracker and the currently active destination and route.
///
/// This is the whole surface the presentation layer needs: [`route`] for
/// explicit queries and [`update_position`] for the fix stream. Marker
/// drawing, panning and popups stay outside.
///
/// [`route`]: Wayfinder::route
/// [`update_position`]: Wayfinder::update_position
#[derive(Debug, Default)]
pub struct Wayfinder {
    model: Option<CampusModel>,
    tracker: PositionTracker,
    destination: Option<Point<f64>>,
    active_route: Option<RouteInfo>,
    search_history: Vec<String>,
}

impl Wayfinder {
    /// Creates a session with no dataset. Routing fails with
    /// [`Error::DatasetNotLoaded`] until one of the load methods succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an already built model.
    pub fn with_model(model: CampusModel) -> Self {
        Self {
            model: Some(model),
            ..Self::default()
        }
    }

    /// Loads the campus datasets from disk.
    pub fn load(&mut self, config: &ModelConfig) -> Result<(), Error> {
        self.model = Some(create_campus_model(config)?);
        Ok(())
    }

    /// Loads the campus datasets from GeoJSON already in memory.
    pub fn load_from_geojson(&mut self, paths: &str, places: &str) -> Result<(), Error> {
        self.model = Some(campus_model_from_geojson(paths, places)?);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Result<&CampusModel, Error> {
        self.model.as_ref().ok_or(Error::DatasetNotLoaded)
    }

    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Computes a route between two explicit points.
    pub fn route(&self, start: Point<f64>, end: Point<f64>) -> Result<RouteInfo, Error> {
        route_between(self.model()?, start, end)
    }

    /// Starts navigating from the current displayed position to
    /// `destination`: computes the initial route, keeps the destination for
    /// recomputation on future fixes and re-enables follow mode.
    pub fn navigate_to(&mut self, destination: Point<f64>) -> Result<RouteInfo, Error> {
        let origin = self.tracker.displayed_position();
        let route = route_between(self.model()?, origin, destination)?;

        self.destination = Some(destination);
        self.active_route = Some(route.clone());
        self.tracker.set_follow(true);

        Ok(route)
    }

    /// Resolves a destination by place name and starts navigating to it.
    ///
    /// A successfully resolved name is remembered in the search history,
    /// even when the subsequent route computation fails.
    pub fn navigate_to_place(&mut self, name: &str) -> Result<RouteInfo, Error> {
        let place = self
            .model()?
            .places
            .resolve(name)
            .ok_or_else(|| Error::UnknownPlace(name.to_string()))?;

        let destination = place.geometry;
        let canonical = place.name.clone();
        if !self.search_history.contains(&canonical) {
            self.search_history.push(canonical);
        }

        self.navigate_to(destination)
    }

    /// Most recent place searches, newest first. In-memory only, kept for
    /// the lifetime of the session.
    pub fn recent_searches(&self) -> impl Iterator<Item = &str> {
        self.search_history
            .iter()
            .rev()
            .take(RECENT_SEARCH_LIMIT)
            .map(String::as_str)
    }

    /// Drops the destination and its route; tracking continues.
    pub fn clear_destination(&mut self) {
        self.destination = None;
        self.active_route = None;
    }

    pub fn destination(&self) -> Option<Point<f64>> {
        self.destination
    }

    pub fn active_route(&self) -> Option<&RouteInfo> {
        self.active_route.as_ref()
    }

    /// Folds one position fix into the session.
    ///
    /// The displayed position is snapped onto the active route within the
    /// closeness threshold. With a destination set, the route is recomputed
    /// from the new position and replaced; results apply in arrival order.
    /// A failed recomputation keeps the previous route, so the map never
    /// shows a partial one.
    pub fn update_position(&mut self, fix: &PositionFix) -> PositionUpdate {
        let displayed = self.tracker.update(fix, self.active_route.as_ref());

        if let (Some(destination), Some(model)) = (self.destination, self.model.as_ref()) {
            match route_between(model, displayed, destination) {
                Ok(route) => self.active_route = Some(route),
                Err(error) => warn!("route refresh failed: {error}"),
            }
        }

        PositionUpdate {
            displayed,
            heading: self.tracker.heading(),
            route: self.active_route.clone(),
        }
    }

    /// Position-source failure: continue from the fallback location.
    pub fn position_source_failed(&mut self) -> PositionUpdate {
        let displayed = self.tracker.position_source_failed();
        PositionUpdate {
            displayed,
            heading: self.tracker.heading(),
            route: self.active_route.clone(),
        }
    }

    /// The user panned or zoomed by hand; stop recentering on them.
    pub fn pause_follow(&mut self) {
        self.tracker.pause_follow();
    }

    /// Explicit recenter action; returns the position to center on.
    pub fn recenter(&mut self) -> Point<f64> {
        self.tracker.recenter()
    }

    /// Tears down tracking state when the position stream is unsubscribed.
    pub fn stop_tracking(&mut self) {
        self.tracker.reset();
        self.clear_destination();
    }
}
