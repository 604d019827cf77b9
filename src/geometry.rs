//! Point and segment math shared by the graph builder, snapper and tracker.
//!
//! Coordinates are `geo::Point<f64>` with x = longitude and y = latitude.
//! Projection treats the campus extent as planar; measured lengths and
//! bearings use great-circle (Haversine) geometry.

use geo::{Bearing, Distance, Haversine, LineString, Point};

use crate::Meters;

const MICRODEGREES: f64 = 1e6;

/// Canonical graph identity of a coordinate.
///
/// Latitude and longitude are rounded to six decimal degrees (~0.11 m) and
/// stored as scaled integers. Coordinates that round to the same key are the
/// same network node, which is what merges shared endpoints of adjacent
/// polylines into graph vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    lng: i64,
    lat: i64,
}

impl NodeKey {
    pub fn of(point: Point<f64>) -> Self {
        Self {
            lng: (point.x() * MICRODEGREES).round() as i64,
            lat: (point.y() * MICRODEGREES).round() as i64,
        }
    }
}

/// Orthogonal projection of `query` onto the segment `a`-`b`.
///
/// The parameter `t` is clamped to `[0, 1]`, so the returned point always
/// lies between the endpoints and never on the segment's extension. A
/// zero-length segment projects onto its single point with `t = 0`.
pub fn project_onto_segment(
    query: Point<f64>,
    a: Point<f64>,
    b: Point<f64>,
) -> (Point<f64>, f64) {
    let ab_x = b.x() - a.x();
    let ab_y = b.y() - a.y();
    let ab_len2 = ab_x * ab_x + ab_y * ab_y;
    if ab_len2 < f64::EPSILON {
        return (a, 0.0);
    }

    let ap_x = query.x() - a.x();
    let ap_y = query.y() - a.y();
    let t = ((ap_x * ab_x + ap_y * ab_y) / ab_len2).clamp(0.0, 1.0);

    (Point::new(a.x() + t * ab_x, a.y() + t * ab_y), t)
}

/// Total great-circle length of a polyline in meters.
pub fn path_length(line: &LineString<f64>) -> Meters {
    line.lines()
        .map(|segment| Haversine.distance(segment.start_point(), segment.end_point()))
        .sum()
}

/// Initial great-circle bearing from `a` to `b`, degrees in `[0, 360)`.
pub fn initial_bearing(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.bearing(a, b)
}

/// Signed shortest turn from heading `from` to heading `to`, in `(-180, 180]`.
///
/// Lets the display layer rotate a marker through the shorter arc.
pub fn shortest_rotation(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}
