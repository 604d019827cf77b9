//! Snapping arbitrary points onto the path network.

use geo::{Distance, Haversine, LineString, Point};

use crate::Meters;
use crate::geometry::project_onto_segment;
use crate::model::CampusModel;

/// Result of projecting a query point onto the path network.
///
/// `point` lies exactly on the segment between `start` and `end`; the
/// endpoints are carried along so the snap can be spliced into the routing
/// graph as a first-class node.
#[derive(Debug, Clone)]
pub struct SnapResult {
    /// On-segment point closest to the query
    pub point: Point<f64>,
    /// Bracketing segment endpoints
    pub start: Point<f64>,
    pub end: Point<f64>,
    /// Index of the source segment within the network
    pub segment: usize,
    /// Great-circle distance from the query to the snapped point
    pub distance: Meters,
}

/// Snaps `query` onto the nearest point of the whole path network.
///
/// Returns `None` only when the network has no segments.
pub fn snap_to_network(model: &CampusModel, query: Point<f64>) -> Option<SnapResult> {
    let (segment_idx, segment) = model.network.nearest_segment(query)?;
    let (point, _) = project_onto_segment(query, segment.start, segment.end);

    Some(SnapResult {
        point,
        start: segment.start,
        end: segment.end,
        segment: segment_idx,
        distance: Haversine.distance(query, point),
    })
}

/// Snaps `query` onto a single polyline with a linear scan over its
/// segments, returning the projected point and its distance to the query.
///
/// The live tracker uses this against the active route geometry, where the
/// nearest point of the whole network would be the wrong answer.
pub fn snap_to_polyline(query: Point<f64>, line: &LineString<f64>) -> Option<(Point<f64>, Meters)> {
    line.lines()
        .map(|segment| {
            let (point, _) =
                project_onto_segment(query, segment.start_point(), segment.end_point());
            (point, Haversine.distance(query, point))
        })
        .min_by(|(_, first), (_, second)| first.total_cmp(second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Places;

    fn corner_model() -> CampusModel {
        CampusModel::new(
            vec![
                LineString::from(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.001)]),
                LineString::from(vec![Point::new(0.0, 0.001), Point::new(0.001, 0.001)]),
            ],
            Places::default(),
        )
    }

    #[test]
    fn snaps_onto_the_segment_interior() {
        let model = corner_model();
        let snap = snap_to_network(&model, Point::new(0.0001, 0.0005)).unwrap();

        assert_eq!(snap.point.x(), 0.0);
        assert!((snap.point.y() - 0.0005).abs() < 1e-9);
        assert_eq!(snap.start, Point::new(0.0, 0.0));
        assert_eq!(snap.end, Point::new(0.0, 0.001));
        assert!(snap.distance > 0.0);
    }

    #[test]
    fn picks_the_nearer_of_the_two_polylines() {
        let model = corner_model();
        let snap = snap_to_network(&model, Point::new(0.0008, 0.0009)).unwrap();
        // Closest to the second (horizontal) polyline
        assert!((snap.point.y() - 0.001).abs() < 1e-9);
        assert!((snap.point.x() - 0.0008).abs() < 1e-9);
    }

    #[test]
    fn empty_network_yields_none() {
        let model = CampusModel::new(Vec::new(), Places::default());
        assert!(snap_to_network(&model, Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn zero_length_segment_snaps_to_its_point() {
        let line = LineString::from(vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
        let (point, _) = snap_to_polyline(Point::new(0.0001, 0.0001), &line).unwrap();
        assert_eq!(point, Point::new(0.0, 0.0));
    }

    #[test]
    fn polyline_snap_scans_every_segment() {
        let line = LineString::from(vec![
            Point::new(0.0, 0.0),
            Point::new(0.001, 0.0),
            Point::new(0.001, 0.001),
        ]);

        let (point, distance) = snap_to_polyline(Point::new(0.0012, 0.0005), &line).unwrap();
        assert_eq!(point.x(), 0.001);
        assert!((point.y() - 0.0005).abs() < 1e-9);
        assert!(distance > 0.0);
    }
}
