use geo::{Distance, Haversine, LineString, Point};

use wayfinder_core::model::{CampusModel, Places};
use wayfinder_core::prelude::*;

const PATHS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": [[0.0, 0.0], [0.001, 0.0]]
            }
        },
        {
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": [[0.001, 0.0], [0.001, 0.001]]
            }
        }
    ]
}"#;

const PLACES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"name": "Cafeteria"},
            "geometry": {"type": "Point", "coordinates": [0.001, 0.001]}
        }
    ]
}"#;

/// Two polylines meeting at a corner; start lies on the first, end on the
/// second, so the route has to pass through the shared vertex.
#[test]
fn route_traverses_the_shared_corner() {
    let model = CampusModel::new(
        vec![
            LineString::from(vec![Point::new(0.0, 0.0), Point::new(0.0, 10.0)]),
            LineString::from(vec![Point::new(0.0, 10.0), Point::new(10.0, 10.0)]),
        ],
        Places::default(),
    );

    let start = Point::new(0.0, 1.0);
    let end = Point::new(9.0, 10.0);
    let route = route_between(&model, start, end).unwrap();

    assert_eq!(route.geometry.points().next().unwrap(), start);
    assert_eq!(route.geometry.points().last().unwrap(), end);

    let corner = Point::new(0.0, 10.0);
    assert!(route.geometry.points().any(|point| point == corner));

    let expected =
        Haversine.distance(start, corner) + Haversine.distance(corner, end);
    assert!((route.distance - expected).abs() < 1e-6);
    assert!((route.duration - route.distance / AVERAGE_WALKING_SPEED).abs() < 1e-9);
}

#[test]
fn route_endpoints_are_the_query_points_even_off_network() {
    let model = campus_model_from_geojson(PATHS, PLACES).unwrap();

    // Both points sit a little off the paths
    let start = Point::new(0.0002, 0.00004);
    let end = Point::new(0.00096, 0.0009);
    let route = route_between(&model, start, end).unwrap();

    assert_eq!(route.geometry.points().next().unwrap(), start);
    assert_eq!(route.geometry.points().last().unwrap(), end);
    assert_eq!(route.start, start);
    assert_eq!(route.end, end);

    let rerun = route_between(&model, start, end).unwrap();
    assert_eq!(route.distance, rerun.distance);
}

#[test]
fn navigation_session_follows_the_user() {
    let mut session = Wayfinder::new();
    session.load_from_geojson(PATHS, PLACES).unwrap();
    assert!(session.is_ready());

    // First fix arrives before any destination: raw position, no route
    let update = session.update_position(&PositionFix::new(0.00002, 0.0));
    assert_eq!(update.displayed, Point::new(0.0, 0.00002));
    assert!(update.route.is_none());

    // Destination resolved through the places dataset
    let hits = session.model().unwrap().places.search("cafe");
    assert_eq!(hits.len(), 1);

    let route = session.navigate_to_place("Cafeteria").unwrap();
    assert_eq!(route.end, Point::new(0.001, 0.001));
    assert!(session.tracker().follow_enabled());

    // ~5 m from the route: displayed position snaps onto it and the
    // route is recomputed from there
    let update = session.update_position(&PositionFix::new(0.00005, 0.0002));
    assert_eq!(update.displayed.y(), 0.0);
    assert!((update.displayed.x() - 0.0002).abs() < 1e-9);
    let refreshed = update.route.unwrap();
    assert_eq!(refreshed.geometry.points().next().unwrap(), update.displayed);
    assert_eq!(refreshed.end, Point::new(0.001, 0.001));

    // ~55 m from the route: clearly off the path, shown where they are
    let stray = PositionFix::new(0.0005, 0.0002);
    let update = session.update_position(&stray);
    assert_eq!(update.displayed, Point::new(0.0002, 0.0005));

    // Manual pan pauses follow mode, recenter restores it
    session.pause_follow();
    assert!(!session.tracker().follow_enabled());
    session.recenter();
    assert!(session.tracker().follow_enabled());

    session.clear_destination();
    let update = session.update_position(&PositionFix::new(0.0001, 0.0001));
    assert!(update.route.is_none());
}

#[test]
fn tracking_survives_a_position_source_failure() {
    let mut session = Wayfinder::new();
    session.load_from_geojson(PATHS, PLACES).unwrap();

    let update = session.position_source_failed();
    // The fallback campus center keeps the widget usable indoors
    assert_eq!(
        update.displayed,
        Point::new(
            wayfinder_core::DEFAULT_LOCATION_LNG,
            wayfinder_core::DEFAULT_LOCATION_LAT
        )
    );
}
