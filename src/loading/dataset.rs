//! GeoJSON parsing for the two static datasets.
//!
//! Malformed geometry fails the whole load rather than producing a
//! partially built network.

use geo::{Coord, LineString};
use geojson::{FeatureCollection, GeoJson, Position, Value};

use crate::Error;
use crate::model::{Place, Places};

fn parse_collection(raw: &str) -> Result<FeatureCollection, Error> {
    let geojson: GeoJson = raw.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// Extracts the walkable polylines, flattening MultiLineString features
/// into their constituent LineStrings.
pub fn paths_from_geojson(raw: &str) -> Result<Vec<LineString<f64>>, Error> {
    let collection = parse_collection(raw)?;
    let mut polylines = Vec::new();

    for feature in &collection.features {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| Error::InvalidData("path feature without geometry".to_string()))?;

        match &geometry.value {
            Value::LineString { coordinates } => {
                polylines.push(line_from_positions(coordinates)?)
            }
            Value::MultiLineString { coordinates } => {
                for coords in coordinates {
                    polylines.push(line_from_positions(coords)?);
                }
            }
            other => {
                return Err(Error::InvalidData(format!(
                    "unsupported path geometry: {}",
                    geometry_kind(other)
                )));
            }
        }
    }

    Ok(polylines)
}

/// Extracts the named places from Point features.
pub fn places_from_geojson(raw: &str) -> Result<Places, Error> {
    let collection = parse_collection(raw)?;
    let mut places = Vec::new();

    for feature in &collection.features {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| Error::InvalidData("place feature without geometry".to_string()))?;

        let Value::Point { coordinates } = &geometry.value else {
            return Err(Error::InvalidData(format!(
                "unsupported place geometry: {}",
                geometry_kind(&geometry.value)
            )));
        };

        let name = feature
            .property("name")
            .and_then(|value| value.as_str())
            .ok_or_else(|| Error::InvalidData("place feature without a name".to_string()))?;

        places.push(Place {
            name: name.to_string(),
            geometry: coord_from_position(coordinates.as_slice())?.into(),
        });
    }

    Ok(Places::new(places))
}

fn line_from_positions(positions: &[Position]) -> Result<LineString<f64>, Error> {
    if positions.len() < 2 {
        return Err(Error::InvalidData(
            "path with fewer than two coordinates".to_string(),
        ));
    }
    let coords = positions
        .iter()
        .map(|position| coord_from_position(position.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}

fn coord_from_position(position: &[f64]) -> Result<Coord<f64>, Error> {
    // GeoJSON positions are [longitude, latitude, ...]
    match position {
        [lng, lat, ..] => Ok(Coord { x: *lng, y: *lat }),
        _ => Err(Error::InvalidData(
            "position with fewer than two ordinates".to_string(),
        )),
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point { .. } => "Point",
        Value::MultiPoint { .. } => "MultiPoint",
        Value::LineString { .. } => "LineString",
        Value::MultiLineString { .. } => "MultiLineString",
        Value::Polygon { .. } => "Polygon",
        Value::MultiPolygon { .. } => "MultiPolygon",
        Value::GeometryCollection { .. } => "GeometryCollection",
    }
}
