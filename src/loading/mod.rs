//! This module is responsible for loading the static campus datasets
//! (GeoJSON paths and places) and building the routing model.

mod builder;
mod config;
mod dataset;

pub use builder::{campus_model_from_geojson, create_campus_model};
pub use config::ModelConfig;
pub use dataset::{paths_from_geojson, places_from_geojson};
