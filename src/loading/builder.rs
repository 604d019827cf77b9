use std::fs;

use log::{info, warn};

use super::config::ModelConfig;
use super::dataset::{paths_from_geojson, places_from_geojson};
use crate::{Error, model::CampusModel};

/// Creates a campus model from the configured GeoJSON datasets
///
/// # Errors
///
/// Returns an error if either dataset is missing, unreadable or malformed
pub fn create_campus_model(config: &ModelConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!("Loading campus paths: {}", config.paths_path.display());
    let paths_raw = fs::read_to_string(&config.paths_path)?;

    info!("Loading campus places: {}", config.places_path.display());
    let places_raw = fs::read_to_string(&config.places_path)?;

    campus_model_from_geojson(&paths_raw, &places_raw)
}

/// Same as [`create_campus_model`] for datasets already in memory.
pub fn campus_model_from_geojson(paths: &str, places: &str) -> Result<CampusModel, Error> {
    let polylines = paths_from_geojson(paths)?;
    let places = places_from_geojson(places)?;

    if polylines.is_empty() {
        warn!("path dataset contains no polylines; every routing call will fail");
    }

    let model = CampusModel::new(polylines, places);
    info!(
        "Campus model ready: {} nodes, {} edges, {} places",
        model.network.graph.node_count(),
        model.network.graph.edge_count(),
        model.places.len()
    );

    Ok(model)
}

fn validate_config(config: &ModelConfig) -> Result<(), Error> {
    if !config.paths_path.exists() {
        return Err(Error::InvalidData(format!(
            "path dataset not found: {}",
            config.paths_path.display()
        )));
    }

    if !config.places_path.exists() {
        return Err(Error::InvalidData(format!(
            "places dataset not found: {}",
            config.places_path.display()
        )));
    }

    Ok(())
}
