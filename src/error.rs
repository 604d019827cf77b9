use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Campus dataset is not loaded")]
    DatasetNotLoaded,
    #[error("No path segments near the requested point")]
    NoNearbyPath,
    #[error("No walking path connects the requested points")]
    NoPathFound,
    #[error("Unknown place: {0}")]
    UnknownPlace(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(#[from] geojson::Error),
}
