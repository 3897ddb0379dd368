use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No nearby junctions found for snapping")]
    NoPointsFound,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
