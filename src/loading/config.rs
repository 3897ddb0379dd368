use std::path::PathBuf;

/// Configuration for building a road model from a local Overpass extract.
#[derive(Debug, Clone)]
pub struct RoadModelConfig {
    /// Path to an Overpass API JSON export (`[out:json]`)
    pub extract_path: PathBuf,
    /// Drop ways that are not routable streets before compiling. Extracts
    /// produced with a highway-filtered query are unaffected.
    pub highway_filter: bool,
}

impl RoadModelConfig {
    pub fn new(extract_path: impl Into<PathBuf>) -> Self {
        Self {
            extract_path: extract_path.into(),
            highway_filter: true,
        }
    }
}
