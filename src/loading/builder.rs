use std::fs::File;
use std::io::BufReader;

use log::{info, warn};

use super::config::RoadModelConfig;
use super::osm::{OverpassResponse, RawElement, compile_road_graph};
use crate::{Error, RoadModel};

/// Highway classes the original interactive map queried for.
const ROUTABLE_HIGHWAYS: &[&str] = &[
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "road",
    "residential",
];

/// Creates a road model from the extract named in the configuration
///
/// # Errors
///
/// Returns an error if the extract is missing or is not a valid
/// Overpass JSON document
pub fn create_road_model(config: &RoadModelConfig) -> Result<RoadModel, Error> {
    validate_config(config)?;

    info!(
        "Processing street data (OSM): {}",
        config.extract_path.display()
    );

    let file = File::open(&config.extract_path)?;
    let response: OverpassResponse = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::InvalidData(format!("malformed Overpass extract: {e}")))?;

    let total = response.elements.len();
    let elements = if config.highway_filter {
        filter_routable(response.elements)
    } else {
        response.elements
    };
    if elements.len() < total {
        info!("Dropped {} non-routable elements", total - elements.len());
    }

    let graph = compile_road_graph(&elements);
    if graph.junction_count() == 0 {
        warn!("Extract produced an empty road graph");
    }

    Ok(RoadModel::new(graph))
}

fn validate_config(config: &RoadModelConfig) -> Result<(), Error> {
    if !config.extract_path.exists() {
        return Err(Error::InvalidData(format!(
            "OSM extract not found: {}",
            config.extract_path.display()
        )));
    }
    Ok(())
}

/// Keeps node elements and ways tagged as routable streets.
fn filter_routable(elements: Vec<RawElement>) -> Vec<RawElement> {
    elements
        .into_iter()
        .filter(|element| match element {
            RawElement::Way(way) => way.highway().is_some_and(is_routable),
            RawElement::Node(_) => true,
            RawElement::Unsupported => false,
        })
        .collect()
}

fn is_routable(highway: &str) -> bool {
    ROUTABLE_HIGHWAYS.contains(&highway) || highway.ends_with("_link")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_classes_are_routable() {
        assert!(is_routable("residential"));
        assert!(is_routable("motorway_link"));
        assert!(!is_routable("footway"));
        assert!(!is_routable("cycleway"));
    }
}
