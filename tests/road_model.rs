mod common;

use std::fs;

use common::crossroads;
use geo::Point;
use wayfinder::loading::osm::compile_road_graph;
use wayfinder::loading::{RoadModelConfig, create_road_model};
use wayfinder::{Error, RoadModel};

#[test]
fn snaps_coordinates_to_the_nearest_junction() {
    let model = RoadModel::new(compile_road_graph(&crossroads()));

    // positions are (lon, lat); node 9 sits at lon 1.0, lat 1.0
    let id = model.nearest_junction(Point::new(1.1, 0.9)).unwrap();
    assert_eq!(id, 9);

    let id = model.nearest_junction(Point::new(0.05, 0.0)).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn snapping_an_empty_model_fails() {
    let model = RoadModel::new(compile_road_graph(&[]));

    assert!(matches!(
        model.nearest_junction(Point::new(0.0, 0.0)),
        Err(Error::NoPointsFound)
    ));
}

#[test]
fn loads_an_overpass_extract_from_disk() {
    let extract = r#"{
        "version": 0.6,
        "generator": "Overpass API",
        "elements": [
            {"type": "node", "id": 1, "lat": 48.0, "lon": 2.0},
            {"type": "node", "id": 2, "lat": 48.1, "lon": 2.1, "tags": {"crossing": "marked"}},
            {"type": "node", "id": 3, "lat": 48.2, "lon": 2.2},
            {"type": "way", "id": 100, "nodes": [1, 2], "tags": {"highway": "residential"}},
            {"type": "way", "id": 101, "nodes": [2, 3], "tags": {"highway": "footway"}},
            {"type": "relation", "id": 200, "members": []}
        ]
    }"#;
    let path = std::env::temp_dir().join("wayfinder_extract_test.json");
    fs::write(&path, extract).unwrap();

    let model = create_road_model(&RoadModelConfig::new(&path)).unwrap();
    // the footway is filtered out, leaving a single residential segment
    assert_eq!(model.graph.edge_count(), 1);
    assert!(model.graph.edge_between(1, 2).is_some());
    assert!(model.graph.edge_between(2, 3).is_none());

    let mut config = RoadModelConfig::new(&path);
    config.highway_filter = false;
    let model = create_road_model(&config).unwrap();
    assert_eq!(model.graph.edge_count(), 2);

    fs::remove_file(&path).ok();
}

#[test]
fn missing_extract_is_an_error() {
    let config = RoadModelConfig::new("/nonexistent/extract.json");
    assert!(matches!(
        create_road_model(&config),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn malformed_extract_is_an_error() {
    let path = std::env::temp_dir().join("wayfinder_malformed_test.json");
    fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        create_road_model(&RoadModelConfig::new(&path)),
        Err(Error::InvalidData(_))
    ));
    fs::remove_file(&path).ok();
}
