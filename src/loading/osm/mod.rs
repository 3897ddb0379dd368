//! Overpass JSON extract processing

mod processor;
mod raw_types;

pub(crate) use processor::build_rtree;
pub use processor::compile_road_graph;
pub use raw_types::{OverpassResponse, RawElement, RawNode, RawWay};
