//! Wayfinder compiles raw OpenStreetMap extracts into a compact
//! junction-level road graph and answers interactive "pick two points,
//! find a connecting path" queries over it.
//!
//! The pipeline has two stages. [`loading`] turns a flat element list
//! (Overpass JSON) into a [`model::RoadGraph`]: node ids referenced by more
//! than one way - or terminating a way - become junction vertices, and every
//! junction-to-junction run of a way becomes one undirected edge carrying
//! its interior geometry. [`routing`] then runs a step-wise depth-first
//! search between two selected junctions, surfacing each edge activation to
//! the caller so progress can be rendered incrementally.
//!
//! Rendering, projection, and input handling are collaborator concerns;
//! this crate only passes raw coordinates through.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{RoadGraph, RoadModel};
pub use routing::SearchEngine;

/// OSM node identifier
pub type OsmNodeId = i64;
/// OSM way identifier
pub type OsmWayId = i64;

/// Junction selections held by the search engine; older ones are evicted.
pub const MAX_SELECTED_JUNCTIONS: usize = 2;
