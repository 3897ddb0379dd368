//! Data model for the compiled road network
//!
//! Contains the junction-level graph and its spatial wrapper.

pub mod road;
pub mod road_model;

pub use road::{IndexedPoint, RoadEdge, RoadGraph, RoadNode};
pub use road_model::RoadModel;
