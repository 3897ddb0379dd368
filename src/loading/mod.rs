//! This module is responsible for loading raw map extracts and compiling
//! them into a queryable road network model.

mod builder;
mod config;
pub mod osm;

pub use builder::create_road_model;
pub use config::RoadModelConfig;
