use std::collections::HashMap;

use serde::Deserialize;

use crate::{OsmNodeId, OsmWayId};

/// Top-level shape of an Overpass API JSON extract.
#[derive(Debug, Deserialize, Default)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// One element of an Overpass extract.
///
/// Only nodes and ways feed the graph compiler; anything else an extract may
/// contain (relations, counts) is ignored rather than rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node(RawNode),
    Way(RawWay),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub id: OsmNodeId,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// An ordered run of node references. Referential integrity is not
/// guaranteed: a way may name ids absent from the extract's node set.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWay {
    pub id: OsmWayId,
    #[serde(default)]
    pub nodes: Vec<OsmNodeId>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl RawWay {
    pub fn highway(&self) -> Option<&str> {
        self.tags.get("highway").map(String::as_str)
    }
}
