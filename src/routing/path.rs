use geo::{Coord, LineString};
use geojson::{FeatureCollection, Geometry, Value as GeoJsonValue};
use petgraph::graph::EdgeIndex;
use serde_json::json;

use super::dfs::DfsTraversal;
use crate::model::RoadGraph;
use crate::{Error, OsmNodeId};

/// Connecting path between two selected junctions.
///
/// A self-search yields a single junction and no edges.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    /// Junction ids along the path, source first
    pub junctions: Vec<OsmNodeId>,
    /// Edges of the path, in travel order
    pub edges: Vec<EdgeIndex>,
}

impl FoundPath {
    pub(crate) fn from_traversal(traversal: &DfsTraversal, graph: &RoadGraph) -> Self {
        let junctions = traversal
            .path_nodes()
            .into_iter()
            .map(|idx| graph.graph[idx].id)
            .collect();
        Self {
            junctions,
            edges: traversal.path_edges().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Converts the path to a `GeoJSON` `FeatureCollection` with one
    /// `LineString` feature per edge, coordinates oriented in travel
    /// direction.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge no longer exists in the graph
    pub fn to_geojson(&self, graph: &RoadGraph) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.edges.len());

        for (leg_idx, (&edge, window)) in
            self.edges.iter().zip(self.junctions.windows(2)).enumerate()
        {
            let weight = graph
                .edge(edge)
                .ok_or_else(|| Error::GeoJsonError(format!("edge {edge:?} not in graph")))?;
            let (from, to) = (window[0], window[1]);

            let mut coords: Vec<Coord<f64>> = weight.geometry.0.clone();
            let (stored_from, _) = graph
                .edge_endpoints(edge)
                .ok_or_else(|| Error::GeoJsonError(format!("edge {edge:?} not in graph")))?;
            if stored_from != from {
                coords.reverse();
            }
            let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "leg_index": leg_idx,
                    "way_id": weight.way_id,
                    "from": from,
                    "to": to,
                }
            });
            features
                .push(serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?);
        }

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &RoadGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph)?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
