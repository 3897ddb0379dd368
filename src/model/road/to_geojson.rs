use geojson::{FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::network::RoadGraph;
use crate::Error;

impl RoadGraph {
    /// Converts the compiled network to a `GeoJSON` `FeatureCollection`:
    /// one `Point` feature per junction and one `LineString` feature per
    /// edge, with raw coordinates passed through untransformed.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let mut features = Vec::with_capacity(self.junction_count() + self.edge_count());

        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            let geometry = Geometry::new(GeoJsonValue::from(&node.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "id": node.id,
                    "degree": self.graph.edges(idx).count(),
                }
            });
            features
                .push(serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))?);
        }

        for edge in self.graph.edge_indices() {
            let weight = &self.graph[edge];
            let (from, to) = self
                .edge_endpoints(edge)
                .ok_or_else(|| Error::GeoJsonError("edge without endpoints".to_string()))?;
            let geometry = Geometry::new(GeoJsonValue::from(&weight.geometry));
            let value = json!({
                "type": "Feature",
                "geometry": geometry,
                "properties": {
                    "way_id": weight.way_id,
                    "from": from,
                    "to": to,
                    "interior_nodes": weight.path.len(),
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

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
