//! Road network components - junction nodes and segment edges

use geo::{LineString, Point};

use crate::{OsmNodeId, OsmWayId};

/// Road graph vertex - a junction of the street network
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// OSM ID of the node
    pub id: OsmNodeId,
    /// Node coordinates as ingested (lon, lat)
    pub geometry: Point<f64>,
}

/// Road graph edge - one segment between two adjacent junctions
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// OSM ID of the way this segment was cut from
    pub way_id: OsmWayId,
    /// Interior (non-junction) node ids between the endpoints, in order
    pub path: Vec<OsmNodeId>,
    /// Full endpoint-to-endpoint polyline for visualization
    pub geometry: LineString<f64>,
}

impl RoadEdge {
    /// Number of interior geometry points carried by this segment.
    pub fn interior_len(&self) -> usize {
        self.path.len()
    }
}
