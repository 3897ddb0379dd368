use geo::Point;
use rstar::RTree;

use crate::loading::osm::build_rtree;
use crate::model::{IndexedPoint, RoadGraph};
use crate::{Error, OsmNodeId};

/// Compiled road network plus a spatial index over its junctions.
///
/// The index maps arbitrary coordinates to the nearest junction so callers
/// can resolve a user-picked location to a selectable graph vertex.
#[derive(Clone)]
pub struct RoadModel {
    pub graph: RoadGraph,
    rtree: RTree<IndexedPoint>,
}

impl RoadModel {
    pub fn new(graph: RoadGraph) -> Self {
        let rtree = build_rtree(&graph);
        Self { graph, rtree }
    }

    /// Junction closest to the given coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the graph has no junctions
    pub fn nearest_junction(&self, point: Point<f64>) -> Result<OsmNodeId, Error> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|indexed| self.graph.graph[indexed.node].id)
            .ok_or(Error::NoPointsFound)
    }

    pub fn rtree_ref(&self) -> &RTree<IndexedPoint> {
        &self.rtree
    }
}
