//! Junction-level adjacency store for the compiled road network

use geo::Point;
use hashbrown::HashMap;
use petgraph::Undirected;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use rstar::{AABB, PointDistance, RTreeObject};

use super::components::{RoadEdge, RoadNode};
use crate::OsmNodeId;

/// Junction position tagged with its graph index, for R-tree storage.
#[derive(Debug, Clone, Copy)]
pub struct IndexedPoint {
    pub position: [f64; 2],
    pub node: NodeIndex,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Compiled road network.
///
/// Vertices are junctions, edges are junction-to-junction street segments
/// with their interior geometry. Structurally read-only after compilation;
/// traversal state (visited, active) is owned by the search engine, not
/// stored here.
///
/// Neighbor iteration follows petgraph's incident-edge list: the most
/// recently inserted edge comes first. The order is deterministic for a
/// given compile and is the tie-break used by the path search.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    /// Underlying undirected multigraph. Treat as read-only.
    pub graph: Graph<RoadNode, RoadEdge, Undirected>,
    /// OSM id of each junction to its graph index
    pub(crate) node_index: HashMap<OsmNodeId, NodeIndex>,
    /// Positions of every recorded node, junctions and pass-through
    /// geometry points alike
    pub(crate) positions: HashMap<OsmNodeId, Point<f64>>,
}

impl RoadGraph {
    /// Graph index of a junction id, `None` for unknown or geometry-only ids.
    pub fn junction_index(&self, id: OsmNodeId) -> Option<NodeIndex> {
        self.node_index.get(&id).copied()
    }

    /// Junction payload for an id, `None` for non-junctions.
    pub fn junction(&self, id: OsmNodeId) -> Option<&RoadNode> {
        self.junction_index(id).map(|idx| &self.graph[idx])
    }

    /// Position of any recorded node id, junction or not.
    pub fn position(&self, id: OsmNodeId) -> Option<Point<f64>> {
        self.positions.get(&id).copied()
    }

    /// Iterate the neighbors of a junction id together with the connecting
    /// edge. Unknown and non-junction ids yield an empty iterator.
    pub fn neighbors(
        &self,
        id: OsmNodeId,
    ) -> impl Iterator<Item = (OsmNodeId, EdgeIndex)> + '_ {
        self.junction_index(id)
            .into_iter()
            .flat_map(|idx| self.adjacent(idx))
            .map(|(nbr, edge)| (self.graph[nbr].id, edge))
    }

    /// Incident edges of a vertex as `(other endpoint, edge)` pairs.
    pub(crate) fn adjacent(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, EdgeIndex)> + '_ {
        self.graph.edges(node).map(move |edge| {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (other, edge.id())
        })
    }

    /// Edge connecting two junction ids, if any. Symmetric in its arguments.
    pub fn edge_between(&self, a: OsmNodeId, b: OsmNodeId) -> Option<EdgeIndex> {
        let (a, b) = (self.junction_index(a)?, self.junction_index(b)?);
        self.graph.find_edge(a, b)
    }

    pub fn edge(&self, edge: EdgeIndex) -> Option<&RoadEdge> {
        self.graph.edge_weight(edge)
    }

    /// OSM ids of an edge's endpoints.
    pub fn edge_endpoints(&self, edge: EdgeIndex) -> Option<(OsmNodeId, OsmNodeId)> {
        self.graph
            .edge_endpoints(edge)
            .map(|(a, b)| (self.graph[a].id, self.graph[b].id))
    }

    pub fn junction_ids(&self) -> impl Iterator<Item = OsmNodeId> + '_ {
        self.graph.node_weights().map(|node| node.id)
    }

    pub fn junction_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
