use geo::{LineString, Point};
use hashbrown::{HashMap, HashSet};
use log::{debug, info};
use rstar::RTree;

use super::raw_types::{RawElement, RawWay};
use crate::model::{IndexedPoint, RoadEdge, RoadGraph, RoadNode};
use crate::{OsmNodeId, OsmWayId};

/// Compiles a flat list of raw map elements into a junction-level road graph.
///
/// Two passes: the first counts how many times each node id is referenced
/// across all ways (repeats within one way included, so loop ways promote
/// their repeated node); the second records node positions, registers
/// junction vertices, and cuts each way into junction-to-junction edges
/// carrying the interior geometry in between.
///
/// A node becomes a junction when it is referenced more than once, or when
/// it terminates a way - otherwise dead-end streets would have no reachable
/// endpoint. Output depends only on the order of `elements`; ways that
/// reference a missing endpoint are skipped whole, missing interior
/// references merely shorten the geometry.
pub fn compile_road_graph(elements: &[RawElement]) -> RoadGraph {
    let mut link_counter: HashMap<OsmNodeId, u32> = HashMap::new();
    let mut terminals: HashSet<OsmNodeId> = HashSet::new();

    for element in elements {
        if let RawElement::Way(way) = element {
            for &node_id in &way.nodes {
                *link_counter.entry(node_id).or_insert(0) += 1;
            }
            if way.nodes.len() >= 2 {
                terminals.insert(way.nodes[0]);
                terminals.insert(way.nodes[way.nodes.len() - 1]);
            }
        }
    }

    let is_junction = |id: OsmNodeId| {
        terminals.contains(&id) || link_counter.get(&id).is_some_and(|&count| count > 1)
    };

    let mut graph = RoadGraph::default();

    for element in elements {
        if let RawElement::Node(node) = element {
            // first occurrence wins for duplicate node ids
            if graph.positions.contains_key(&node.id) {
                continue;
            }
            let geometry = Point::new(node.lon, node.lat);
            graph.positions.insert(node.id, geometry);
            if is_junction(node.id) {
                let idx = graph.graph.add_node(RoadNode {
                    id: node.id,
                    geometry,
                });
                graph.node_index.insert(node.id, idx);
            }
        }
    }

    let mut skipped_ways = 0usize;
    for element in elements {
        if let RawElement::Way(way) = element {
            if way.nodes.len() < 2 {
                debug!("way {} has fewer than two members; skipped", way.id);
                skipped_ways += 1;
                continue;
            }
            if !emit_way_edges(&mut graph, way, &is_junction) {
                debug!("way {} references a missing endpoint; skipped", way.id);
                skipped_ways += 1;
            }
        }
    }

    info!(
        "Compiled road graph: {} junctions, {} edges ({} ways skipped)",
        graph.junction_count(),
        graph.edge_count(),
        skipped_ways
    );

    graph
}

/// Cuts one way into edges, splitting at interior junctions. Returns false
/// when a terminal node id has no recorded position.
fn emit_way_edges(
    graph: &mut RoadGraph,
    way: &RawWay,
    is_junction: &impl Fn(OsmNodeId) -> bool,
) -> bool {
    let first = way.nodes[0];
    let last = way.nodes[way.nodes.len() - 1];
    if !graph.positions.contains_key(&first) || !graph.positions.contains_key(&last) {
        return false;
    }

    let mut start = first;
    let mut path: Vec<OsmNodeId> = Vec::new();

    for &node_id in &way.nodes[1..way.nodes.len() - 1] {
        if !graph.positions.contains_key(&node_id) {
            debug!("way {} references missing node {node_id}; dropped", way.id);
            continue;
        }
        if is_junction(node_id) {
            emit_edge(graph, way.id, start, node_id, std::mem::take(&mut path));
            start = node_id;
        } else {
            path.push(node_id);
        }
    }

    emit_edge(graph, way.id, start, last, path);
    true
}

fn emit_edge(
    graph: &mut RoadGraph,
    way_id: OsmWayId,
    a: OsmNodeId,
    b: OsmNodeId,
    path: Vec<OsmNodeId>,
) {
    let (Some(&ai), Some(&bi)) = (graph.node_index.get(&a), graph.node_index.get(&b)) else {
        // endpoints are always junction-classified by construction
        debug_assert!(false, "edge endpoint without a vertex");
        return;
    };

    let coords: Vec<_> = std::iter::once(a)
        .chain(path.iter().copied())
        .chain(std::iter::once(b))
        .filter_map(|id| graph.positions.get(&id).map(|p| p.0))
        .collect();

    graph.graph.add_edge(
        ai,
        bi,
        RoadEdge {
            way_id,
            path,
            geometry: LineString::new(coords),
        },
    );
}

/// Spatial index over junction positions, for coordinate snapping.
pub(crate) fn build_rtree(graph: &RoadGraph) -> RTree<IndexedPoint> {
    let points: Vec<IndexedPoint> = graph
        .graph
        .node_indices()
        .map(|idx| {
            let node = &graph.graph[idx];
            IndexedPoint {
                position: [node.geometry.x(), node.geometry.y()],
                node: idx,
            }
        })
        .collect();
    RTree::bulk_load(points)
}
