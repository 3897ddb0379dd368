use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::model::RoadGraph;

/// What a single traversal step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// Moved one edge deeper; the edge is now active
    Advanced(EdgeIndex),
    /// Backtracked out of a dead end; the edge is no longer active
    Retreated(EdgeIndex),
    /// Target reached; the active set equals the found path
    Found,
    /// Every junction reachable from the source was visited
    Exhausted,
}

struct Frame {
    node: NodeIndex,
    /// Edge this frame was entered through, `None` for the source
    entry_edge: Option<EdgeIndex>,
    neighbors: Vec<(NodeIndex, EdgeIndex)>,
    cursor: usize,
}

/// Iterative depth-first traversal between two junctions, advanced one edge
/// transition at a time so the caller can surface progress incrementally.
///
/// Neighbors are tried in the graph's documented adjacency order. Dead-end
/// branches are properly unwound: backtracking clears the branch's active
/// marks, so once the target is found the active set is exactly the path.
/// Each traversal is stamped with the generation it belongs to; a stale
/// traversal is simply dropped by its owner, never stepped again.
pub(crate) struct DfsTraversal {
    generation: u64,
    target: NodeIndex,
    stack: Vec<Frame>,
    visited: FixedBitSet,
    active: FixedBitSet,
    path: Vec<EdgeIndex>,
    finished: bool,
}

impl DfsTraversal {
    pub(crate) fn new(
        graph: &RoadGraph,
        source: NodeIndex,
        target: NodeIndex,
        generation: u64,
    ) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.graph.node_count());
        visited.insert(source.index());
        let root = Frame {
            node: source,
            entry_edge: None,
            neighbors: graph.adjacent(source).collect(),
            cursor: 0,
        };
        Self {
            generation,
            target,
            stack: vec![root],
            visited,
            active: FixedBitSet::with_capacity(graph.graph.edge_count()),
            path: Vec::new(),
            finished: false,
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn is_active(&self, edge: EdgeIndex) -> bool {
        self.active.contains(edge.index())
    }

    pub(crate) fn active_edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.active.ones().map(EdgeIndex::new)
    }

    /// Edges of the branch currently on the stack, source-first.
    pub(crate) fn path_edges(&self) -> &[EdgeIndex] {
        &self.path
    }

    /// Junctions of the branch currently on the stack, source-first,
    /// including the target once found.
    pub(crate) fn path_nodes(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.stack.iter().map(|frame| frame.node).collect();
        if self.finished && !self.path.is_empty() {
            nodes.push(self.target);
        }
        nodes
    }

    /// Performs one edge transition. Skipping already-visited siblings does
    /// not consume a step.
    pub(crate) fn step(&mut self, graph: &RoadGraph) -> StepOutcome {
        if let Some(frame) = self.stack.first()
            && frame.node == self.target
        {
            self.finished = true;
            return StepOutcome::Found;
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finished = true;
                return StepOutcome::Exhausted;
            };

            while frame.cursor < frame.neighbors.len() {
                let (neighbor, edge) = frame.neighbors[frame.cursor];
                frame.cursor += 1;

                if neighbor == self.target {
                    self.active.insert(edge.index());
                    self.path.push(edge);
                    self.finished = true;
                    return StepOutcome::Found;
                }
                if self.visited.contains(neighbor.index()) {
                    continue;
                }

                self.visited.insert(neighbor.index());
                self.active.insert(edge.index());
                self.path.push(edge);
                self.stack.push(Frame {
                    node: neighbor,
                    entry_edge: Some(edge),
                    neighbors: graph.adjacent(neighbor).collect(),
                    cursor: 0,
                });
                return StepOutcome::Advanced(edge);
            }

            let entry = self.stack.pop().and_then(|frame| frame.entry_edge);
            if let Some(edge) = entry {
                self.active.set(edge.index(), false);
                self.path.pop();
                return StepOutcome::Retreated(edge);
            }
            // source frame exhausted; the next iteration reports exhaustion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::osm::{RawElement, RawNode, RawWay, compile_road_graph};

    fn node(id: i64) -> RawElement {
        RawElement::Node(RawNode {
            id,
            lat: 0.0,
            lon: id as f64,
            tags: Default::default(),
        })
    }

    fn way(id: i64, nodes: &[i64]) -> RawElement {
        RawElement::Way(RawWay {
            id,
            nodes: nodes.to_vec(),
            tags: Default::default(),
        })
    }

    fn drive(traversal: &mut DfsTraversal, graph: &RoadGraph) -> StepOutcome {
        loop {
            match traversal.step(graph) {
                StepOutcome::Found => return StepOutcome::Found,
                StepOutcome::Exhausted => return StepOutcome::Exhausted,
                _ => {}
            }
        }
    }

    #[test]
    fn self_search_is_found_with_empty_path() {
        let graph = compile_road_graph(&[node(1), node(2), way(100, &[1, 2])]);
        let idx = graph.junction_index(1).unwrap();
        let mut traversal = DfsTraversal::new(&graph, idx, idx, 1);

        assert_eq!(traversal.step(&graph), StepOutcome::Found);
        assert!(traversal.path_edges().is_empty());
        assert_eq!(traversal.path_nodes(), vec![idx]);
    }

    #[test]
    fn backtracking_clears_dead_end_marks() {
        // 1 -- 2 -- 3, with a dead-end spur 2 -- 9
        let elements = [
            node(1),
            node(2),
            node(3),
            node(9),
            way(100, &[1, 2]),
            way(101, &[2, 3]),
            way(102, &[2, 9]),
        ];
        let graph = compile_road_graph(&elements);
        let source = graph.junction_index(1).unwrap();
        let target = graph.junction_index(3).unwrap();
        let mut traversal = DfsTraversal::new(&graph, source, target, 1);

        assert_eq!(drive(&mut traversal, &graph), StepOutcome::Found);

        let expected = [
            graph.edge_between(1, 2).unwrap(),
            graph.edge_between(2, 3).unwrap(),
        ];
        assert_eq!(traversal.path_edges(), expected);
        let mut active: Vec<_> = traversal.active_edges().collect();
        active.sort();
        let mut sorted = expected.to_vec();
        sorted.sort();
        assert_eq!(active, sorted);
        assert!(!traversal.is_active(graph.edge_between(2, 9).unwrap()));
    }

    #[test]
    fn disconnected_target_exhausts() {
        let elements = [
            node(1),
            node(2),
            node(10),
            node(11),
            way(100, &[1, 2]),
            way(101, &[10, 11]),
        ];
        let graph = compile_road_graph(&elements);
        let source = graph.junction_index(1).unwrap();
        let target = graph.junction_index(10).unwrap();
        let mut traversal = DfsTraversal::new(&graph, source, target, 1);

        assert_eq!(drive(&mut traversal, &graph), StepOutcome::Exhausted);
        assert_eq!(traversal.active_edges().count(), 0);
        assert!(traversal.is_finished());
    }
}
