use log::{debug, info};
use petgraph::graph::EdgeIndex;
use thiserror::Error;

use super::dfs::{DfsTraversal, StepOutcome};
use super::path::FoundPath;
use crate::model::RoadGraph;
use crate::{MAX_SELECTED_JUNCTIONS, OsmNodeId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Junction {0} is not present in the road graph")]
    UnknownJunction(OsmNodeId),
}

/// Where the engine currently is in its selection/search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    AwaitingSecondSelection,
    Searching,
    Found,
    Exhausted,
}

/// One observable increment of an in-progress search.
///
/// Every event carries the generation of the traversal that produced it, so
/// a consumer holding queued redraws can discard events of a superseded run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// An edge was marked active while advancing
    EdgeActivated { generation: u64, edge: EdgeIndex },
    /// An edge was unmarked while backtracking out of a dead end
    EdgeDeactivated { generation: u64, edge: EdgeIndex },
    /// The target junction was reached
    Found { generation: u64, path: FoundPath },
    /// Every junction reachable from the source was visited without
    /// encountering the target
    Exhausted { generation: u64 },
}

/// Interactive path search over a compiled road graph.
///
/// Callers feed junction selections in; the engine holds the last two in a
/// FIFO and runs a depth-first traversal between them, advanced one edge at
/// a time through [`SearchEngine::step`]. Selecting a further junction
/// evicts the oldest one and restarts the traversal under a fresh
/// generation; steps of the superseded run are no-ops. The graph itself is
/// never mutated.
#[derive(Default)]
pub struct SearchEngine {
    selected: Vec<OsmNodeId>,
    phase: SearchPhase,
    traversal: Option<DfsTraversal>,
    found: Option<FoundPath>,
    generation: u64,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Currently selected junction ids, oldest first.
    pub fn selection(&self) -> &[OsmNodeId] {
        &self.selected
    }

    /// Generation of the current traversal. Bumped on every restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Registers a junction selection.
    ///
    /// The two most recent selections form the search pair; selecting while
    /// a pair is already held evicts the oldest id and restarts the
    /// traversal. Selecting the same junction twice is legal and resolves
    /// immediately on the first step (a path from a junction to itself is
    /// empty).
    ///
    /// # Errors
    ///
    /// Returns an error for ids without a graph vertex; the engine state is
    /// left untouched.
    pub fn select_junction(
        &mut self,
        graph: &RoadGraph,
        id: OsmNodeId,
    ) -> Result<SearchPhase, SearchError> {
        if graph.junction_index(id).is_none() {
            return Err(SearchError::UnknownJunction(id));
        }

        self.selected.push(id);
        if self.selected.len() > MAX_SELECTED_JUNCTIONS {
            self.selected.remove(0);
        }

        if self.selected.len() == MAX_SELECTED_JUNCTIONS {
            self.start_traversal(graph);
        } else {
            self.phase = SearchPhase::AwaitingSecondSelection;
        }
        Ok(self.phase)
    }

    fn start_traversal(&mut self, graph: &RoadGraph) {
        let (source, target) = (self.selected[0], self.selected[1]);
        // ids were validated at selection time
        let (Some(source_idx), Some(target_idx)) =
            (graph.junction_index(source), graph.junction_index(target))
        else {
            debug_assert!(false, "selected junction disappeared from the graph");
            return;
        };

        self.generation += 1;
        debug!("Starting traversal {} from {source} to {target}", self.generation);
        self.traversal = Some(DfsTraversal::new(
            graph,
            source_idx,
            target_idx,
            self.generation,
        ));
        self.found = None;
        self.phase = SearchPhase::Searching;
    }

    /// Advances the current traversal by one edge transition.
    ///
    /// Returns `None` outside the `Searching` phase: once the target is
    /// found, the graph is exhausted, or the pair has been replaced, pending
    /// drives of the old run do nothing.
    pub fn step(&mut self, graph: &RoadGraph) -> Option<SearchEvent> {
        if self.phase != SearchPhase::Searching {
            return None;
        }
        let traversal = self.traversal.as_mut()?;
        debug_assert_eq!(traversal.generation(), self.generation);
        debug_assert!(!traversal.is_finished());

        let generation = self.generation;
        match traversal.step(graph) {
            StepOutcome::Advanced(edge) => Some(SearchEvent::EdgeActivated { generation, edge }),
            StepOutcome::Retreated(edge) => Some(SearchEvent::EdgeDeactivated { generation, edge }),
            StepOutcome::Found => {
                let path = FoundPath::from_traversal(traversal, graph);
                info!(
                    "Traversal {generation} found a path with {} edges",
                    path.edges.len()
                );
                self.found = Some(path.clone());
                self.phase = SearchPhase::Found;
                Some(SearchEvent::Found { generation, path })
            }
            StepOutcome::Exhausted => {
                info!("No path exists between {:?}", self.selected);
                self.phase = SearchPhase::Exhausted;
                Some(SearchEvent::Exhausted { generation })
            }
        }
    }

    /// Drives the traversal to its terminal phase and returns the path when
    /// one was found. The step-wise API remains the primary surface; this is
    /// a convenience for non-interactive callers.
    pub fn run(&mut self, graph: &RoadGraph) -> Option<&FoundPath> {
        while self.step(graph).is_some() {}
        self.found_path()
    }

    pub fn found_path(&self) -> Option<&FoundPath> {
        self.found.as_ref()
    }

    /// Whether an edge is marked active by the current traversal.
    pub fn is_active(&self, edge: EdgeIndex) -> bool {
        self.traversal
            .as_ref()
            .is_some_and(|traversal| traversal.is_active(edge))
    }

    /// Edges currently marked active, in index order.
    pub fn active_edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.traversal
            .iter()
            .flat_map(|traversal| traversal.active_edges())
    }

    /// Drops all selections and traversal state, returning to `Idle`.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.traversal = None;
        self.found = None;
        self.phase = SearchPhase::Idle;
    }
}
