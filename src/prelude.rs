pub use crate::MAX_SELECTED_JUNCTIONS;

// Re-export key components
pub use crate::loading::osm::{OverpassResponse, RawElement, RawNode, RawWay, compile_road_graph};
pub use crate::loading::{RoadModelConfig, create_road_model};
pub use crate::model::{IndexedPoint, RoadEdge, RoadGraph, RoadModel, RoadNode};
pub use crate::routing::{FoundPath, SearchEngine, SearchError, SearchEvent, SearchPhase};

// Core identifier types
pub use crate::Error;
pub use crate::{OsmNodeId, OsmWayId};

// Graph index types used in the public API
pub use petgraph::graph::{EdgeIndex, NodeIndex};
