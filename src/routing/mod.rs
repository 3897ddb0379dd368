// Interactive path search over the compiled road graph

mod dfs;
mod engine;
mod path;

pub use engine::{SearchEngine, SearchError, SearchEvent, SearchPhase};
pub use path::FoundPath;
