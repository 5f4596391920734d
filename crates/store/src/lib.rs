pub mod engine;
pub mod graph;
pub mod path;

pub use engine::{shortest_path, ShortestPathRun};
pub use graph::{Edge, GraphStats, GraphStore};
pub use path::reconstruct;
