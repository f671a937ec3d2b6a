pub mod traits;
pub mod dijkstra;
pub mod engine;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree, TreeEntry};
