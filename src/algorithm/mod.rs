pub mod traits;
pub mod dijkstra;

pub use traits::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
