//! Weighted Paths - Dijkstra's shortest path over an undirected weighted graph
//!
//! The library provides an adjacency-list graph with labeled vertices and
//! non-negative edge weights, a binary min-heap priority queue, and Dijkstra's
//! single-source shortest path algorithm driven by that queue.
//!
//! ```
//! use weighted_paths::{MutableGraph, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(&"A", &"B", 4.0).unwrap();
//! graph.add_edge(&"A", &"C", 2.0).unwrap();
//! graph.add_edge(&"C", &"B", 1.0).unwrap();
//! graph.add_edge(&"B", &"D", 5.0).unwrap();
//! graph.add_edge(&"C", &"D", 8.0).unwrap();
//!
//! let path = graph.shortest_path(&"A", &"D").unwrap();
//! assert_eq!(path.vertices, vec!["A", "C", "B", "D"]);
//! assert_eq!(path.total_weight, Some(8.0));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraStats},
    ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{MinPriorityQueue, PriorityEntry};
/// Re-export main types for convenient use
pub use graph::{Graph, MutableGraph, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Iteration limit of {0} exceeded")]
    IterationLimit(usize),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
