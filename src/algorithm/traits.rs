use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use log::warn;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone)]
pub struct ShortestPathResult<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each reachable vertex
    pub distances: HashMap<L, W>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: HashMap<L, L>,

    /// Source vertex label
    pub source: L,
}

impl<L, W> ShortestPathResult<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `target`, or `None` if it was not reached
    pub fn distance(&self, target: &L) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// True if `target` was reached from the source
    pub fn is_reachable(&self, target: &L) -> bool {
        self.distances.contains_key(target)
    }
}

/// An ordered start-to-finish path and its total weight.
///
/// An empty `vertices` means no path exists; `total_weight` is then `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<L, W> {
    pub vertices: Vec<L>,
    pub total_weight: Option<W>,
}

impl<L, W> ShortestPath<L, W> {
    /// The "no path" outcome
    pub fn unreachable() -> Self {
        ShortestPath {
            vertices: Vec::new(),
            total_weight: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn into_vertices(self) -> Vec<L> {
        self.vertices
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<L, W, G>(
        &self,
        graph: &G,
        source: &L,
    ) -> Result<ShortestPathResult<L, W>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>;

    /// Find the cheapest path between two vertices, stopping once `finish` is settled
    fn shortest_path<L, W, G>(
        &self,
        graph: &G,
        start: &L,
        finish: &L,
    ) -> Result<ShortestPath<L, W>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path<L, W>(&self, result: &ShortestPathResult<L, W>, target: &L) -> Option<Vec<L>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
    {
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }

            let pred = match result.predecessors.get(&current) {
                Some(pred) => pred.clone(),
                None => {
                    warn!("Vertex {:?} was reached but has no predecessor", current);
                    return None;
                }
            };
            path.push(current);
            current = pred;
        }

        path.push(result.source.clone());
        path.reverse();

        Some(path)
    }
}
