use crate::algorithm::dijkstra::{require_vertex, Dijkstra};
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<L, W> {
    pub vertex: L,
    pub weight: W,
}

/// An undirected weighted graph using adjacency lists.
///
/// Every edge is stored once per endpoint, so `(b, w)` appears in the list of
/// `a` exactly when `(a, w)` appears in the list of `b`. Weights are never
/// negative or NaN.
#[derive(Debug, Clone)]
pub struct WeightedGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Neighbors of each vertex: vertex -> [(neighbor, weight)]
    adjacency: HashMap<L, Vec<Neighbor<L, W>>>,
}

impl<L, W> WeightedGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Number of adjacency entries of a vertex, or `None` if it is unknown.
    /// A self-loop counts twice.
    pub fn degree(&self, vertex: &L) -> Option<usize> {
        self.adjacency.get(vertex).map(|edges| edges.len())
    }

    /// Total weight of walking `path` edge by edge, taking the cheapest
    /// parallel edge at each step.
    ///
    /// Returns `None` for an empty path or when two consecutive vertices are
    /// not adjacent. A single known vertex weighs zero.
    pub fn path_weight(&self, path: &[L]) -> Option<W> {
        match path {
            [] => None,
            [only] => self.has_vertex(only).then(W::zero),
            _ => path.windows(2).try_fold(W::zero(), |total, pair| {
                self.get_edge_weight(&pair[0], &pair[1])
                    .map(|weight| total + weight)
            }),
        }
    }

    /// Finds the cheapest path from `start` to `finish` with Dijkstra's algorithm.
    ///
    /// An unreachable `finish` gives an empty path; a label missing from the
    /// graph is an error.
    pub fn shortest_path(&self, start: &L, finish: &L) -> Result<ShortestPath<L, W>> {
        Dijkstra::new().shortest_path(self, start, finish)
    }
}

impl<L, W> Default for WeightedGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> Graph<L, W> for WeightedGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &L) -> Box<dyn Iterator<Item = (&L, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|edge| (&edge.vertex, edge.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &L) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, a: &L, b: &L) -> bool {
        if let Some(edges) = self.adjacency.get(a) {
            edges.iter().any(|edge| edge.vertex == *b)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, a: &L, b: &L) -> Option<W> {
        self.adjacency.get(a).and_then(|edges| {
            edges
                .iter()
                .filter(|edge| edge.vertex == *b)
                .map(|edge| edge.weight)
                .fold(None, |best: Option<W>, weight| match best {
                    Some(current) if current <= weight => Some(current),
                    _ => Some(weight),
                })
        })
    }
}

impl<L, W> MutableGraph<L, W> for WeightedGraph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: L) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, a: &L, b: &L, weight: W) -> Result<()> {
        if weight.is_nan() || weight < W::zero() {
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        require_vertex(&*self, a)?;
        require_vertex(&*self, b)?;

        // Both endpoints are known, so neither lookup below can miss
        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.push(Neighbor {
                vertex: b.clone(),
                weight,
            });
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.push(Neighbor {
                vertex: a.clone(),
                weight,
            });
        }

        Ok(())
    }

    fn remove_edge(&mut self, a: &L, b: &L) -> bool {
        let mut removed = false;

        if let Some(edges) = self.adjacency.get_mut(a) {
            let len_before = edges.len();
            edges.retain(|edge| edge.vertex != *b);
            removed = len_before > edges.len();
        }

        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.retain(|edge| edge.vertex != *a);
        }

        removed
    }

    fn remove_vertex(&mut self, vertex: &L) -> bool {
        let Some(edges) = self.adjacency.remove(vertex) else {
            return false;
        };

        for edge in edges {
            if let Some(back) = self.adjacency.get_mut(&edge.vertex) {
                back.retain(|other| other.vertex != *vertex);
            }
        }

        true
    }
}
