use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::Result;

/// Trait representing an undirected weighted graph over labeled vertices
pub trait Graph<L, W>: Debug
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, counting parallel edges separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex label
    fn vertices(&self) -> Box<dyn Iterator<Item = &L> + '_>;

    /// Returns an iterator over the neighbors of a vertex in insertion order.
    /// Unknown vertices yield nothing.
    fn neighbors(&self, vertex: &L) -> Box<dyn Iterator<Item = (&L, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &L) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &L, b: &L) -> bool;

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, a: &L, b: &L) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<L, W>: Graph<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: L) -> bool;

    /// Adds an undirected edge between two existing vertices
    fn add_edge(&mut self, a: &L, b: &L, weight: W) -> Result<()>;

    /// Removes every edge between two vertices
    fn remove_edge(&mut self, a: &L, b: &L) -> bool;

    /// Removes a vertex and its connected edges from the graph
    fn remove_vertex(&mut self, vertex: &L) -> bool;
}
