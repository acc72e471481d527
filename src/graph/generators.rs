use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;
use rand::prelude::*;

/// Generates a connected random graph over vertices `0..n`.
///
/// A random spanning tree keeps every vertex reachable from every other one,
/// then `extra_edges` more edges are added between distinct random endpoints.
/// Weights are drawn uniformly from `[1, 100)`. The same seed always yields
/// the same graph.
pub fn generate_random_connected(
    n: usize,
    extra_edges: usize,
    seed: u64,
) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    // Attach every vertex to one that came before it
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(&v, &parent, weight)?;
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = rng.gen_range(1.0..100.0);
                graph.add_edge(&u, &v, weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid with 8-directional moves.
///
/// Vertex `y * width + x` sits at column `x`, row `y`. Straight moves cost
/// 1.0 and diagonal moves 1.4.
pub fn generate_grid(width: usize, height: usize) -> Result<WeightedGraph<usize, f64>> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            // Only look forward so each undirected edge is added once
            if x + 1 < width {
                graph.add_edge(&vertex, &(vertex + 1), 1.0)?;
            }
            if y + 1 < height {
                graph.add_edge(&vertex, &(vertex + width), 1.0)?;
                if x + 1 < width {
                    graph.add_edge(&vertex, &(vertex + width + 1), 1.4)?;
                }
                if x > 0 {
                    graph.add_edge(&vertex, &(vertex + width - 1), 1.4)?;
                }
            }
        }
    }

    Ok(graph)
}
