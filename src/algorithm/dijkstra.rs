use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{MinPriorityQueue, PriorityEntry};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// The frontier is a [`MinPriorityQueue`] without decrease-key: a vertex is
/// queued again every time a shorter distance to it is found, and the
/// outdated entries are skipped when they surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Upper bound on queue extractions per call (None = unbounded)
    max_iterations: Option<usize>,
}

/// Counters collected during one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraStats {
    /// Entries taken off the queue
    pub dequeued: usize,
    /// Dequeued entries whose priority was older than the best known distance
    pub stale_skipped: usize,
    /// Successful edge relaxations, each of which queued a fresh entry
    pub relaxations: usize,
}

/// Working state of one run. Never shared between calls.
struct Search<L, W> {
    distances: HashMap<L, W>,
    previous: HashMap<L, L>,
    reached_target: bool,
    stats: DijkstraStats,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            max_iterations: None,
        }
    }

    /// Fail with [`Error::IterationLimit`] once more than `limit` entries have been dequeued
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// The configured extraction cap, if any
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Same as [`ShortestPathAlgorithm::shortest_path`], also returning run counters
    pub fn shortest_path_with_stats<L, W, G>(
        &self,
        graph: &G,
        start: &L,
        finish: &L,
    ) -> Result<(ShortestPath<L, W>, DijkstraStats)>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>,
    {
        require_vertex(graph, start)?;
        require_vertex(graph, finish)?;

        let search = self.search(graph, start, Some(finish))?;
        if !search.reached_target {
            debug!("{:?} is unreachable from {:?}", finish, start);
            return Ok((ShortestPath::unreachable(), search.stats));
        }

        let vertices = reconstruct_path(&search.previous, start, finish)?;
        let total_weight = search.distances.get(finish).copied();

        Ok((
            ShortestPath {
                vertices,
                total_weight,
            },
            search.stats,
        ))
    }

    /// Main loop shared by the single-target and single-source queries.
    ///
    /// With a target, the loop stops as soon as the target is dequeued.
    fn search<L, W, G>(&self, graph: &G, source: &L, target: Option<&L>) -> Result<Search<L, W>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>,
    {
        debug!(
            "Dijkstra from {:?} (target {:?}) over {} vertices",
            source,
            target,
            graph.vertex_count()
        );

        let mut distances: HashMap<L, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        let mut previous: HashMap<L, L> = HashMap::new();
        let mut stats = DijkstraStats::default();
        let mut reached_target = false;

        distances.insert(source.clone(), W::zero());

        let mut queue = MinPriorityQueue::new();
        queue.enqueue(source.clone(), W::zero());

        while let Some(PriorityEntry { value: current, priority }) = queue.dequeue() {
            stats.dequeued += 1;
            if let Some(limit) = self.max_iterations {
                if stats.dequeued > limit {
                    return Err(Error::IterationLimit(limit));
                }
            }

            if target == Some(&current) {
                reached_target = true;
                break;
            }

            let current_dist = distance_of(&distances, &current);
            if current_dist < priority {
                stats.stale_skipped += 1;
                continue;
            }

            for (neighbor, weight) in graph.neighbors(&current) {
                let candidate = current_dist + weight;
                if candidate < distance_of(&distances, neighbor) {
                    trace!("relax {:?} -> {:?}: {:?}", current, neighbor, candidate);
                    distances.insert(neighbor.clone(), candidate);
                    previous.insert(neighbor.clone(), current.clone());
                    queue.enqueue(neighbor.clone(), candidate);
                    stats.relaxations += 1;
                }
            }
        }

        debug!("Dijkstra finished: {:?}", stats);

        Ok(Search {
            distances,
            previous,
            reached_target,
            stats,
        })
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<L, W, G>(
        &self,
        graph: &G,
        source: &L,
    ) -> Result<ShortestPathResult<L, W>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>,
    {
        require_vertex(graph, source)?;

        let search = self.search(graph, source, None)?;
        let distances = search
            .distances
            .into_iter()
            .filter(|(_, dist)| dist.is_finite())
            .collect();

        Ok(ShortestPathResult {
            distances,
            predecessors: search.previous,
            source: source.clone(),
        })
    }

    fn shortest_path<L, W, G>(
        &self,
        graph: &G,
        start: &L,
        finish: &L,
    ) -> Result<ShortestPath<L, W>>
    where
        L: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy,
        G: Graph<L, W>,
    {
        self.shortest_path_with_stats(graph, start, finish)
            .map(|(path, _)| path)
    }
}

/// Fails with [`Error::VertexNotFound`] unless `vertex` is in the graph
pub(crate) fn require_vertex<L, W, G>(graph: &G, vertex: &L) -> Result<()>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<L, W>,
{
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::VertexNotFound(format!("{:?}", vertex)))
    }
}

fn distance_of<L, W>(distances: &HashMap<L, W>, vertex: &L) -> W
where
    L: Eq + Hash,
    W: Float,
{
    distances.get(vertex).copied().unwrap_or_else(W::infinity)
}

/// Follows predecessor links back from `finish` and returns the path in start-to-finish order
fn reconstruct_path<L>(previous: &HashMap<L, L>, start: &L, finish: &L) -> Result<Vec<L>>
where
    L: Eq + Hash + Clone + Debug,
{
    let mut path = vec![finish.clone()];
    let mut current = finish;

    while let Some(pred) = previous.get(current) {
        // A chain longer than the number of links must loop
        if path.len() > previous.len() {
            return Err(Error::AlgorithmError(format!(
                "predecessor chain from {:?} does not terminate",
                finish
            )));
        }
        path.push(pred.clone());
        current = pred;
    }

    if current != start {
        return Err(Error::AlgorithmError(format!(
            "predecessor chain from {:?} ends at {:?} instead of {:?}",
            finish, current, start
        )));
    }

    path.reverse();
    Ok(path)
}
