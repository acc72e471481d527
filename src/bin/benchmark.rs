use std::env;
use std::time::{Duration, Instant};
use weighted_paths::graph::generators::generate_random_connected;
use weighted_paths::graph::{Graph, WeightedGraph};
use weighted_paths::{Dijkstra, ShortestPathAlgorithm};

// Function to benchmark one query on a graph
fn benchmark_query(graph: &WeightedGraph<usize, f64>, start: usize, finish: usize) -> Duration {
    let dijkstra = Dijkstra::new();

    let begin = Instant::now();
    let outcome = dijkstra.shortest_path_with_stats(graph, &start, &finish);
    let duration = begin.elapsed();

    match outcome {
        Ok((path, stats)) => {
            println!(
                "  - Path of {} vertices, weight {:.2}, in {:?}",
                path.len(),
                path.total_weight.unwrap_or(f64::INFINITY),
                duration
            );
            println!(
                "  - Dequeued {}, stale {}, relaxations {}",
                stats.dequeued, stats.stale_skipped, stats.relaxations
            );
        }
        Err(e) => println!("  - Query failed: {}", e),
    }

    duration
}

fn main() {
    env_logger::init();

    // Sizes may be given on the command line, e.g. `benchmark 1000 50000`
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![1_000, 10_000, 50_000, 100_000]
    } else {
        args.iter().filter_map(|a| a.parse().ok()).collect()
    };

    // Edge factor: extra edges per vertex on top of the spanning tree
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: Dijkstra point-to-point queries");
    println!("Extra edges per vertex: {}", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random connected graph with {} vertices...", size);
        let graph = match generate_random_connected(size, size * edge_factor, size as u64) {
            Ok(graph) => graph,
            Err(e) => {
                println!("  - Generation failed: {}", e);
                continue;
            }
        };
        if size < 2 {
            continue;
        }

        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let query_time = benchmark_query(&graph, 0, size - 1);

        let full_begin = Instant::now();
        let full_time = match Dijkstra::new().compute_shortest_paths(&graph, &0) {
            Ok(result) => {
                let elapsed = full_begin.elapsed();
                println!("  - Settled {} vertices from 0 in {:?}", result.distances.len(), elapsed);
                elapsed
            }
            Err(e) => {
                println!("  - Single-source run failed: {}", e);
                continue;
            }
        };

        results.push((size, query_time, full_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Query (ms)", "All (ms)");
    println!("-----------------------------------------------------");

    for (size, query_time, full_time) in &results {
        println!(
            "{:<10} | {:<15.3} | {:<15.3}",
            size,
            query_time.as_secs_f64() * 1000.0,
            full_time.as_secs_f64() * 1000.0
        );
    }
}
