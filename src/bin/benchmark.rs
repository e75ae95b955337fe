use std::env;
use std::time::{Duration, Instant};

use dense_sssp::graph::generators::random_cost_matrix;
use dense_sssp::graph::Graph;
use dense_sssp::ShortestPathEngine;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Time a single-source query and a full distance table on one engine
fn benchmark_engine(engine: &ShortestPathEngine<f64>, source: usize) -> (Duration, Duration, usize) {
    let start = Instant::now();
    let reachable = match engine.distances_from(source) {
        Ok(distances) => distances.reachable_count(),
        Err(err) => {
            eprintln!("  - distances_from({}) failed: {}", source, err);
            0
        }
    };
    let single = start.elapsed();

    let start = Instant::now();
    if let Err(err) = engine.distance_table() {
        eprintln!("  - distance_table failed: {}", err);
    }
    let table = start.elapsed();

    (single, table, reachable)
}

fn main() {
    env_logger::init();

    // Optional RNG seed as first argument
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let sizes = vec![50, 100, 200, 400];
    let density = 0.3;
    let max_weight = 100;

    println!("=====================================================");
    println!("Benchmark: dense Dijkstra on random cost matrices");
    println!("Density: {}, weights 1..={}, seed {}", density, max_weight, seed);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &sizes {
        let matrix = random_cost_matrix(size, density, max_weight, &mut rng);
        info!("Generated {}x{} matrix with {} edges", size, size, matrix.edge_count());

        let engine = ShortestPathEngine::new(matrix);
        let (single, table, reachable) = benchmark_engine(&engine, 0);

        println!(
            "{} vertices: single source {:?} ({} reachable), all sources {:?}",
            size, single, reachable, table
        );
        results.push((size, single, table));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<18} | {:<18}", "Vertices", "Single (µs)", "All sources (ms)");
    println!("-----------------------------------------------------");

    for (size, single, table) in &results {
        println!(
            "{:<10} | {:<18} | {:<18.2}",
            size,
            single.as_micros(),
            table.as_secs_f64() * 1000.0
        );
    }
}
