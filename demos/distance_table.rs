use colored::*;
use dense_sssp::graph::CostMatrix;
use dense_sssp::{AtriaPlugin, DijkstraPlugin, ShortestPathPlugin};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Contains negative edges, so these are not true shortest paths.
    let graph = CostMatrix::from_rows(vec![
        vec![0.0, f32::INFINITY, -2.0, f32::INFINITY],
        vec![4.0, 0.0, 3.0, f32::INFINITY],
        vec![f32::INFINITY, f32::INFINITY, 0.0, 2.0],
        vec![f32::INFINITY, -1.0, f32::INFINITY, 0.0],
    ])?;
    let size = graph.size();

    let mut plugin = DijkstraPlugin::new();
    plugin.load(graph)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for source in 0..size {
        println!("{}", format!("Source {}", source).bold().cyan());
        let distances = plugin.run(source)?;
        plugin.emit(&distances, &mut out)?;
    }

    let network = CostMatrix::from_rows(vec![
        vec![0.0, 0.8, 0.3, 0.0],
        vec![0.8, 0.0, -0.6, 0.0],
        vec![0.3, -0.6, 0.0, 0.4],
        vec![0.0, 0.0, 0.4, 0.0],
    ])?;
    let names = ["alpha", "beta", "gamma", "delta"];

    let mut atria = AtriaPlugin::new();
    atria.load_labelled(network, names.iter().map(|n| n.to_string()).collect())?;
    println!("{}", "ATria centrality".bold().cyan());
    let ranking = atria.run()?;
    atria.emit(&ranking, &mut out)?;

    Ok(())
}
