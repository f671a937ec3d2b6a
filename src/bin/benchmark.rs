use std::env;
use std::time::{Duration, Instant};
use log::info;
use rand::prelude::*;
use rand::rngs::StdRng;
use topo_sssp::graph::generators::generate_router_network;
use topo_sssp::graph::{Graph, MutableGraph};
use topo_sssp::SsspEngine;

// Positional argument or default
fn arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index).and_then(|raw| raw.parse().ok()).unwrap_or(default)
}

fn main() {
    env_logger::init();

    // benchmark [routers] [edge_factor] [rounds] [seed]
    let args: Vec<String> = env::args().collect();
    let routers: usize = arg(&args, 1, 10_000).max(2);
    let edge_factor: f64 = arg(&args, 2, 2.0);
    let rounds: usize = arg(&args, 3, 20);
    let seed: u64 = arg(&args, 4, 42);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = generate_router_network(&mut rng, routers, edge_factor, 100);
    let mut engine = SsspEngine::new();

    println!("=====================================================");
    println!("Benchmark: Dijkstra on a changing router network");
    println!(
        "{} routers, {} links, {} rounds, seed {}",
        graph.vertex_count(),
        graph.edge_count() / 2,
        rounds,
        seed
    );
    println!("=====================================================");
    println!("{:<6} | {:<10} | {:<10} | {:<10} | {:<12}", "Round", "Source", "Reachable", "Links", "Run (ms)");

    let mut total = Duration::ZERO;
    for round in 0..rounds {
        let source = rng.gen_range(0..routers);

        let start = Instant::now();
        let reachable = match engine.run(&graph, &source) {
            Ok(tree) => tree.len(),
            Err(err) => {
                eprintln!("run from {} failed: {}", source, err);
                continue;
            }
        };
        let elapsed = start.elapsed();
        total += elapsed;

        println!(
            "{:<6} | {:<10} | {:<10} | {:<10} | {:<12.3}",
            round,
            source,
            reachable,
            graph.edge_count() / 2,
            elapsed.as_secs_f64() * 1000.0
        );

        // Topology change: one link fails, another comes up
        let a = rng.gen_range(0..routers);
        let b = rng.gen_range(0..routers);
        match graph.remove_edge(&a, &b) {
            Ok(true) => info!("link {} <-> {} went down", a, b),
            Ok(false) => {}
            Err(err) => info!("link removal skipped: {}", err),
        }
        let c = rng.gen_range(0..routers);
        let d = rng.gen_range(0..routers);
        if c != d {
            graph.insert_edge(c, d, rng.gen_range(1..=100));
        }
    }

    println!("-----------------------------------------------------");
    println!(
        "Average run: {:.3} ms",
        total.as_secs_f64() * 1000.0 / rounds.max(1) as f64
    );
}
