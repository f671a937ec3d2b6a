use crate::graph::{AdjacencyList, MutableGraph};
use rand::prelude::*;

/// Generates a directed chain 0 -> 1 -> ... -> n-1 with unit weights
pub fn generate_chain(n: usize) -> AdjacencyList<usize> {
    let mut graph = AdjacencyList::with_capacity(n);
    if n > 0 {
        graph.insert_vertex(0);
    }
    for v in 1..n {
        graph.add_directed_edge(v - 1, v);
    }
    graph
}

/// Generates a width*height grid with undirected unit-weight links (4-connectivity)
/// Vertex `y * width + x` sits at column x, row y
pub fn generate_grid(width: usize, height: usize) -> AdjacencyList<usize> {
    let mut graph = AdjacencyList::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.insert_vertex(current);

            if x + 1 < width {
                graph.add_edge(current, current + 1);
            }
            if y + 1 < height {
                graph.add_edge(current, current + width);
            }
        }
    }

    graph
}

/// Generates a random router network with undirected links
/// routers: number of routers, labelled 0..routers
/// edge_factor: average number of links per router
/// max_cost: link costs are drawn uniformly from 1..=max_cost
pub fn generate_router_network<R: Rng>(
    rng: &mut R,
    routers: usize,
    edge_factor: f64,
    max_cost: i32,
) -> AdjacencyList<usize> {
    let mut graph = AdjacencyList::with_capacity(routers);
    for router in 0..routers {
        graph.insert_vertex(router);
    }
    if routers < 2 {
        return graph;
    }

    let links = (edge_factor * routers as f64) as usize;
    for _ in 0..links {
        let a = rng.gen_range(0..routers);
        let b = rng.gen_range(0..routers);
        // Avoid self-loops
        if a != b {
            let cost = rng.gen_range(1..=max_cost.max(1));
            graph.insert_edge(a, b, cost);
        }
    }

    graph
}
