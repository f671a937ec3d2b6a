use topo_sssp::OrderedFloat;
use topo_sssp::algorithm::dijkstra::Dijkstra;
use topo_sssp::algorithm::traits::ShortestPathAlgorithm;
use topo_sssp::graph::generators::{generate_chain, generate_grid};
use topo_sssp::graph::{AdjacencyList, Graph, MutableGraph};
use topo_sssp::{Error, SsspEngine};

type Grid = AdjacencyList<(usize, usize), OrderedFloat<f64>>;

// Test helper: 8-connected grid with diagonal moves costing 1.4
fn create_test_grid(width: usize, height: usize) -> Grid {
    let mut graph = AdjacencyList::new();

    for y in 0..height {
        for x in 0..width {
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    graph.insert_directed_edge((x, y), (nx as usize, ny as usize), OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

fn assert_path_matches_distance<W>(graph: &AdjacencyList<(usize, usize), W>, path: &[(usize, usize)], distance: W)
where
    W: topo_sssp::Weight,
{
    let mut total = W::zero();
    for pair in path.windows(2) {
        total = total + graph.edge_weight(&pair[0], &pair[1]).expect("path should only use existing edges");
    }
    assert_eq!(total, distance);
}

#[test]
fn test_chain_scenario() {
    let graph = generate_chain(6);
    let mut engine = SsspEngine::new();
    engine.run(&graph, &0).unwrap();

    let mut path = Vec::new();
    let distance = engine.find_path(&graph, &5, Some(&mut path)).unwrap();
    assert_eq!(distance, 5);
    assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_undirected_chain_from_edge_stream() {
    let graph: AdjacencyList<i32> = AdjacencyList::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    let mut engine = SsspEngine::new();

    engine.run(&graph, &5).unwrap();
    let mut path = Vec::new();
    assert_eq!(engine.find_path(&graph, &0, Some(&mut path)), Ok(5));
    assert_eq!(path, vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_removed_edge_leaves_no_path() {
    let mut graph: AdjacencyList<i32> = AdjacencyList::new();
    graph.add_edge(0, 1);
    assert_eq!(graph.remove_edge(&0, &1), Ok(true));

    let mut engine = SsspEngine::new();
    engine.run(&graph, &0).unwrap();

    let mut path = vec![42];
    let result = engine.find_path(&graph, &1, Some(&mut path));
    assert!(matches!(result, Err(Error::Unreachable { .. })));
    assert!(path.is_empty());
}

#[test]
fn test_detour_beats_direct_edge() {
    let mut graph: AdjacencyList<&str> = AdjacencyList::new();
    graph.insert_directed_edge("A", "B", 5);
    graph.insert_directed_edge("A", "C", 1);
    graph.insert_directed_edge("C", "B", 1);

    let mut engine = SsspEngine::new();
    engine.run(&graph, &"A").unwrap();

    let mut path = Vec::new();
    assert_eq!(engine.find_path(&graph, &"B", Some(&mut path)), Ok(2));
    assert_eq!(path, vec!["A", "C", "B"]);
}

#[test]
fn test_source_path_is_single_vertex() {
    let graph = generate_grid(5, 5);
    let mut engine = SsspEngine::new();
    engine.run(&graph, &12).unwrap();

    let mut path = Vec::new();
    assert_eq!(engine.find_path(&graph, &12, Some(&mut path)), Ok(0));
    assert_eq!(path, vec![12]);
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);
    let source = (0, 0);
    let target = (9, 9);

    let mut engine = SsspEngine::new();
    engine.run(&graph, &source).unwrap();

    let mut path = Vec::new();
    let distance = engine.find_path(&graph, &target, Some(&mut path)).unwrap();

    // Nine diagonal moves
    assert!((distance.into_inner() - 9.0 * 1.4).abs() < 1e-9);
    assert_eq!(path.first(), Some(&source), "Path should start at source");
    assert_eq!(path.last(), Some(&target), "Path should end at target");
    assert_path_matches_distance(&graph, &path, distance);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = create_test_grid(10, 10);

    // Create a wall in column 5, leaving rows 8 and 9 open
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    for cell in &wall {
        graph.remove_vertex(cell).unwrap();
    }

    let source = (0, 0);
    let target = (9, 0);

    let mut engine = SsspEngine::new();
    engine.run(&graph, &source).unwrap();

    let mut path = Vec::new();
    let distance = engine.find_path(&graph, &target, Some(&mut path)).unwrap();

    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&target));
    assert!(path.iter().all(|cell| !wall.contains(cell)), "Path should avoid removed vertices");
    assert!(path.iter().any(|&(x, y)| x == 5 && y >= 8), "Path should pass through the gap");
    assert_path_matches_distance(&graph, &path, distance);
}

#[test]
fn test_one_shot_query_matches_engine() {
    let graph = create_test_grid(6, 4);
    let dijkstra = Dijkstra::new();

    let (distance, path) = dijkstra.shortest_path(&graph, &(0, 3), &(5, 0)).unwrap();
    assert_eq!(path.first(), Some(&(0, 3)));
    assert_eq!(path.last(), Some(&(5, 0)));
    assert_path_matches_distance(&graph, &path, distance);

    let tree = dijkstra.compute_shortest_paths(&graph, &(0, 3)).unwrap();
    assert_eq!(tree.distance(&(5, 0)), Some(distance));
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<(usize, usize), OrderedFloat<f64>, Grid>>::get_path(&dijkstra, &tree, &(5, 0)),
        Some(path)
    );
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<(usize, usize), OrderedFloat<f64>, Grid>>::name(&dijkstra),
        "Dijkstra"
    );
}

#[test]
fn test_one_shot_query_errors() {
    let mut graph: AdjacencyList<u8> = AdjacencyList::new();
    graph.add_directed_edge(1, 2);
    graph.insert_vertex(3);
    let dijkstra = Dijkstra::new();

    assert!(matches!(dijkstra.shortest_path(&graph, &1, &3), Err(Error::Unreachable { .. })));
    assert!(matches!(dijkstra.shortest_path(&graph, &1, &9), Err(Error::UnknownVertex(_))));
    assert!(matches!(dijkstra.shortest_path(&graph, &9, &1), Err(Error::UnknownVertex(_))));
    assert_eq!(graph.vertex_count(), 3);
}
