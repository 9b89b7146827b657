use delivery_routing::algorithm::dijkstra::Dijkstra;
use delivery_routing::algorithm::traits::ShortestPathAlgorithm;
use delivery_routing::algorithm::reconstruct_path;
use delivery_routing::graph::generators::{generate_connected, generate_street_grid};
use delivery_routing::graph::{Graph, MutableGraph, RoadNetwork};
use delivery_routing::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Test helper: a five node ring where the direct road 0-4 is a detour
fn create_ring() -> RoadNetwork<u32> {
    RoadNetwork::from_edges(
        5,
        [(0, 1, 10), (1, 2, 10), (2, 3, 10), (3, 4, 10), (0, 4, 100)],
    )
    .unwrap()
}

// Sum of the cheapest road between consecutive nodes of a path
fn path_weight(graph: &RoadNetwork<u32>, path: &[usize]) -> u32 {
    path.windows(2)
        .map(|pair| {
            graph
                .min_edge_weight(pair[0], pair[1])
                .expect("path should only use existing edges")
        })
        .sum()
}

#[test]
fn test_long_way_round_beats_direct_road() {
    let graph = create_ring();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(4), Some(40));
    assert_eq!(result.path_to(4).unwrap(), vec![0, 1, 2, 3, 4]);
    assert_eq!(result.distances, vec![Some(0), Some(10), Some(20), Some(30), Some(40)]);
}

#[test]
fn test_source_has_zero_distance_and_no_predecessor() {
    let graph = create_ring();
    for source in 0..5 {
        let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.source, source);
        assert_eq!(result.distance(source), Some(0));
        assert_eq!(result.predecessors[source], None);
        assert_eq!(result.path_to(source).unwrap(), vec![source]);
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = create_ring();
    let err = Dijkstra::new().compute_shortest_paths(&graph, 5).unwrap_err();
    assert_eq!(err, Error::InvalidNode { node: 5, node_count: 5 });
}

#[test]
fn test_undirected_edges_work_both_ways() {
    let mut graph = RoadNetwork::with_capacity(3);
    graph.add_edge(2, 1, 7u32).unwrap();
    graph.add_edge(1, 0, 3).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(2), Some(10));
    assert_eq!(result.path_to(2).unwrap(), vec![0, 1, 2]);

    let back = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();
    assert_eq!(back.distance(0), Some(10));
    assert_eq!(back.path_to(0).unwrap(), vec![2, 1, 0]);
}

#[test]
fn test_parallel_edges_use_the_cheaper_road() {
    let mut graph = RoadNetwork::with_capacity(2);
    graph.add_edge(0, 1, 60u32).unwrap();
    graph.add_edge(0, 1, 25).unwrap();
    graph.add_edge(1, 0, 40).unwrap();

    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.degree(0), 3);
    assert_eq!(graph.min_edge_weight(1, 0), Some(25));

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(25));
}

#[test]
fn test_out_of_range_edge_is_rejected() {
    let mut graph: RoadNetwork<u32> = RoadNetwork::with_capacity(3);
    assert_eq!(
        graph.add_edge(0, 3, 1),
        Err(Error::InvalidNode { node: 3, node_count: 3 })
    );
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.degree(0), 0);

    let built = RoadNetwork::from_edges(3, [(0, 1, 4u32), (7, 1, 2)]);
    assert!(matches!(built, Err(Error::InvalidNode { node: 7, .. })));
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph = RoadNetwork::with_capacity(4);
    graph.add_edge(0, 3, 5u32).unwrap();
    graph.add_edge(0, 1, 9).unwrap();
    graph.add_edge(2, 0, 1).unwrap();

    let neighbors: Vec<(usize, u32)> = graph.neighbors(0).collect();
    assert_eq!(neighbors, vec![(3, 5), (1, 9), (2, 1)]);
    assert!(graph.has_edge(2, 0));
    assert!(!graph.has_edge(1, 3));
}

#[test]
fn test_unreachable_node_keeps_sentinel() {
    let mut graph = RoadNetwork::with_capacity(4);
    graph.add_edge(0, 1, 2u32).unwrap();
    graph.add_edge(2, 3, 2).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(3), None);
    assert_eq!(result.predecessors[3], None);
    assert!(!result.is_reachable(2));
    assert_eq!(result.settled, vec![0, 1]);
    let unreachable = Error::Unreachable { from: 0, to: vec![3] };
    assert_eq!(result.require_distance(3), Err(unreachable.clone()));
    assert_eq!(result.path_to(3), Err(unreachable));
}

#[test]
fn test_reconstruct_path_detects_cycles() {
    // 1 and 2 point at each other and never reach the source
    let predecessors = vec![None, Some(2), Some(1)];
    assert_eq!(
        reconstruct_path(&predecessors, 0, 1),
        Err(Error::Unreachable { from: 0, to: vec![1] })
    );
    assert!(matches!(
        reconstruct_path(&predecessors, 0, 9),
        Err(Error::InvalidNode { node: 9, .. })
    ));
}

#[test]
fn test_distance_overflow_is_reported() {
    let graph = RoadNetwork::from_edges(3, [(0, 1, 200u8), (1, 2, 100)]).unwrap();
    let err = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap_err();
    assert_eq!(err, Error::DistanceOverflow(2));
}

#[test]
fn test_overflowing_detour_is_ignored() {
    // 0-1-2 does not fit in a u8, the direct road 0-2 does
    let graph = RoadNetwork::from_edges(3, [(0, 1, 200u8), (0, 2, 201), (1, 2, 100)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(1), Some(200));
    assert_eq!(result.distance(2), Some(201));
    assert_eq!(result.path_to(2).unwrap(), vec![0, 2]);
}

#[test]
fn test_paths_match_distances_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let graph = generate_connected(120, 180, 1, 50, &mut rng).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        for v in 0..graph.vertex_count() {
            let distance = result.distance(v).expect("generated network is connected");
            let path = result.path_to(v).unwrap();
            assert_eq!(path[0], 0, "Path should start at source");
            assert_eq!(path[path.len() - 1], v, "Path should end at target");
            assert_eq!(path_weight(&graph, &path), distance);
        }

        // No edge can shorten a settled distance
        for u in 0..graph.vertex_count() {
            for (v, weight) in graph.neighbors(u) {
                assert!(result.distance(v).unwrap() <= result.distance(u).unwrap() + weight);
            }
        }
    }
}

#[test]
fn test_nodes_settle_in_non_decreasing_distance() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_street_grid(15, 12, 30, &mut rng).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 37).unwrap();

    assert_eq!(result.settled.len(), graph.vertex_count());
    assert_eq!(result.stats.nodes_settled, graph.vertex_count());
    assert_eq!(result.stats.edges_relaxed, 2 * graph.edge_count());

    let settled: Vec<u32> = result.settled.iter().map(|&v| result.distance(v).unwrap()).collect();
    assert!(settled.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = generate_connected(80, 200, 1, 5, &mut rng).unwrap();

    let dijkstra = Dijkstra::new();
    let first = dijkstra.compute_shortest_paths(&graph, 11).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 11).unwrap();

    assert_eq!(first, second);
    assert_eq!(<Dijkstra as ShortestPathAlgorithm<u32, RoadNetwork<u32>>>::name(&dijkstra), "Dijkstra");
}
