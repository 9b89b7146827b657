use delivery_routing::graph::generators::generate_connected;
use delivery_routing::graph::{Graph, RoadNetwork};
use delivery_routing::routing::NearestNeighbor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

// Function to pick a random stop list with the given number of orders
fn random_stops<R: Rng>(rng: &mut R, nodes: usize, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.gen_range(0..nodes)).collect()
}

// Function to benchmark sequential against batched planning
fn benchmark_batches(graph: &RoadNetwork<u32>, stop_sets: &[Vec<usize>]) -> (Duration, Duration) {
    let sequencer = NearestNeighbor::new();

    let start = Instant::now();
    for stops in stop_sets {
        sequencer.build_route(graph, 0, stops).expect("generated network is connected");
    }
    let sequential = start.elapsed();

    let start = Instant::now();
    let routes = sequencer.plan_batches(graph, 0, stop_sets);
    let batched = start.elapsed();
    assert!(routes.iter().all(|route| route.is_ok()));

    (sequential, batched)
}

fn main() {
    env_logger::init();

    // Define network sizes to test
    let network_sizes = vec![300, 1_000, 10_000, 50_000];
    let stops_per_route = 20;
    let routes_per_size = 16;

    println!("=====================================================");
    println!("Benchmark: nearest-neighbor route planning");
    println!("{} stops per route, {} routes per network", stops_per_route, routes_per_size);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &network_sizes {
        println!("\nGenerating connected network with {} nodes...", size);
        let graph = generate_connected(size, size / 2, 10, 200, &mut rng).expect("valid generator parameters");
        println!("Network has {} nodes and {} roads", graph.vertex_count(), graph.edge_count());

        let stop_sets: Vec<Vec<usize>> = (0..routes_per_size)
            .map(|_| random_stops(&mut rng, size, stops_per_route))
            .collect();

        let (sequential, batched) = benchmark_batches(&graph, &stop_sets);
        println!("  - sequential: {:?}, batched: {:?}", sequential, batched);
        results.push((size, sequential, batched));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "Sequential (ms)", "Batched (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, sequential, batched) in &results {
        let speedup = sequential.as_secs_f64() / batched.as_secs_f64();
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            sequential.as_millis(),
            batched.as_millis(),
            speedup
        );
    }
}
