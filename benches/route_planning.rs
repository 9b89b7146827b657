use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delivery_routing::algorithm::ShortestPathAlgorithm;
use delivery_routing::graph::city::{city_network, DEPOT};
use delivery_routing::graph::generators::generate_street_grid;
use delivery_routing::{build_route, Dijkstra};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn city_benchmarks(c: &mut Criterion) {
    let network = city_network().unwrap();
    let stops = [45, 120, 287, 12, 199, 64, 150, 230];

    c.bench_function("city dijkstra from depot", |b| {
        b.iter(|| Dijkstra::new().compute_shortest_paths(&network, black_box(DEPOT)).unwrap())
    });

    c.bench_function("city route 8 stops", |b| {
        b.iter(|| build_route(&network, DEPOT, black_box(&stops)).unwrap())
    });
}

fn grid_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = generate_street_grid(100, 100, 50, &mut rng).unwrap();
    let stops: Vec<usize> = (0..10).map(|i| i * 997 % 10_000).collect();

    c.bench_function("grid route 10 stops", |b| {
        b.iter(|| build_route(&grid, 0, black_box(&stops)).unwrap())
    });
}

criterion_group!(benches, city_benchmarks, grid_benchmarks);
criterion_main!(benches);
