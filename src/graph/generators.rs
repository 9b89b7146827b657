use crate::graph::{MutableGraph, RoadNetwork};
use crate::Result;
use rand::prelude::*;

/// Generates a connected random road network with n nodes
///
/// A random spanning tree guarantees connectivity; `extra_roads` additional
/// roads between random pairs are then added on top of it.
/// Weights are drawn uniformly from `min_weight..=max_weight`.
pub fn generate_connected<R: Rng>(
    n: usize,
    extra_roads: usize,
    min_weight: u32,
    max_weight: u32,
    rng: &mut R,
) -> Result<RoadNetwork<u32>> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");

    let mut graph = RoadNetwork::with_capacity(n);
    if n < 2 {
        return Ok(graph);
    }

    // Attach every node to one of the nodes before it
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = rng.gen_range(min_weight..=max_weight);
        graph.add_edge(u, v, weight)?;
    }

    for _ in 0..extra_roads {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(min_weight..=max_weight);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a width*height street grid with random block lengths
pub fn generate_street_grid<R: Rng>(
    width: usize,
    height: usize,
    max_block: u32,
    rng: &mut R,
) -> Result<RoadNetwork<u32>> {
    let mut graph = RoadNetwork::with_capacity(width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), rng.gen_range(1..=max_block))?;
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), rng.gen_range(1..=max_block))?;
            }
        }
    }

    Ok(graph)
}
