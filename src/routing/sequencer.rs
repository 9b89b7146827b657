use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, Weight};
use crate::routing::route::{Leg, Route};
use crate::{Error, Result};

/// Greedy nearest-neighbor tour builder
///
/// From the current location it always drives to the closest stop not yet
/// served, then closes the circuit back at the start. Each hop runs one full
/// shortest path computation from the current location.
#[derive(Debug, Default, Clone)]
pub struct NearestNeighbor<A = Dijkstra> {
    algorithm: A,
}

impl NearestNeighbor<Dijkstra> {
    /// Creates a sequencer backed by Dijkstra's algorithm
    pub fn new() -> Self {
        Self::with_algorithm(Dijkstra::new())
    }
}

impl<A> NearestNeighbor<A> {
    /// Creates a sequencer backed by the given shortest path algorithm
    pub fn with_algorithm(algorithm: A) -> Self {
        NearestNeighbor { algorithm }
    }

    /// Builds a tour from `start` through every distinct stop and back to `start`.
    ///
    /// Duplicate stops collapse into a single visit and a stop equal to
    /// `start` is ignored. When several stops are equally close, the one
    /// listed first in `stops` wins. Unreachable stops are never selected: if
    /// none of the remaining stops can be reached the whole tour fails.
    pub fn build_route<W, G>(&self, graph: &G, start: usize, stops: &[usize]) -> Result<Route<W>>
    where
        W: Weight,
        G: Graph<W>,
        A: ShortestPathAlgorithm<W, G>,
    {
        check_node(graph, start)?;
        for &stop in stops {
            check_node(graph, stop)?;
        }

        let mut remaining = distinct_stops(start, stops);
        let mut route = Route::new(start);
        let mut current = start;

        while !remaining.is_empty() {
            let result = self.algorithm.compute_shortest_paths(graph, current)?;

            let mut nearest: Option<(usize, W)> = None;
            for (index, &stop) in remaining.iter().enumerate() {
                if let Some(distance) = result.distance(stop) {
                    if nearest.map_or(true, |(_, best)| distance < best) {
                        nearest = Some((index, distance));
                    }
                }
            }

            let Some((index, distance)) = nearest else {
                return Err(Error::Unreachable {
                    from: current,
                    to: remaining,
                });
            };

            let next = remaining.remove(index);
            let path = self.algorithm.get_path(&result, next)?;
            debug!("hop {} -> {}: distance {:?}, {} nodes", current, next, distance, path.len());

            push_leg(&mut route, current, next, distance, path)?;
            route.visit_order.push(next);
            current = next;
        }

        // Close the circuit
        let result = self.algorithm.compute_shortest_paths(graph, current)?;
        let distance = result.require_distance(start)?;
        let path = self.algorithm.get_path(&result, start)?;
        debug!("return {} -> {}: distance {:?}", current, start, distance);
        push_leg(&mut route, current, start, distance, path)?;

        info!(
            "route from {} serves {} stops over {} nodes, total distance {:?}",
            start,
            route.stop_count(),
            route.nodes.len(),
            route.total_distance
        );

        Ok(route)
    }

    /// Builds one tour per stop set, in parallel.
    ///
    /// The graph is only read, so the stop sets are planned independently
    /// and the results keep the order of `stop_sets`.
    pub fn plan_batches<W, G>(
        &self,
        graph: &G,
        start: usize,
        stop_sets: &[Vec<usize>],
    ) -> Vec<Result<Route<W>>>
    where
        W: Weight,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W, G> + Sync,
    {
        stop_sets
            .par_iter()
            .map(|stops| self.build_route(graph, start, stops))
            .collect()
    }
}

/// Builds a nearest-neighbor tour with Dijkstra's algorithm
pub fn build_route<W, G>(graph: &G, start: usize, stops: &[usize]) -> Result<Route<W>>
where
    W: Weight,
    G: Graph<W>,
{
    NearestNeighbor::new().build_route(graph, start, stops)
}

fn check_node<W: Weight, G: Graph<W>>(graph: &G, node: usize) -> Result<()> {
    if graph.has_vertex(node) {
        Ok(())
    } else {
        Err(Error::InvalidNode {
            node,
            node_count: graph.vertex_count(),
        })
    }
}

/// Distinct stops in first-appearance order, without the start
fn distinct_stops(start: usize, stops: &[usize]) -> Vec<usize> {
    let mut seen = HashSet::new();
    seen.insert(start);
    stops.iter().copied().filter(|stop| seen.insert(*stop)).collect()
}

fn push_leg<W: Weight>(
    route: &mut Route<W>,
    from: usize,
    to: usize,
    distance: W,
    path: Vec<usize>,
) -> Result<()> {
    route
        .push_leg(Leg {
            from,
            to,
            distance,
            path,
        })
        .ok_or(Error::DistanceOverflow(to))
}
