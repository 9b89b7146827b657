use log::{debug, trace};

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Every call starts from scratch with its own frontier; nothing is cached
/// between sources.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidNode {
                node: source,
                node_count: n,
            });
        }

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut overflowed = vec![false; n];
        let mut settled = Vec::new();
        let mut stats = SearchStats::default();

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut frontier: IndexedMinHeap<W> = IndexedMinHeap::new(n, source);

        // Main Dijkstra loop
        while let Some((u, dist_u)) = frontier.pop() {
            // Everything left in the frontier is infinite, so unreachable
            let Some(dist_u) = dist_u else {
                trace!("{} nodes unreachable from {}", frontier.len() + 1, source);
                break;
            };

            trace!("settled node {} at distance {:?}", u, dist_u);
            settled.push(u);
            stats.nodes_settled += 1;

            for (v, weight) in graph.neighbors(u) {
                stats.edges_relaxed += 1;
                if !frontier.contains(v) {
                    continue;
                }

                // A sum past the largest weight can never improve a stored distance
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    overflowed[v] = true;
                    continue;
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    frontier.decrease_key(v, new_dist);
                    stats.decrease_keys += 1;
                }
            }
        }

        // Reachable, but only at a distance the weight type cannot hold
        if let Some(v) = (0..n).find(|&v| overflowed[v] && distances[v].is_none()) {
            return Err(Error::DistanceOverflow(v));
        }

        debug!(
            "dijkstra from {}: settled {}/{} nodes, relaxed {} edges",
            source, stats.nodes_settled, n, stats.edges_relaxed
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            settled,
            stats,
        })
    }
}
