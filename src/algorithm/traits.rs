use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Counters collected during one shortest path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes extracted from the frontier with a finite distance
    pub nodes_settled: usize,
    /// Edges examined while relaxing settled nodes
    pub edges_relaxed: usize,
    /// Successful decrease-key operations
    pub decrease_keys: usize,
}

/// Result of a shortest path algorithm execution
///
/// Only valid for the single source it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each node, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node ID
    pub source: usize,

    /// Reachable nodes in the order they were settled
    pub settled: Vec<usize>,

    /// Run counters
    pub stats: SearchStats,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance from the source to `target`, `None` if unreachable or out of range
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Returns true if a path from the source to `target` exists
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Distance to `target`, failing with `Unreachable` instead of returning a sentinel
    pub fn require_distance(&self, target: usize) -> Result<W> {
        if target >= self.distances.len() {
            return Err(Error::InvalidNode {
                node: target,
                node_count: self.distances.len(),
            });
        }
        self.distance(target).ok_or_else(|| Error::Unreachable {
            from: self.source,
            to: vec![target],
        })
    }

    /// Node sequence from the source to `target`, both included
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        result.path_to(target)
    }
}
