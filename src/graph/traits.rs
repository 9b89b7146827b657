use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

use crate::Result;

/// Distance unit carried by road edges.
///
/// Weights are unsigned integers, so negative edges cannot be expressed.
pub trait Weight: PrimInt + Unsigned + Debug + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Send + Sync {}

/// Trait representing a weighted undirected graph over nodes `[0, n)`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges inserted into the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges incident to a node, in insertion order
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node lies inside the graph's domain
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the (possibly parallel) edges between two nodes
    fn min_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for graphs that accept new edges
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds an undirected edge between nodes with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
