use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// An undirected road network implementation using adjacency lists
///
/// The node domain `[0, n)` is fixed when the network is created. Every road
/// is stored twice, once in the adjacency list of each endpoint.
#[derive(Debug, Clone)]
pub struct RoadNetwork<W>
where
    W: Weight,
{
    /// Incident edges for each node: node_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected roads inserted
    edge_count: usize,
}

impl<W> RoadNetwork<W>
where
    W: Weight,
{
    /// Creates a road network over nodes `0..nodes` with no roads
    pub fn with_capacity(nodes: usize) -> Self {
        RoadNetwork {
            adjacency: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Builds a network from a list of `(u, v, weight)` roads
    pub fn from_edges<I>(nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut network = Self::with_capacity(nodes);
        for (u, v, weight) in edges {
            network.add_edge(u, v, weight)?;
        }
        Ok(network)
    }

    /// Number of edge records incident to a node
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Fails with `InvalidNode` unless the node is inside the domain
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node: vertex,
                node_count: self.adjacency.len(),
            })
        }
    }
}

impl<W> Graph<W> for RoadNetwork<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for RoadNetwork<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // Parallel roads are kept; relaxation picks the cheaper one.
        self.adjacency[from].push((to, weight));
        self.adjacency[to].push((from, weight));
        self.edge_count += 1;

        Ok(())
    }
}
