//! Delivery Routing - multi-stop route planning over a fixed road network
//!
//! This library computes delivery tours that start at a depot, visit every
//! required stop and return to the depot. Each hop is resolved with Dijkstra's
//! single-source shortest path algorithm and the visiting order is chosen with
//! a greedy nearest-neighbor heuristic.
//!
//! The tour is an approximation: no optimality guarantee is made beyond the
//! locally nearest choice at each step.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod orders;
pub mod routing;
pub mod web;

// Re-export main types for convenient use
pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use graph::road_network::RoadNetwork;
pub use routing::{build_route, NearestNeighbor, Route};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node ID: {node} (network has {node_count} nodes)")]
    InvalidNode { node: usize, node_count: usize },

    /// No road connects `from` to any of the nodes in `to`
    #[error("No path from node {from} to any of {to:?}")]
    Unreachable { from: usize, to: Vec<usize> },

    #[error("Distance overflow while extending the path to node {0}")]
    DistanceOverflow(usize),

    #[error("Product not found in inventory: {0}")]
    ProductNotFound(String),

    #[error("Not enough stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    #[error("Inventory is full ({0} products)")]
    InventoryFull(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
