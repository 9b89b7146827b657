pub mod traits;
pub mod road_network;
pub mod city;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use road_network::RoadNetwork;
