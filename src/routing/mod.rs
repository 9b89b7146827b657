pub mod route;
pub mod sequencer;

pub use route::{Leg, Route};
pub use sequencer::{build_route, NearestNeighbor};
