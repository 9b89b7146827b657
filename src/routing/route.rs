//! Route and leg types.

use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// One hop of a tour between two consecutively chosen locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg<W> {
    /// Location the hop starts from.
    pub from: usize,
    /// Location the hop ends at.
    pub to: usize,
    /// Road distance of the hop.
    pub distance: W,
    /// Road-level node sequence, `from` and `to` included.
    pub path: Vec<usize>,
}

/// A complete delivery tour.
///
/// `nodes` is the road-level circuit: it starts at the depot, passes every
/// intermediate node of every leg and ends back at the depot. Join points
/// between legs appear once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route<W> {
    /// Depot the tour starts and ends at.
    pub start: usize,
    /// Road-level node sequence of the whole circuit.
    pub nodes: Vec<usize>,
    /// Distinct stops in the order they are served.
    pub visit_order: Vec<usize>,
    /// Per-hop breakdown; the last leg returns to `start`.
    pub legs: Vec<Leg<W>>,
    /// Sum of all leg distances.
    pub total_distance: W,
}

impl<W> Route<W>
where
    W: Weight,
{
    /// Creates an empty tour sitting at the depot.
    pub fn new(start: usize) -> Self {
        Self {
            start,
            nodes: vec![start],
            visit_order: Vec::new(),
            legs: Vec::new(),
            total_distance: W::zero(),
        }
    }

    /// Number of distinct stops served.
    pub fn stop_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Returns `true` if the tour serves no stop.
    pub fn is_empty(&self) -> bool {
        self.visit_order.is_empty()
    }

    /// Appends a leg, extending the node sequence and the total.
    ///
    /// Returns `None` if the total would overflow `W`.
    pub(crate) fn push_leg(&mut self, leg: Leg<W>) -> Option<()> {
        self.total_distance = self.total_distance.checked_add(&leg.distance)?;
        // The first node of the leg is where the route already is.
        self.nodes.extend(leg.path.iter().skip(1).copied());
        self.legs.push(leg);
        Some(())
    }
}
