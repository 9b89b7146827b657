use crate::graph::Weight;

/// An entry of the frontier: a node and its tentative distance (`None` is infinity)
pub type FrontierEntry<W> = (usize, Option<W>);

/// An indexed binary min-heap holding one entry per node
///
/// Entries are ordered by `(distance, node)`: infinite distances sort after
/// every finite one and ties go to the lower node id. A position index maps
/// each node to its heap slot so membership and decrease-key are O(1) and
/// O(log n) respectively.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Weight,
{
    /// The underlying heap array
    heap: Vec<FrontierEntry<W>>,

    /// node -> slot in `heap`, `None` once extracted
    positions: Vec<Option<usize>>,
}

impl<W> IndexedMinHeap<W>
where
    W: Weight,
{
    /// Creates a frontier over nodes `0..nodes`, all at infinity except `source` at zero
    pub fn new(nodes: usize, source: usize) -> Self {
        debug_assert!(source < nodes, "source {} outside 0..{}", source, nodes);

        let mut queue = IndexedMinHeap {
            heap: Vec::with_capacity(nodes),
            positions: vec![None; nodes],
        };

        for node in 0..nodes {
            let distance = if node == source { Some(W::zero()) } else { None };
            queue.push(node, distance);
        }

        queue
    }

    /// Returns true if every node has been extracted
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of nodes still in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the node has not been extracted yet
    pub fn contains(&self, node: usize) -> bool {
        self.slot(node).is_some()
    }

    /// Current tentative distance of a node still in the frontier
    pub fn priority(&self, node: usize) -> Option<W> {
        self.slot(node).and_then(|slot| self.heap[slot].1)
    }

    /// Removes the minimum entry, `None` once the frontier is exhausted
    pub fn pop(&mut self) -> Option<FrontierEntry<W>> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.0] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(entry)
    }

    /// Lowers the distance of a node still in the frontier.
    ///
    /// Returns false, leaving the heap untouched, if the node was already
    /// extracted or `distance` is not smaller than its current one.
    pub fn decrease_key(&mut self, node: usize, distance: W) -> bool {
        let Some(slot) = self.slot(node) else {
            return false;
        };

        if let Some(current) = self.heap[slot].1 {
            if distance >= current {
                return false;
            }
        }

        self.heap[slot].1 = Some(distance);
        self.sift_up(slot);
        true
    }

    fn slot(&self, node: usize) -> Option<usize> {
        self.positions.get(node).copied().flatten()
    }

    fn push(&mut self, node: usize, distance: Option<W>) {
        let slot = self.heap.len();
        self.heap.push((node, distance));
        self.positions[node] = Some(slot);
        self.sift_up(slot);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if precedes(&self.heap[slot], &self.heap[parent]) {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && precedes(&self.heap[left], &self.heap[smallest]) {
                smallest = left;
            }
            if right < len && precedes(&self.heap[right], &self.heap[smallest]) {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].0] = Some(a);
        self.positions[self.heap[b].0] = Some(b);
    }
}

/// Strict `(distance, node)` ordering with `None` as infinity
fn precedes<W: Weight>(a: &FrontierEntry<W>, b: &FrontierEntry<W>) -> bool {
    match (a.1, b.1) {
        (Some(da), Some(db)) => (da, a.0) < (db, b.0),
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => a.0 < b.0,
    }
}
