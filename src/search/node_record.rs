use crate::{Cost, EdgeID, NodeID};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RecordState {
    Open,
    Closed,
}

/// The bookkeeping of a single Node during one Search.
///
/// Every Node has at most one record, so it is either open or closed, never both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NodeRecord {
    pub node: NodeID,
    /// `None` only for the start
    pub incoming_edge: Option<EdgeID>,
    pub cost_so_far: Cost,
    pub estimated_total_cost: Cost,
    pub state: RecordState,
    /// bumped on every relaxation, invalidating all older entries in the [`OpenSet`]
    pub generation: u32,
}

impl NodeRecord {
    pub fn start(node: NodeID, estimate: Cost) -> NodeRecord {
        NodeRecord {
            node,
            incoming_edge: None,
            cost_so_far: 0.0,
            estimated_total_cost: estimate,
            state: RecordState::Open,
            generation: 0,
        }
    }

    pub fn new(node: NodeID, incoming_edge: EdgeID, cost: Cost, estimated_total: Cost) -> Self {
        NodeRecord {
            node,
            incoming_edge: Some(incoming_edge),
            cost_so_far: cost,
            estimated_total_cost: estimated_total,
            state: RecordState::Open,
            generation: 0,
        }
    }

    /// Replaces the best known Path to this Node. Closed records are opened again.
    pub fn relax(&mut self, incoming_edge: EdgeID, cost: Cost, estimated_total: Cost) {
        debug_assert!(cost < self.cost_so_far);
        self.incoming_edge = Some(incoming_edge);
        self.cost_so_far = cost;
        self.estimated_total_cost = estimated_total;
        self.state = RecordState::Open;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn close(&mut self) {
        self.state = RecordState::Closed;
    }

    /// `false` if `entry` was superseded by a relaxation or this record was already expanded
    pub fn is_current(&self, entry: &OpenEntry) -> bool {
        self.state == RecordState::Open && self.generation == entry.generation
    }
}

/// An Element of the [`OpenSet`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub node: NodeID,
    pub estimated_total_cost: Cost,
    pub generation: u32,
    sequence: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for OpenEntry {
    /// lowest Cost first, then first in first out
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.estimated_total_cost
            .total_cmp(&self.estimated_total_cost)
            .then_with(|| rhs.sequence.cmp(&self.sequence))
    }
}

/// The frontier of the Search: a min-heap on the estimated total Cost.
///
/// Relaxing a Node pushes a new entry instead of updating the old one. The old entry is
/// recognized as stale by its generation when it is popped (see [`NodeRecord::is_current`]).
#[derive(Debug)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_sequence: u64,
}

impl OpenSet {
    pub fn with_capacity(capacity: usize) -> OpenSet {
        OpenSet {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, record: &NodeRecord) {
        self.heap.push(OpenEntry {
            node: record.node,
            estimated_total_cost: record.estimated_total_cost,
            generation: record.generation,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }
}
