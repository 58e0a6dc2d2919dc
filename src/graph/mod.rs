use crate::{Cost, EdgeID, NodeID};

mod directed_graph;
pub use directed_graph::DirectedGraph;

/// A directed, weighted Edge between two Nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// the Node this Edge starts at
    pub source: NodeID,
    /// the Node this Edge leads to
    pub sink: NodeID,
    /// the Cost of walking along this Edge. Never negative.
    pub cost: Cost,
}

impl Edge {
    /// creates a new Edge from `source` to `sink`
    pub fn new(source: NodeID, sink: NodeID, cost: Cost) -> Edge {
        Edge { source, sink, cost }
    }
}

/// Defines the Graph that is searched.
///
/// The Search never asks for the Nodes themselves, only for the Edges leaving a Node. This allows
/// the user to store the Graph in any format they want, as long as every Edge can be referenced
/// by a stable [`EdgeID`] for the duration of a Search.
///
/// [`DirectedGraph`] is the implementation provided by this crate.
pub trait Graph {
    /// Appends the IDs of all Edges whose `source` is `node` to `out`.
    ///
    /// Unknown Nodes and Nodes without outgoing Edges append nothing. The result has to be the
    /// same every time this is called during a single Search.
    fn outgoing_edges(&self, node: NodeID, out: &mut Vec<EdgeID>);

    /// Returns the Edge referenced by `id`.
    ///
    /// Only called with IDs previously returned from [`outgoing_edges`](Graph::outgoing_edges),
    /// so implementations may panic on anything else.
    fn edge(&self, id: EdgeID) -> &Edge;
}

impl<G: Graph + ?Sized> Graph for &G {
    fn outgoing_edges(&self, node: NodeID, out: &mut Vec<EdgeID>) {
        (**self).outgoing_edges(node, out)
    }
    fn edge(&self, id: EdgeID) -> &Edge {
        (**self).edge(id)
    }
}
