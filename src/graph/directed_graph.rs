use super::{Edge, Graph};
use crate::{Cost, EdgeID, NodeID};

/// A [`Graph`] that owns its Nodes and Edges.
///
/// Edges are stored in an arena, so an [`EdgeID`] stays valid until that exact Edge is removed,
/// no matter how many other Edges are added or removed in the meantime.
/// Nodes are numbered densely in the order they are added, starting at `0`.
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// let edge = graph.add_edge(a, b, 2.5);
///
/// assert_eq!(graph.edge(edge), &Edge::new(a, b, 2.5));
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    edges: slab::Slab<Edge>,
    outgoing: Vec<Vec<EdgeID>>,
}

impl DirectedGraph {
    /// Creates an empty Graph
    pub fn new() -> DirectedGraph {
        DirectedGraph::default()
    }

    /// Creates an empty Graph with space for `nodes` Nodes and `edges` Edges
    pub fn with_capacity(nodes: usize, edges: usize) -> DirectedGraph {
        DirectedGraph {
            edges: slab::Slab::with_capacity(edges),
            outgoing: Vec::with_capacity(nodes),
        }
    }

    /// Creates a Graph with `node_count` Nodes and the given `(source, sink, cost)` Edges.
    ///
    /// The [`EdgeID`]s are assigned in iteration order, starting at `0`.
    /// ## Examples
    /// ```
    /// # use weighted_pathfinding::prelude::*;
    /// let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 4.0)]);
    ///
    /// assert_eq!(graph.edge(1), &Edge::new(1, 2, 4.0));
    /// ```
    #[track_caller]
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (NodeID, NodeID, Cost)>,
    ) -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        for _ in 0..node_count {
            graph.add_node();
        }
        for (source, sink, cost) in edges {
            graph.add_edge(source, sink, cost);
        }
        graph
    }

    /// Adds a new Node without any Edges and returns its ID
    #[track_caller]
    pub fn add_node(&mut self) -> NodeID {
        let Ok(id) = NodeID::try_from(self.outgoing.len()) else {
            panic!("Graph is full, all NodeIDs are taken");
        };
        self.outgoing.push(Vec::new());
        id
    }

    /// Adds an Edge from `source` to `sink` and returns its ID.
    ///
    /// ## Panics
    /// If either Node does not exist or if `cost` is negative, infinite or NaN.
    #[track_caller]
    pub fn add_edge(&mut self, source: NodeID, sink: NodeID, cost: Cost) -> EdgeID {
        assert!(self.contains_node(source), "Invalid source Node {}", source);
        assert!(self.contains_node(sink), "Invalid sink Node {}", sink);
        assert!(
            cost.is_finite() && cost >= 0.0,
            "Edge Cost has to be finite and non-negative, got {}",
            cost
        );

        let id = self.edges.insert(Edge::new(source, sink, cost));
        self.outgoing[source as usize].push(id);
        id
    }

    /// Removes an Edge, returning it if it existed.
    ///
    /// The IDs of all other Edges remain valid.
    pub fn remove_edge(&mut self, id: EdgeID) -> Option<Edge> {
        if !self.edges.contains(id) {
            return None;
        }
        let edge = self.edges.remove(id);
        self.outgoing[edge.source as usize].retain(|&other| other != id);
        Some(edge)
    }

    /// Returns the Edge with the given ID, if it exists
    pub fn get_edge(&self, id: EdgeID) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// The number of Nodes in the Graph
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// The number of Edges in the Graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if `node` was added to this Graph
    pub fn contains_node(&self, node: NodeID) -> bool {
        (node as usize) < self.outgoing.len()
    }

    /// Iterates over the IDs of all Nodes
    pub fn nodes(&self) -> impl Iterator<Item = NodeID> {
        0..self.outgoing.len() as NodeID
    }

    /// Iterates over all Edges together with their IDs
    pub fn edges(&self) -> impl Iterator<Item = (EdgeID, &Edge)> + '_ {
        self.edges.iter()
    }
}

impl Graph for DirectedGraph {
    fn outgoing_edges(&self, node: NodeID, out: &mut Vec<EdgeID>) {
        if let Some(edges) = self.outgoing.get(node as usize) {
            out.extend_from_slice(edges);
        }
    }

    #[track_caller]
    fn edge(&self, id: EdgeID) -> &Edge {
        &self.edges[id]
    }
}
