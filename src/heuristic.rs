//! The Heuristics guiding the A* Search.

use crate::{Cost, NodeID};

/// Gives an estimate of how expensive it is to reach `goal` from `node`.
///
/// The estimate has to be non-negative and finite. For the resulting Path to be one of the
/// cheapest Paths, the estimate must never be larger than the actual remaining Cost (the
/// Heuristic is *admissible*). This is not checked: an overestimating Heuristic still terminates,
/// but may return a more expensive Path.
///
/// If there is no proper way of calculating the remaining Cost, use [`ZeroHeuristic`]. This
/// increases the time it takes to calculate the Path, but the result is always correct.
///
/// Any `Fn(NodeID, NodeID) -> Cost` can be used as a Heuristic:
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let graph = DirectedGraph::from_edges(3, [(0, 1, 2.0), (1, 2, 2.0)]);
/// let remaining: [Cost; 3] = [4.0, 2.0, 0.0];
///
/// let heuristic = |node: NodeID, _goal: NodeID| remaining[node as usize];
/// let path = find_path(0, 2, &graph, &heuristic).unwrap();
/// assert_eq!(path.cost(), 4.0);
/// ```
pub trait Heuristic {
    /// the estimated Cost of the cheapest Path from `node` to `goal`
    fn estimate(&self, node: NodeID, goal: NodeID) -> Cost;
}

impl<F: Fn(NodeID, NodeID) -> Cost> Heuristic for F {
    fn estimate(&self, node: NodeID, goal: NodeID) -> Cost {
        self(node, goal)
    }
}

/// A Heuristic that always estimates `0`, turning A* into Dijkstra's Algorithm
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _: NodeID, _: NodeID) -> Cost {
        0.0
    }
}

/// A Heuristic for Graphs whose Nodes have a position in the plane.
///
/// The estimate is the straight-line distance between the two positions, multiplied by `scale`.
/// This is admissible as long as no Edge is cheaper than `scale` times the distance it covers.
/// Nodes without a position are estimated at `0`.
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let heuristic = EuclideanHeuristic::new(vec![(0.0, 0.0), (3.0, 4.0)]);
///
/// assert_eq!(heuristic.estimate(0, 1), 5.0);
/// assert_eq!(heuristic.with_scale(0.5).estimate(1, 0), 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EuclideanHeuristic {
    positions: Vec<(f32, f32)>,
    scale: Cost,
}

impl EuclideanHeuristic {
    /// Creates a new EuclideanHeuristic. `positions[id]` is the position of the Node `id`.
    pub fn new(positions: Vec<(f32, f32)>) -> EuclideanHeuristic {
        EuclideanHeuristic {
            positions,
            scale: 1.0,
        }
    }

    /// Creates a new EuclideanHeuristic by asking `localize` for the position of the first
    /// `node_count` Nodes.
    ///
    /// `localize` is usually the inverse of whatever scheme mapped the positions to Nodes.
    ///
    /// ## Panics
    /// If `node_count` does not fit into a [`NodeID`].
    #[track_caller]
    pub fn from_fn(node_count: usize, localize: impl Fn(NodeID) -> (f32, f32)) -> Self {
        let Ok(node_count) = NodeID::try_from(node_count) else {
            panic!("{} Nodes do not fit into a NodeID", node_count);
        };
        EuclideanHeuristic::new((0..node_count).map(localize).collect())
    }

    /// Sets the factor the distance is multiplied with.
    ///
    /// ## Panics
    /// If `scale` is negative, infinite or NaN.
    #[track_caller]
    pub fn with_scale(mut self, scale: Cost) -> Self {
        assert!(
            scale.is_finite() && scale >= 0.0,
            "scale has to be finite and non-negative, got {}",
            scale
        );
        self.scale = scale;
        self
    }
}

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, node: NodeID, goal: NodeID) -> Cost {
        match (
            self.positions.get(node as usize),
            self.positions.get(goal as usize),
        ) {
            (Some(&(x1, y1)), Some(&(x2, y2))) => (x2 - x1).hypot(y2 - y1) * self.scale,
            _ => 0.0,
        }
    }
}

/// A Heuristic with precomputed estimates towards a single goal.
///
/// Asking for any other goal, or for a Node without an entry, estimates `0`.
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let heuristic = TableHeuristic::new(2, vec![4.0, 1.5]);
///
/// assert_eq!(heuristic.estimate(0, 2), 4.0);
/// assert_eq!(heuristic.estimate(5, 2), 0.0);
/// assert_eq!(heuristic.estimate(0, 1), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TableHeuristic {
    goal: NodeID,
    estimates: Vec<Cost>,
}

impl TableHeuristic {
    /// Creates a new TableHeuristic where `estimates[id]` is the estimate from `id` to `goal`
    pub fn new(goal: NodeID, estimates: Vec<Cost>) -> TableHeuristic {
        TableHeuristic { goal, estimates }
    }

    /// the goal the estimates lead to
    pub fn goal(&self) -> NodeID {
        self.goal
    }
}

impl Heuristic for TableHeuristic {
    fn estimate(&self, node: NodeID, goal: NodeID) -> Cost {
        if goal != self.goal {
            return 0.0;
        }
        self.estimates.get(node as usize).copied().unwrap_or(0.0)
    }
}
