use crate::{node_id::NodeIDMap, Cost, Edge, EdgeID, Graph, Heuristic, NodeID, Path};
use std::fmt;

mod config;
pub use config::{ClosedPolicy, SearchConfig};

mod node_record;
use node_record::{NodeRecord, OpenSet, RecordState};

mod a_star;
pub use a_star::{find_path, find_path_with_config};

mod dijkstra;
pub use dijkstra::dijkstra_search;

mod batch;
pub use batch::find_paths;

/// The ways a Search can fail
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchError {
    /// The Graph or the Heuristic returned something that cannot be searched.
    /// No Path is returned, even if parts of the Graph were already expanded.
    InvalidInput(InvalidInput),
    /// All Nodes reachable from the start were expanded without finding the goal.
    NoPathExists,
    /// The Search expanded [`SearchConfig::max_expansions`] Nodes without finding the goal.
    ExpansionLimit {
        /// the number of Nodes that were expanded
        expansions: usize,
    },
}

/// Describes why the input of a Search was rejected
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidInput {
    /// The Heuristic returned a negative, infinite or NaN estimate.
    NegativeEstimate {
        /// the Node that was estimated
        node: NodeID,
        /// the returned estimate
        estimate: Cost,
    },
    /// The Graph returned an Edge with a negative, infinite or NaN Cost.
    NegativeEdgeCost {
        /// the offending Edge
        edge: EdgeID,
        /// its Cost
        cost: Cost,
    },
    /// The Graph returned an Edge that does not start at the Node that was asked for.
    ForeignEdge {
        /// the offending Edge
        edge: EdgeID,
        /// the Node whose outgoing Edges were requested
        expected_source: NodeID,
    },
}

impl From<InvalidInput> for SearchError {
    fn from(invalid: InvalidInput) -> SearchError {
        SearchError::InvalidInput(invalid)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::InvalidInput(invalid) => write!(fmt, "invalid input: {}", invalid),
            SearchError::NoPathExists => write!(fmt, "the goal is not reachable from the start"),
            SearchError::ExpansionLimit { expansions } => {
                write!(fmt, "gave up after expanding {} Nodes", expansions)
            }
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::NegativeEstimate { node, estimate } => write!(
                fmt,
                "Heuristic estimated {} for Node {}, expected a finite non-negative Cost",
                estimate, node
            ),
            InvalidInput::NegativeEdgeCost { edge, cost } => write!(
                fmt,
                "Edge {} has Cost {}, expected a finite non-negative Cost",
                edge, cost
            ),
            InvalidInput::ForeignEdge {
                edge,
                expected_source,
            } => write!(
                fmt,
                "Edge {} was listed as outgoing Edge of Node {}, but starts somewhere else",
                edge, expected_source
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidInput(invalid) => Some(invalid),
            _ => None,
        }
    }
}

fn is_valid_cost(cost: Cost) -> bool {
    cost.is_finite() && cost >= 0.0
}

/// asks `heuristic` for an estimate and rejects anything that is not a valid Cost
fn checked_estimate<H: Heuristic + ?Sized>(
    heuristic: &H,
    node: NodeID,
    goal: NodeID,
) -> Result<Cost, InvalidInput> {
    let estimate = heuristic.estimate(node, goal);
    if is_valid_cost(estimate) {
        Ok(estimate)
    } else {
        Err(InvalidInput::NegativeEstimate { node, estimate })
    }
}

/// rejects Edges that do not belong to `source` or have an invalid Cost
fn check_edge(id: EdgeID, edge: &Edge, source: NodeID) -> Result<(), InvalidInput> {
    if edge.source != source {
        return Err(InvalidInput::ForeignEdge {
            edge: id,
            expected_source: source,
        });
    }
    if !is_valid_cost(edge.cost) {
        return Err(InvalidInput::NegativeEdgeCost {
            edge: id,
            cost: edge.cost,
        });
    }
    Ok(())
}

/// Follows the incoming Edges from `goal` back to `start`.
///
/// The Edges are collected goal first and handed out as a reversed Path, so that iteration
/// starts at `start`.
fn reconstruct_path<G: Graph + ?Sized>(
    start: NodeID,
    goal: &NodeRecord,
    graph: &G,
    records: &NodeIDMap<NodeRecord>,
) -> Path<EdgeID> {
    let mut edges = vec![];
    let mut current = goal;

    while current.node != start {
        let Some(edge_id) = current.incoming_edge else {
            break;
        };
        edges.push(edge_id);
        current = &records[&graph.edge(edge_id).source];
    }

    Path::new(edges, goal.cost_so_far).reversed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display() {
        assert_eq!(
            SearchError::NoPathExists.to_string(),
            "the goal is not reachable from the start"
        );
        assert_eq!(
            SearchError::ExpansionLimit { expansions: 3 }.to_string(),
            "gave up after expanding 3 Nodes"
        );
        let invalid = SearchError::from(InvalidInput::NegativeEdgeCost { edge: 2, cost: -1.0 });
        assert_eq!(
            invalid.to_string(),
            "invalid input: Edge 2 has Cost -1, expected a finite non-negative Cost"
        );
        assert!(invalid.source().is_some());
        assert!(SearchError::NoPathExists.source().is_none());
    }

    #[test]
    fn estimates() {
        assert_eq!(checked_estimate(&|_: NodeID, _: NodeID| -> Cost { 1.5 }, 0, 1), Ok(1.5));
        assert!(matches!(
            checked_estimate(&|_: NodeID, _: NodeID| Cost::NAN, 4, 1),
            Err(InvalidInput::NegativeEstimate { node: 4, .. })
        ));
        assert!(matches!(
            checked_estimate(&|_: NodeID, _: NodeID| -> Cost { -0.5 }, 4, 1),
            Err(InvalidInput::NegativeEstimate { node: 4, .. })
        ));
    }

    #[test]
    fn edges() {
        assert_eq!(check_edge(0, &Edge::new(1, 2, 0.0), 1), Ok(()));
        assert_eq!(
            check_edge(0, &Edge::new(1, 2, 1.0), 2),
            Err(InvalidInput::ForeignEdge {
                edge: 0,
                expected_source: 2
            })
        );
        assert_eq!(
            check_edge(5, &Edge::new(1, 2, Cost::INFINITY), 1),
            Err(InvalidInput::NegativeEdgeCost {
                edge: 5,
                cost: Cost::INFINITY
            })
        );
    }
}
