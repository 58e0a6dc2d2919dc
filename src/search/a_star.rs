use super::*;
use crate::{node_id::node_id_map_with_cap, Graph, Path};

/// Searches a Graph for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Same as [`find_path_with_config`] with the default [`SearchConfig`].
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::prelude::*;
/// // A --1--> B --1--> C
/// //  \______5_______/^
/// let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
///
/// let path = find_path(0, 2, &graph, &ZeroHeuristic).unwrap();
///
/// assert_eq!(path, vec![0, 1]);
/// assert_eq!(path.cost(), 2.0);
/// assert_eq!(path.nodes(&graph), vec![0, 1, 2]);
/// ```
///
/// Searching from a Node to itself always succeeds with an empty Path:
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_node();
///
/// let path = find_path(a, a, &graph, &ZeroHeuristic).unwrap();
/// assert!(path.is_empty());
/// assert_eq!(path.cost(), 0.0);
/// ```
pub fn find_path<G, H>(
    start: NodeID,
    goal: NodeID,
    graph: &G,
    heuristic: &H,
) -> Result<Path<EdgeID>, SearchError>
where
    G: Graph + ?Sized,
    H: Heuristic + ?Sized,
{
    find_path_with_config(start, goal, graph, heuristic, SearchConfig::default())
}

/// Searches a Graph for the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// ## Arguments
/// - `start` - the starting Node
/// - `goal` - the Node that this function is supposed to search for
/// - `graph` - the Graph to search. See [`Graph`]
/// - `heuristic` - the Heuristic of the A* Algorithm. See [`Heuristic`]
/// - `config` - options for this Search. See [`SearchConfig`]
///
/// ## Returns
/// The Edges of the cheapest Path, **in the order they are traversed**: the first Edge starts at
/// `start` and the last Edge ends at `goal`. Internally the Edges are discovered from the `goal`
/// back to the `start`; iterating the Path in reverse (`path.iter().rev()`) yields that order.
///
/// If `start == goal`, the Path is empty.
///
/// ## Errors
/// - [`SearchError::NoPathExists`] if the `goal` cannot be reached from the `start`. This
///   includes Nodes that are not part of the Graph.
/// - [`SearchError::InvalidInput`] if the Heuristic returns a negative, infinite or NaN
///   estimate or the Graph returns an invalid Edge. The estimate for `start` is checked before
///   anything else is done.
/// - [`SearchError::ExpansionLimit`] if `config.max_expansions` Nodes were expanded without
///   reaching the `goal`.
///
/// ## Optimality
/// The Path is one of the cheapest Paths as long as the Heuristic is admissible (it never
/// overestimates the remaining Cost). With [`ClosedPolicy::Protect`], the Heuristic also has to
/// be consistent. Neither property is checked.
///
/// ## Examples
/// A Heuristic that is admissible, but not consistent, can expand a Node before its cheapest
/// Path is known:
/// ```
/// # use weighted_pathfinding::prelude::*;
/// // S --1--> A --1--> B --3--> G
/// //  \______3_______/^
/// let graph = DirectedGraph::from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 3.0)]);
/// let heuristic = TableHeuristic::new(3, vec![0.0, 4.0, 0.0, 0.0]);
///
/// let reopen = find_path_with_config(0, 3, &graph, &heuristic, SearchConfig::default());
/// assert_eq!(reopen.unwrap().cost(), 5.0);
///
/// let protect = find_path_with_config(0, 3, &graph, &heuristic, SearchConfig::CONSISTENT);
/// assert_eq!(protect.unwrap().cost(), 6.0);
/// ```
pub fn find_path_with_config<G, H>(
    start: NodeID,
    goal: NodeID,
    graph: &G,
    heuristic: &H,
    config: SearchConfig,
) -> Result<Path<EdgeID>, SearchError>
where
    G: Graph + ?Sized,
    H: Heuristic + ?Sized,
{
    timed!(
        "A* search",
        a_star_search(start, goal, graph, heuristic, config)
    )
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(not(feature = "log"), allow(dead_code))]
struct SearchStats {
    expansions: usize,
    reopened: usize,
    stale: usize,
}

fn a_star_search<G, H>(
    start: NodeID,
    goal: NodeID,
    graph: &G,
    heuristic: &H,
    config: SearchConfig,
) -> Result<Path<EdgeID>, SearchError>
where
    G: Graph + ?Sized,
    H: Heuristic + ?Sized,
{
    let start_record = NodeRecord::start(start, checked_estimate(heuristic, start, goal)?);

    let mut records = node_id_map_with_cap(config.size_hint);
    let mut open = OpenSet::with_capacity(config.size_hint / 2);
    open.push(&start_record);
    records.insert(start, start_record);

    let mut stats = SearchStats::default();
    let mut outgoing = vec![];

    while let Some(entry) = open.pop() {
        let current = match records.get(&entry.node) {
            Some(record) if record.is_current(&entry) => *record,
            _ => {
                stats.stale += 1;
                continue;
            }
        };

        if current.node == goal {
            debug_log!(
                "found Path from {} to {} (Cost {}) after {:?}",
                start,
                goal,
                current.cost_so_far,
                stats
            );
            return Ok(reconstruct_path(start, &current, graph, &records));
        }

        if let Some(max_expansions) = config.max_expansions {
            if stats.expansions >= max_expansions {
                debug_log!("giving up on {} -> {} after {:?}", start, goal, stats);
                return Err(SearchError::ExpansionLimit {
                    expansions: stats.expansions,
                });
            }
        }
        stats.expansions += 1;

        outgoing.clear();
        graph.outgoing_edges(current.node, &mut outgoing);

        for &edge_id in outgoing.iter() {
            let edge = graph.edge(edge_id);
            check_edge(edge_id, edge, current.node)?;

            let sink = edge.sink;
            let candidate_cost = current.cost_so_far + edge.cost;

            if let Some(record) = records.get_mut(&sink) {
                if record.cost_so_far <= candidate_cost {
                    continue;
                }
                if record.state == RecordState::Closed {
                    if config.closed_policy == ClosedPolicy::Protect {
                        continue;
                    }
                    stats.reopened += 1;
                }
                let estimate = checked_estimate(heuristic, sink, goal)?;
                record.relax(edge_id, candidate_cost, candidate_cost + estimate);
                open.push(record);
            } else {
                let estimate = checked_estimate(heuristic, sink, goal)?;
                let record =
                    NodeRecord::new(sink, edge_id, candidate_cost, candidate_cost + estimate);
                open.push(&record);
                records.insert(sink, record);
            }
        }

        if let Some(record) = records.get_mut(&current.node) {
            record.close();
        }
    }

    debug_log!("no Path from {} to {}: {:?}", start, goal, stats);
    Err(SearchError::NoPathExists)
}
