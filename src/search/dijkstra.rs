use super::*;
use crate::node_id::{node_id_map_with_cap, node_id_set_with_cap, NodeIDMap};

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// This function can be used to search for several Goals and will calculate the cheapest Path
/// to every provided Goal. It stops as soon as it has the cheapest Path to every Goal, or when
/// all reachable Nodes have been expanded.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use weighted_pathfinding::prelude::*;
/// // A     B--2->E
/// // |\
/// // 1 9
/// // |  \
/// // v   v
/// // C-6->D
/// let (a, b, c, d, e) = (0, 1, 2, 3, 4);
/// let graph = DirectedGraph::from_edges(5, [(a, c, 1.0), (a, d, 9.0), (c, d, 6.0), (b, e, 2.0)]);
///
/// let result = dijkstra_search(a, &[d, e], &graph).unwrap();
///
/// // if the Goal is reachable, the Path is added to the Map
/// let path = &result[&d];
/// assert_eq!(path.nodes(&graph), vec![a, c, d]);
/// assert_eq!(path.cost(), 7.0);
///
/// // if the Goal is not reachable, there won't be an entry in the Map
/// assert!(!result.contains_key(&e));
/// ```
///
/// ## Returns
/// A Map with all reachable Goals as the Key and the cheapest Path to reach that Goal as Value.
/// The Paths are ordered like the ones from [`find_path`](crate::find_path), from `start` to the Goal.
/// If `start` is one of the Goals, it maps to an empty Path.
///
/// ## Errors
/// [`SearchError::InvalidInput`] if the Graph returns an invalid Edge.
pub fn dijkstra_search<G: Graph + ?Sized>(
    start: NodeID,
    goals: &[NodeID],
    graph: &G,
) -> Result<NodeIDMap<Path<EdgeID>>, SearchError> {
    timed!("Dijkstra search", search(start, goals, graph))
}

fn search<G: Graph + ?Sized>(
    start: NodeID,
    goals: &[NodeID],
    graph: &G,
) -> Result<NodeIDMap<Path<EdgeID>>, SearchError> {
    let mut remaining_goals = node_id_set_with_cap(goals.len());
    remaining_goals.extend(goals.iter().copied());
    if remaining_goals.is_empty() {
        return Ok(NodeIDMap::default());
    }

    // every Goal gets a record, and usually a few Nodes around it
    let size_hint = SearchConfig::default().size_hint.max(4 * goals.len());
    let mut records = node_id_map_with_cap(size_hint);
    let mut open = OpenSet::with_capacity(size_hint / 2);
    let start_record = NodeRecord::start(start, 0.0);
    open.push(&start_record);
    records.insert(start, start_record);

    let mut reached = Vec::with_capacity(remaining_goals.len());
    let mut outgoing = vec![];

    while let Some(entry) = open.pop() {
        let current = match records.get(&entry.node) {
            Some(record) if record.is_current(&entry) => *record,
            _ => continue,
        };

        if remaining_goals.remove(&current.node) {
            reached.push(current.node);
            if remaining_goals.is_empty() {
                break;
            }
        }

        outgoing.clear();
        graph.outgoing_edges(current.node, &mut outgoing);

        for &edge_id in outgoing.iter() {
            let edge = graph.edge(edge_id);
            check_edge(edge_id, edge, current.node)?;

            let other_cost = current.cost_so_far + edge.cost;

            if let Some(record) = records.get_mut(&edge.sink) {
                // without a Heuristic, expanded Nodes are final
                if record.state == RecordState::Closed || record.cost_so_far <= other_cost {
                    continue;
                }
                record.relax(edge_id, other_cost, other_cost);
                open.push(record);
            } else {
                let record = NodeRecord::new(edge.sink, edge_id, other_cost, other_cost);
                open.push(&record);
                records.insert(edge.sink, record);
            }
        }

        if let Some(record) = records.get_mut(&current.node) {
            record.close();
        }
    }

    debug_log!(
        "Dijkstra from {} reached {} of {} Goals, visiting {} Nodes",
        start,
        reached.len(),
        goals.len(),
        records.len()
    );

    let mut goal_data = node_id_map_with_cap(reached.len());
    for goal in reached {
        let path = reconstruct_path(start, &records[&goal], graph, &records);
        goal_data.insert(goal, path);
    }

    Ok(goal_data)
}
