use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one [`find_path_with_config`] for every `(start, goal)` pair in `queries`.
///
/// The results are returned in the same order as the queries. The Searches are independent of
/// each other and only read from `graph` and `heuristic`, so with the `parallel` feature enabled
/// they are spread over the [rayon](https://docs.rs/rayon) thread pool.
///
/// ## Examples
/// ```
/// # use weighted_pathfinding::prelude::*;
/// let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
///
/// let results = find_paths(&[(0, 2), (2, 0), (1, 1)], &graph, &ZeroHeuristic, Default::default());
///
/// assert_eq!(results[0].as_ref().unwrap().cost(), 2.0);
/// assert_eq!(results[1], Err(SearchError::NoPathExists));
/// assert!(results[2].as_ref().unwrap().is_empty());
/// ```
pub fn find_paths<G, H>(
    queries: &[(NodeID, NodeID)],
    graph: &G,
    heuristic: &H,
    config: SearchConfig,
) -> Vec<Result<Path<EdgeID>, SearchError>>
where
    G: Graph + Sync + ?Sized,
    H: Heuristic + Sync + ?Sized,
{
    let search = |&(start, goal): &(NodeID, NodeID)| {
        find_path_with_config(start, goal, graph, heuristic, config)
    };

    timed!("batch search", {
        #[cfg(feature = "parallel")]
        let results = queries.par_iter().map(search).collect();

        #[cfg(not(feature = "parallel"))]
        let results = queries.iter().map(search).collect();

        results
    })
}
