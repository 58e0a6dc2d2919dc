#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path between two Nodes of a directed, weighted Graph.
//!
//! ## Introduction
//! The Search implemented here is the classic [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm):
//! starting at the `start` Node, the Node with the lowest estimated total Cost is expanded until
//! the `goal` is reached. The estimate is the Cost of the best known Path to a Node plus a
//! [`Heuristic`] guess of the remaining Cost to the `goal`.
//!
//! As long as the Heuristic never overestimates the remaining Cost (it is *admissible*), the
//! resulting Path is guaranteed to be one of the cheapest Paths. A Heuristic that always returns
//! `0` ([`ZeroHeuristic`]) turns the Search into Dijkstra's Algorithm, which is always correct but
//! expands more Nodes.
//!
//! The crate does not care how the Graph is stored. Anything implementing [`Graph`] can be
//! searched, and [`DirectedGraph`] is provided as a ready-made implementation.
//!
//! ## Examples
//! Creating a Graph and searching it:
//! ```
//! use weighted_pathfinding::prelude::*;
//!
//! // A --1--> B --1--> C
//! //  \______5_______/^
//! let mut graph = DirectedGraph::new();
//! let (a, b, c) = (graph.add_node(), graph.add_node(), graph.add_node());
//! let a_b = graph.add_edge(a, b, 1.0);
//! let b_c = graph.add_edge(b, c, 1.0);
//! graph.add_edge(a, c, 5.0);
//!
//! let path = find_path(a, c, &graph, &ZeroHeuristic).unwrap();
//!
//! // the Edges are returned in the order they are traversed
//! assert_eq!(path, vec![a_b, b_c]);
//! assert_eq!(path.cost(), 2.0);
//! ```
//!
//! If the `goal` cannot be reached, an Error is returned:
//! ```
//! # use weighted_pathfinding::prelude::*;
//! let mut graph = DirectedGraph::new();
//! let (a, b) = (graph.add_node(), graph.add_node());
//! graph.add_edge(a, b, 5.0);
//!
//! assert_eq!(find_path(b, a, &graph, &ZeroHeuristic), Err(SearchError::NoPathExists));
//! ```
//!
//! ### Configuration
//! [`find_path_with_config`] takes a [`SearchConfig`] to control how the Search treats Nodes
//! that were already expanded and to limit how much work a single Search may do:
//! ```
//! # use weighted_pathfinding::prelude::*;
//! # let mut graph = DirectedGraph::new();
//! # let (a, b) = (graph.add_node(), graph.add_node());
//! # graph.add_edge(a, b, 5.0);
//! let config = SearchConfig {
//!     closed_policy: ClosedPolicy::Protect,
//!     ..SearchConfig::with_max_expansions(100)
//! };
//! let path = find_path_with_config(a, b, &graph, &ZeroHeuristic, config).unwrap();
//! assert_eq!(path.cost(), 5.0);
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): [`find_paths`] distributes independent Searches over a
//!   [rayon](https://docs.rs/rayon) thread pool.
//! - `log`: emits timings and Search statistics through the [log](https://docs.rs/log) crate.

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

/// The Type used to reference an Edge in the Graph
pub type EdgeID = usize;

#[macro_use]
mod utils;

pub mod node_id;

mod graph;
pub use self::graph::{DirectedGraph, Edge, Graph};

mod heuristic;
pub use self::heuristic::{EuclideanHeuristic, Heuristic, TableHeuristic, ZeroHeuristic};

mod path;
pub use self::path::{Cost, Path};

mod search;
pub use self::search::{
    dijkstra_search, find_path, find_path_with_config, find_paths, ClosedPolicy, InvalidInput,
    SearchConfig, SearchError,
};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        dijkstra_search, find_path, find_path_with_config, find_paths, ClosedPolicy, Cost,
        DirectedGraph, Edge, EdgeID, EuclideanHeuristic, Graph, Heuristic, InvalidInput, NodeID,
        Path, SearchConfig, SearchError, TableHeuristic, ZeroHeuristic,
    };
}
