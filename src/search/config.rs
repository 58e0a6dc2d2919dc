/// How the Search treats a Node that was already expanded when a cheaper Path to it turns up.
///
/// With a *consistent* Heuristic (`estimate(a) <= cost(a -> b) + estimate(b)` for every Edge),
/// an expanded Node never becomes cheaper, and both policies return the same Path.
/// A Heuristic that is only *admissible* can however expand a Node too early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClosedPolicy {
    /// (default) Expanded Nodes are opened again if they can be reached more cheaply.
    ///
    /// The resulting Path is optimal for every admissible Heuristic.
    #[default]
    Reopen,
    /// Expanded Nodes are never touched again.
    ///
    /// Saves some work, but the resulting Path is only guaranteed to be optimal for consistent
    /// Heuristics.
    Protect,
}

/// Options for configuring a single Search
///
/// Default options:
/// ```
/// # use weighted_pathfinding::{ClosedPolicy, SearchConfig};
/// assert_eq!(
///     SearchConfig {
///         closed_policy: ClosedPolicy::Reopen,
///         size_hint: 64,
///         max_expansions: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// What happens to expanded Nodes that turn out to be reachable more cheaply.
    /// See [`ClosedPolicy`]. (defaults to [`ClosedPolicy::Reopen`])
    pub closed_policy: ClosedPolicy,
    /// The number of Nodes the Search is expected to visit (defaults to `64`).
    ///
    /// Only used to preallocate memory, the Search works with any value.
    pub size_hint: usize,
    /// `Some(n)`: abort the Search with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
    /// instead of expanding more than `n` Nodes.
    ///
    /// `None` (default): search until the goal is found or all reachable Nodes were expanded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// a SearchConfig for consistent Heuristics, which never reopens expanded Nodes
    ///
    /// Values:
    /// ```
    /// # use weighted_pathfinding::{ClosedPolicy, SearchConfig};
    /// assert_eq!(
    ///     SearchConfig {
    ///         closed_policy: ClosedPolicy::Protect,
    ///         size_hint: 64,
    ///         max_expansions: None,
    ///     },
    ///     SearchConfig::CONSISTENT
    /// );
    /// ```
    pub const CONSISTENT: SearchConfig = SearchConfig {
        closed_policy: ClosedPolicy::Protect,
        size_hint: 64,
        max_expansions: None,
    };

    /// the default SearchConfig, but with `max_expansions` set to `Some(max_expansions)`
    pub const fn with_max_expansions(max_expansions: usize) -> SearchConfig {
        SearchConfig {
            closed_policy: ClosedPolicy::Reopen,
            size_hint: 64,
            max_expansions: Some(max_expansions),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            closed_policy: ClosedPolicy::Reopen,
            size_hint: 64,
            max_expansions: None,
        }
    }
}
