use nanorand::{Rng, WyRand};
use weighted_pathfinding::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// the sum of the Edge costs along `path`, checking that the Edges are connected
fn walk(graph: &DirectedGraph, start: NodeID, goal: NodeID, path: &Path<EdgeID>) -> Cost {
    let mut current = start;
    let mut cost = 0.0;
    for &id in path {
        let edge = graph.edge(id);
        assert_eq!(edge.source, current, "Path is not connected");
        current = edge.sink;
        cost += edge.cost;
    }
    assert_eq!(current, goal, "Path does not end at the goal");
    cost
}

/// A random Graph with Nodes on a 10x10 grid.
///
/// Edges never cost less than the distance they cover, so the straight-line distance is a
/// consistent Heuristic. Costs are whole numbers to keep the sums exact.
fn random_graph(rng: &mut WyRand, nodes: usize, edges: usize) -> (DirectedGraph, EuclideanHeuristic) {
    let positions: Vec<(f32, f32)> = (0..nodes)
        .map(|_| {
            (
                rng.generate_range(0_u32..10) as f32,
                rng.generate_range(0_u32..10) as f32,
            )
        })
        .collect();

    let mut graph = DirectedGraph::with_capacity(nodes, edges);
    for _ in 0..nodes {
        graph.add_node();
    }
    for _ in 0..edges {
        let source = rng.generate_range(0..nodes as NodeID);
        let sink = rng.generate_range(0..nodes as NodeID);
        let (x1, y1) = positions[source as usize];
        let (x2, y2) = positions[sink as usize];
        let distance = (x2 - x1).hypot(y2 - y1).ceil();
        graph.add_edge(source, sink, distance + rng.generate_range(0_u32..5) as Cost);
    }
    (graph, EuclideanHeuristic::new(positions))
}

#[test]
fn chooses_cheaper_route() {
    init();
    let mut graph = DirectedGraph::new();
    let (a, b, c) = (graph.add_node(), graph.add_node(), graph.add_node());
    let a_b = graph.add_edge(a, b, 1.0);
    let b_c = graph.add_edge(b, c, 1.0);
    let a_c = graph.add_edge(a, c, 5.0);

    let path = find_path(a, c, &graph, &ZeroHeuristic).unwrap();

    assert_eq!(path, vec![a_b, b_c]);
    assert!(!path.iter().any(|&id| id == a_c));
    assert_eq!(path.cost(), 2.0);
    assert_eq!(path.nodes(&graph), vec![a, b, c]);
}

#[test]
fn single_directed_edge() {
    init();
    let mut graph = DirectedGraph::new();
    let (a, b) = (graph.add_node(), graph.add_node());
    let a_b = graph.add_edge(a, b, 5.0);

    let path = find_path(a, b, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(path, vec![a_b]);
    assert_eq!(path.cost(), 5.0);

    assert_eq!(
        find_path(b, a, &graph, &ZeroHeuristic),
        Err(SearchError::NoPathExists)
    );
}

#[test]
fn single_node() {
    init();
    let mut graph = DirectedGraph::new();
    let a = graph.add_node();

    let path = find_path(a, a, &graph, &ZeroHeuristic).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn start_is_goal_everywhere() {
    init();
    let mut rng = WyRand::new_seed(1);
    let (graph, heuristic) = random_graph(&mut rng, 20, 60);

    for node in graph.nodes() {
        let path = find_path(node, node, &graph, &heuristic).unwrap();
        assert!(path.is_empty());
    }
}

#[test]
fn unreachable_goal_terminates() {
    init();
    // two cycles that are not connected
    let graph = DirectedGraph::from_edges(
        6,
        [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 0, 1.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (5, 3, 1.0),
        ],
    );

    for goal in 3..6 {
        assert_eq!(
            find_path(0, goal, &graph, &ZeroHeuristic),
            Err(SearchError::NoPathExists)
        );
    }
}

#[test]
fn optimal_like_dijkstra() {
    init();
    let mut rng = WyRand::new_seed(42);

    for _ in 0..20 {
        let (graph, heuristic) = random_graph(&mut rng, 30, 90);

        for start in graph.nodes().step_by(3) {
            let goals: Vec<NodeID> = graph.nodes().collect();
            let reference = dijkstra_search(start, &goals, &graph).unwrap();

            for goal in graph.nodes() {
                let with_heuristic = find_path(start, goal, &graph, &heuristic);
                let without_heuristic = find_path(start, goal, &graph, &ZeroHeuristic);
                let consistent = find_path_with_config(
                    start,
                    goal,
                    &graph,
                    &heuristic,
                    SearchConfig::CONSISTENT,
                );

                match reference.get(&goal) {
                    Some(expected) => {
                        let expected_cost = walk(&graph, start, goal, expected);
                        assert_eq!(expected_cost, expected.cost());

                        for result in [with_heuristic, without_heuristic, consistent] {
                            let path = result.unwrap();
                            assert_eq!(walk(&graph, start, goal, &path), path.cost());
                            assert_eq!(path.cost(), expected_cost);
                        }
                    }
                    None => {
                        for result in [with_heuristic, without_heuristic, consistent] {
                            assert_eq!(result, Err(SearchError::NoPathExists));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn optimal_with_inconsistent_heuristic() {
    init();
    let mut rng = WyRand::new_seed(7);

    for _ in 0..10 {
        let (graph, _) = random_graph(&mut rng, 25, 80);
        let goal = rng.generate_range(0..graph.node_count() as NodeID);

        // the exact remaining Cost, randomly scaled down: admissible, but not consistent
        let estimates: Vec<Cost> = graph
            .nodes()
            .map(|node| {
                let exact = dijkstra_search(node, &[goal], &graph).unwrap();
                let remaining = exact.get(&goal).map_or(0.0, |path| path.cost());
                remaining * rng.generate_range(0_u32..=10) as Cost / 10.0
            })
            .collect();
        let heuristic = TableHeuristic::new(goal, estimates);

        let goals = [goal];
        for start in graph.nodes() {
            let expected = dijkstra_search(start, &goals, &graph).unwrap();
            let result = find_path(start, goal, &graph, &heuristic);

            match expected.get(&goal) {
                Some(expected) => assert_eq!(result.unwrap().cost(), expected.cost()),
                None => assert_eq!(result, Err(SearchError::NoPathExists)),
            }
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    init();
    let mut rng = WyRand::new_seed(3);
    let (graph, heuristic) = random_graph(&mut rng, 40, 160);

    let first: Vec<_> = graph
        .nodes()
        .map(|goal| find_path(0, goal, &graph, &heuristic))
        .collect();

    for _ in 0..5 {
        let again: Vec<_> = graph
            .nodes()
            .map(|goal| find_path(0, goal, &graph, &heuristic))
            .collect();
        assert_eq!(again, first);
    }
}

#[test]
fn heuristic_saves_expansions() {
    init();
    // a line from (0, 0) to (20, 0), with 50 dead ends branching off the first Node
    let mut graph = DirectedGraph::new();
    let mut positions = vec![];
    for x in 0..=20 {
        graph.add_node();
        positions.push((x as f32, 0.0));
    }
    for x in 0..20 {
        graph.add_edge(x, x + 1, 1.0);
    }
    for _ in 0..50 {
        let dead_end = graph.add_node();
        positions.push((0.0, 1.0));
        graph.add_edge(0, dead_end, 1.0);
    }
    let heuristic = EuclideanHeuristic::new(positions);
    let config = SearchConfig::with_max_expansions(25);

    let guided = find_path_with_config(0, 20, &graph, &heuristic, config).unwrap();
    assert_eq!(guided.cost(), 20.0);

    assert_eq!(
        find_path_with_config(0, 20, &graph, &ZeroHeuristic, config),
        Err(SearchError::ExpansionLimit { expansions: 25 })
    );

    let unguided = find_path(0, 20, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(unguided, guided);
}

#[test]
fn concurrent_searches() {
    init();
    let mut rng = WyRand::new_seed(11);
    let (graph, heuristic) = random_graph(&mut rng, 50, 200);

    let expected: Vec<_> = graph
        .nodes()
        .map(|goal| find_path(1, goal, &graph, &heuristic))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for goal in graph.nodes() {
                    assert_eq!(
                        find_path(1, goal, &graph, &heuristic),
                        expected[goal as usize]
                    );
                }
            });
        }
    });

    let queries: Vec<_> = graph.nodes().map(|goal| (1, goal)).collect();
    assert_eq!(
        find_paths(&queries, &graph, &heuristic, SearchConfig::default()),
        expected
    );
}

#[test]
fn removed_edges_are_not_used() {
    init();
    let mut graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);

    assert_eq!(find_path(0, 2, &graph, &ZeroHeuristic).unwrap().cost(), 2.0);

    graph.remove_edge(1);
    let path = find_path(0, 2, &graph, &ZeroHeuristic).unwrap();
    assert_eq!(path, vec![2]);
    assert_eq!(path.cost(), 5.0);
}

#[test]
fn found_path_equals_built_path() {
    init();
    let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);

    let found = find_path(0, 2, &graph, &ZeroHeuristic).unwrap();
    let built = Path::new(vec![0, 1], 2.0);

    assert_eq!(found, built);
    assert_eq!(found.partial_cmp(&built), Some(std::cmp::Ordering::Equal));
    assert_eq!(format!("{:?}", found), format!("{:?}", built));
    assert_ne!(found, Path::new(vec![1, 0], 2.0));
}

#[test]
fn invalid_estimate_aborts_search() {
    init();
    let graph = DirectedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]);
    let heuristic = TableHeuristic::new(2, vec![2.0, -1.0, 0.0]);

    match find_path(0, 2, &graph, &heuristic) {
        Err(SearchError::InvalidInput(InvalidInput::NegativeEstimate { node, estimate })) => {
            assert_eq!(node, 1);
            assert_eq!(estimate, -1.0);
        }
        other => panic!("expected an invalid estimate, got {:?}", other),
    }
}
