use augmenting_paths::maximum_matching::{detect_bipartition, maximum_matching, Bipartition, HopcroftKarp, Matching, UndirectedGraph};
use augmenting_paths::status::Status;
use augmenting_paths::GraphError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::collections::HashSet;

fn build(n: usize, edges: &[(usize, usize)]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::default();
    graph.add_vertices(1..=n).unwrap();
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn bipartition(left: &[usize], right: &[usize]) -> Bipartition {
    Bipartition { left: left.to_vec(), right: right.to_vec() }
}

fn assert_valid(graph: &UndirectedGraph, bipartition: &Bipartition, matching: &Matching) {
    let mut used = HashSet::new();
    for (&u, &v) in matching.pairs.iter() {
        assert!(bipartition.left.contains(&u));
        if let Some(v) = v {
            assert!(bipartition.right.contains(&v));
            assert!(graph.neighbors(u).unwrap().contains(&v), "{}-{} is not an edge", u, v);
            assert!(used.insert(v), "right vertex {} matched twice", v);
        }
    }
    assert_eq!(matching.pairs.len(), bipartition.left.len());
    assert_eq!(matching.size, used.len());
    assert_eq!(matching.edges().len(), matching.size);
}

fn brute_force_maximum(adjacency: &[Vec<usize>], i: usize, used: u32) -> usize {
    if i == adjacency.len() {
        return 0;
    }
    let mut best = brute_force_maximum(adjacency, i + 1, used);
    for &j in adjacency[i].iter() {
        if used & (1 << j) == 0 {
            best = best.max(1 + brute_force_maximum(adjacency, i + 1, used | (1 << j)));
        }
    }
    best
}

#[rstest]
#[case::scenario_c(4, &[(1, 3), (1, 4), (2, 3)], &[1, 2], &[3, 4], 2)]
#[case::scenario_d(4, &[(1, 4), (2, 4), (3, 4)], &[1, 2, 3], &[4], 1)]
#[case::no_edges(3, &[], &[1, 2], &[3], 0)]
#[case::isolated_vertices(6, &[(1, 4), (2, 4)], &[1, 2, 3], &[4, 5, 6], 1)]
#[case::empty_left(2, &[], &[], &[1, 2], 0)]
#[case::duplicate_edges(4, &[(1, 3), (1, 3), (2, 3), (2, 4)], &[1, 2], &[3, 4], 2)]
fn maximum_matching_size(#[case] n: usize, #[case] edges: &[(usize, usize)], #[case] left: &[usize], #[case] right: &[usize], #[case] expected: usize) {
    let graph = build(n, edges);
    let bipartition = bipartition(left, right);

    let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();
    assert_eq!(solver.status(), Status::NotSolved);
    assert_eq!(solver.solve(), Status::Optimal);
    assert_eq!(solver.size(), expected);

    let matching = solver.matching();
    assert_eq!(matching.size, expected);
    assert_valid(&graph, &bipartition, &matching);
}

#[test]
fn scenario_c_accepts_any_maximum_matching() {
    let graph = build(4, &[(1, 3), (1, 4), (2, 3)]);
    let matching = maximum_matching(&graph).unwrap();

    assert_eq!(matching.size, 2);
    let pairs: Vec<_> = matching.pairs.iter().map(|(&u, &v)| (u, v)).collect();
    assert!(pairs == vec![(1, Some(4)), (2, Some(3))] || pairs == vec![(1, Some(3)), (2, Some(4))], "{:?}", pairs);
    assert_eq!(matching.edges().len(), 2);
}

#[test]
fn scenario_d_leaves_two_vertices_unmatched() {
    let graph = build(4, &[(1, 4), (2, 4), (3, 4)]);
    let bipartition = bipartition(&[1, 2, 3], &[4]);
    let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();
    solver.solve();

    let matching = solver.matching();
    assert_eq!(matching.size, 1);
    assert_eq!((1..=3).filter(|&u| matching.mate(u).is_none()).count(), 2);
    assert_eq!((1..=3).filter(|&u| matching.mate(u) == Some(4)).count(), 1);
}

#[test]
fn later_phase_reroutes_earlier_pairs() {
    // the first phase matches 1-5, 2-6 and 3-7; the only perfect matching
    // shifts every pair along the chain starting from 8
    let graph = build(8, &[(1, 5), (1, 4), (2, 6), (2, 5), (3, 7), (3, 6), (8, 7)]);
    let bipartition = bipartition(&[1, 2, 3, 8], &[4, 5, 6, 7]);
    let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();

    assert!(solver.layer());
    assert_eq!(solver.augment_phase(), 3);
    assert_eq!(solver.matching().mate(1), Some(5));
    assert_eq!(solver.matching().mate(8), None);

    assert!(solver.layer());
    assert_eq!(solver.augment_phase(), 1);
    assert!(!solver.layer());
    assert_eq!(solver.num_phases(), 2);

    let matching = solver.matching();
    assert_eq!(matching.size, 4);
    assert_eq!(matching.pairs.into_iter().collect::<Vec<_>>(), vec![(1, Some(4)), (2, Some(5)), (3, Some(6)), (8, Some(7))]);
}

#[test]
fn done_state_is_idempotent() {
    let graph = build(6, &[(1, 4), (1, 5), (2, 4), (3, 4), (3, 6)]);
    let bipartition = bipartition(&[1, 2, 3], &[4, 5, 6]);
    let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();
    solver.solve();
    let matching = solver.matching();
    let phases = solver.num_phases();

    for _ in 0..3 {
        assert!(!solver.layer());
        assert_eq!(solver.augment_phase(), 0);
    }
    assert_eq!(solver.solve(), Status::Optimal);
    assert_eq!(solver.matching(), matching);
    assert_eq!(solver.num_phases(), phases);
    assert_eq!(matching.size, 3);
}

#[test]
fn long_augmenting_paths_do_not_recurse() {
    // left i is adjacent to right n + i + 1 and right n + i; the first phase
    // matches left i to right n + i + 1, so the extra left vertex 2n + 1 needs
    // one augmenting path through the whole chain
    let n = 20_000;
    let mut graph = UndirectedGraph::default();
    graph.add_vertices(0..2 * n + 2).unwrap();
    for i in 0..n {
        graph.add_edge(i, n + i + 1).unwrap();
        graph.add_edge(i, n + i).unwrap();
    }
    graph.add_edge(2 * n + 1, 2 * n).unwrap();
    let bipartition = Bipartition { left: (0..n).chain([2 * n + 1]).collect(), right: (n..=2 * n).collect() };

    let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();
    solver.solve();
    assert_eq!(solver.size(), n + 1);
    assert_eq!(solver.num_phases(), 2);
    assert_eq!(solver.matching().mate(2 * n + 1), Some(2 * n));
}

#[rstest]
#[case::overlapping(&[1, 2], &[2, 3])]
#[case::repeated(&[1, 1], &[3])]
#[case::uncovered_endpoint(&[1], &[3])]
fn invalid_partitions_are_rejected(#[case] left: &[usize], #[case] right: &[usize]) {
    let graph = build(3, &[(1, 3), (2, 3)]);
    assert!(matches!(HopcroftKarp::new(&graph, &bipartition(left, right)), Err(GraphError::InvalidPartition(_))));
}

#[test]
fn unknown_vertex_in_partition_is_rejected() {
    let graph = build(3, &[(1, 3)]);
    assert!(matches!(HopcroftKarp::new(&graph, &bipartition(&[1, 9], &[3])), Err(GraphError::VertexNotFound(9))));
}

#[test]
fn edge_inside_a_partition_is_rejected() {
    let graph = build(4, &[(1, 3), (1, 2), (2, 4)]);
    assert!(matches!(HopcroftKarp::new(&graph, &bipartition(&[1, 2], &[3, 4])), Err(GraphError::NotBipartite)));
}

#[test]
fn odd_cycle_is_not_matched() {
    let graph = build(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
    assert!(matches!(maximum_matching(&graph), Err(GraphError::NotBipartite)));
}

#[test]
fn random_bipartite_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let (nl, nr) = (rng.gen_range(0..=6), rng.gen_range(0..=6));
        let mut graph = UndirectedGraph::default();
        graph.add_vertices(1..=nl + nr).unwrap();
        let mut adjacency = vec![Vec::new(); nl];
        if nl > 0 && nr > 0 {
            for _ in 0..rng.gen_range(0..=nl * nr) {
                let (i, j) = (rng.gen_range(0..nl), rng.gen_range(0..nr));
                graph.add_edge(1 + i, 1 + nl + j).unwrap();
                adjacency[i].push(j);
            }
        }
        let bipartition = Bipartition { left: (1..=nl).collect(), right: (nl + 1..=nl + nr).collect() };

        let mut solver = HopcroftKarp::new(&graph, &bipartition).unwrap();
        solver.solve();
        let matching = solver.matching();

        assert_valid(&graph, &bipartition, &matching);
        assert_eq!(matching.size, brute_force_maximum(&adjacency, 0, 0));
        // no augmenting path is left from any free left vertex
        assert!(!solver.layer());

        // colors found by detection give the same size
        let detected = detect_bipartition(&graph).unwrap();
        let mut solver = HopcroftKarp::new(&graph, &detected).unwrap();
        solver.solve();
        assert_eq!(solver.size(), matching.size);
    }
}
