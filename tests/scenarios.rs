//! end-to-end scenarios: each graph must be accepted, colored properly,
//! and colored with exactly the expected number of colors by both
//! exact solvers and by the coordinator's cross-check.

use exact_graph_coloring::{
    build_graph, chromatic_number, dsatur_bnb::solve_dsatur_bnb, is_proper_coloring,
    olemskoy::solve_olemskoy, AdjacencyGraph, Coordinator,
};

fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(n, edges).unwrap()
}

fn assert_scenario(n: usize, edges: &[(usize, usize)], expected_chi: usize) {
    let g = graph_from_edges(n, edges);

    let dsatur = solve_dsatur_bnb(&g, None).unwrap();
    assert!(is_proper_coloring(&g, &dsatur).unwrap());
    assert_eq!(chromatic_number(&dsatur), expected_chi);

    let olemskoy = solve_olemskoy(&g, None).unwrap();
    assert!(is_proper_coloring(&g, &olemskoy).unwrap());
    assert_eq!(chromatic_number(&olemskoy), expected_chi);

    let report = Coordinator::new(&g).run().unwrap();
    assert_eq!(report.chromatic_number, expected_chi);
    assert!(is_proper_coloring(&g, &report.coloring).unwrap());
}

#[test]
fn scenario_1_mixed_graph() {
    assert_scenario(
        10,
        &[
            (0, 5), (1, 2), (1, 6), (2, 3), (2, 4), (2, 5), (3, 6), (3, 7), (4, 6), (5, 7), (5, 8), (6, 9),
        ],
        3,
    );
}

#[test]
fn scenario_2_complete_k5() {
    let edges: Vec<(usize, usize)> = (0..5)
        .flat_map(|i| ((i + 1)..5).map(move |j| (i, j)))
        .collect();
    assert_scenario(5, &edges, 5);
}

#[test]
fn scenario_3_even_cycle_c6() {
    assert_scenario(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (0, 5)], 2);
}

#[test]
fn scenario_4_odd_cycle_c5() {
    assert_scenario(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 4)], 3);
}

#[test]
fn scenario_5_complete_bipartite_k22() {
    assert_scenario(4, &[(0, 2), (0, 3), (1, 2), (1, 3)], 2);
}

#[test]
fn scenario_6_petersen_minus() {
    assert_scenario(
        6,
        &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (0, 3)],
        3,
    );
}

#[test]
fn rejects_non_square_matrix() {
    let m = vec![vec![0, 1], vec![1, 0], vec![0, 0]];
    assert!(build_graph(&m).is_err());
}

#[test]
fn rejects_asymmetric_matrix() {
    let m = vec![vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 0]];
    assert!(build_graph(&m).is_err());
}
