use dense_sssp::graph::generators::{grid_cost_matrix, random_cost_matrix};
use dense_sssp::graph::{CostMatrix, EdgeMatrix, Graph};
use dense_sssp::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_cost_matrix_accessors() {
    let matrix = CostMatrix::from_rows(vec![
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, f64::INFINITY],
        vec![7.0, 0.0, 0.0],
    ])
    .unwrap();

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.vertex_count(), 3);
    assert_eq!(matrix.cost(0, 1), Some(2.0));
    assert_eq!(matrix.cost(0, 2), Some(0.0));
    assert_eq!(matrix.cost(3, 0), None);
    assert_eq!(matrix.row(2), Some(&[7.0, 0.0, 0.0][..]));
    assert_eq!(matrix.row(3), None);
}

#[test]
fn test_zero_cells_are_not_edges() {
    let matrix = CostMatrix::from_rows(vec![
        vec![0.0, 2.0, 0.0],
        vec![0.0, 0.0, f64::INFINITY],
        vec![7.0, 0.0, 0.0],
    ])
    .unwrap();

    // Infinite cells still count as edges
    assert_eq!(matrix.edge_count(), 3);
    assert!(matrix.has_edge(0, 1));
    assert!(!matrix.has_edge(0, 2));
    assert!(!matrix.has_edge(0, 0));
    assert_eq!(matrix.edge_weight(0, 2), None);
    assert_eq!(matrix.edge_weight(1, 2), Some(f64::INFINITY));

    let outgoing: Vec<(usize, f64)> = matrix.outgoing_edges(0).collect();
    assert_eq!(outgoing, vec![(1, 2.0)]);
    assert_eq!(matrix.outgoing_edges(5).count(), 0);
}

#[test]
fn test_from_flat_matches_from_rows() {
    let flat = CostMatrix::from_flat(2, vec![0.0, 1.5, 2.5, 0.0]).unwrap();
    let rows = CostMatrix::try_from(vec![vec![0.0, 1.5], vec![2.5, 0.0]]).unwrap();

    assert_eq!(flat, rows);
    assert_eq!(flat.to_rows(), vec![vec![0.0, 1.5], vec![2.5, 0.0]]);
}

#[test]
fn test_from_flat_rejects_wrong_length() {
    let short = CostMatrix::from_flat(3, vec![1.0f64; 7]);
    assert!(matches!(
        short,
        Err(Error::InvalidGraph { row: 2, expected: 3, found: 1 })
    ));

    let long = CostMatrix::from_flat(2, vec![1.0f64; 5]);
    assert!(matches!(long, Err(Error::InvalidGraph { .. })));

    let empty = CostMatrix::from_flat(0, vec![1.0f64]);
    assert!(matches!(empty, Err(Error::InvalidGraph { .. })));
}

#[test]
fn test_from_flat_rejects_overflowing_size() {
    let huge = CostMatrix::<f64>::from_flat(usize::MAX, Vec::new());
    assert!(matches!(
        huge,
        Err(Error::InvalidGraph { row: 0, expected: usize::MAX, found: 0 })
    ));

    let size = usize::MAX / 2;
    let edges = EdgeMatrix::<f64>::from_flat(size, vec![None; 3]);
    assert!(matches!(
        edges,
        Err(Error::InvalidGraph { row: 0, found: 3, .. })
    ));
}

#[test]
fn test_empty_matrix() {
    let matrix = CostMatrix::<f64>::from_rows(Vec::new()).unwrap();

    assert_eq!(matrix.size(), 0);
    assert_eq!(matrix.edge_count(), 0);
    assert!(matrix.to_rows().is_empty());
    assert!(!matrix.has_vertex(0));
}

#[test]
fn test_invalid_graph_error_message() {
    let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0, 3.0]]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid graph: row 1 has 3 cells, expected 2"
    );
}

#[test]
fn test_edge_matrix_from_cost_matrix() {
    let costs = CostMatrix::from_rows(vec![vec![0.0, 4.0], vec![0.0, 0.0]]).unwrap();
    let edges = EdgeMatrix::from(costs);

    assert_eq!(edges.to_rows(), vec![vec![None, Some(4.0)], vec![None, None]]);
    assert_eq!(edges.edge_count(), 1);
}

#[test]
fn test_edge_matrix_zero_weight_edges() {
    let edges = EdgeMatrix::from_flat(2, vec![None, Some(0.0), Some(1.0), None]).unwrap();

    assert_eq!(edges.size(), 2);
    assert_eq!(edges.edge_weight(0, 1), Some(0.0));
    assert_eq!(edges.edge_weight(1, 0), Some(1.0));
    assert_eq!(edges.edge_weight(2, 0), None);
    assert_eq!(edges.edge_count(), 2);

    let ragged = EdgeMatrix::<f64>::from_rows(vec![vec![None], vec![None, None]]);
    assert!(matches!(
        ragged,
        Err(Error::InvalidGraph { row: 0, expected: 2, found: 1 })
    ));
}

#[test]
fn test_random_cost_matrix_shape() {
    let mut rng = StdRng::seed_from_u64(11);
    let matrix = random_cost_matrix(20, 0.5, 9, &mut rng);

    assert_eq!(matrix.size(), 20);
    for u in 0..20 {
        assert_eq!(matrix.cost(u, u), Some(0.0));
        for v in 0..20 {
            let cost = matrix.cost(u, v).unwrap();
            assert!(cost == cost.trunc() && (0.0..=9.0).contains(&cost));
        }
    }

    let dense = random_cost_matrix(5, 1.0, 3, &mut rng);
    assert_eq!(dense.edge_count(), 20);
    let none = random_cost_matrix(5, 0.0, 3, &mut rng);
    assert_eq!(none.edge_count(), 0);
}

#[test]
fn test_random_cost_matrix_clamps_density() {
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(random_cost_matrix(6, f64::NAN, 5, &mut rng).edge_count(), 0);
    assert_eq!(random_cost_matrix(6, -0.5, 5, &mut rng).edge_count(), 0);
    assert_eq!(random_cost_matrix(6, f64::INFINITY, 5, &mut rng).edge_count(), 30);
}

#[test]
fn test_outgoing_edges_through_trait_object() {
    let matrix = CostMatrix::from_rows(vec![
        vec![0.0, 2.0, 3.0],
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0],
    ])
    .unwrap();
    let edges = EdgeMatrix::from(matrix.clone());

    let graphs: [&dyn Graph<f64>; 2] = [&matrix, &edges];
    for graph in graphs {
        let outgoing: Vec<(usize, f64)> = graph.outgoing_edges(0).collect();
        assert_eq!(outgoing, vec![(1, 2.0), (2, 3.0)]);
        assert_eq!(graph.outgoing_edges(1).count(), 0);
        assert_eq!(graph.outgoing_edges(2).collect::<Vec<_>>(), vec![(0, 1.0)]);
    }
}

#[test]
fn test_grid_cost_matrix_edges() {
    let grid = grid_cost_matrix(3, 2);

    assert_eq!(grid.size(), 6);
    // 2 * (2 * 2 horizontal + 3 * 1 vertical) directed edges
    assert_eq!(grid.edge_count(), 14);
    assert!(grid.has_edge(0, 1));
    assert!(grid.has_edge(0, 3));
    assert!(!grid.has_edge(2, 3));
}
