use proptest::prelude::*;

use super::*;
use crate::graph::{GraphError, IndexKind};

fn classic() -> Graph<u32> {
    Graph::build(
        4,
        [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        false,
    )
    .unwrap()
}

#[test]
fn kruskal_classic() {
    let forest = classic().spanning_forest().unwrap();

    assert_eq!(forest.total_weight, 19);
    assert_eq!(forest.len(), 3);
    assert!(forest.is_spanning_tree());
    assert_eq!(
        forest.edge_indices(),
        vec![EdgeIndex(4), EdgeIndex(2), EdgeIndex(0)]
    );
    insta::assert_snapshot!(forest.to_string(), @"weight 19 over 1 component: 2-3:4, 0-3:5, 0-1:10");
}

#[test]
fn direction_is_ignored() {
    let graph: Graph<u32> = Graph::build(
        4,
        [(1, 0, 10), (2, 0, 6), (3, 0, 5), (3, 1, 15), (3, 2, 4)],
        true,
    )
    .unwrap();
    assert_eq!(graph.spanning_forest().unwrap().total_weight, 19);
}

#[test]
fn disconnected_graph_gives_forest() {
    let graph: Graph<f64> = Graph::build(
        6,
        [(0, 1, 1.5), (1, 2, 0.5), (0, 2, 2.0), (3, 4, 3.0)],
        false,
    )
    .unwrap();
    let forest = graph.spanning_forest().unwrap();

    assert!(!forest.is_spanning_tree());
    // {0,1,2}, {3,4}, {5}
    assert_eq!(forest.component_count, 3);
    assert_eq!(forest.len(), 3);
    assert_eq!(forest.total_weight, 5.0);
    insta::assert_snapshot!(forest.to_string(), @"weight 5 over 3 components: 1-2:0.5, 0-1:1.5, 3-4:3");
}

#[test]
fn ties_follow_edge_order() {
    let graph: Graph<u8> = Graph::unweighted(3, [(0, 1), (1, 2), (0, 2)], false).unwrap();
    let forest = graph.spanning_forest().unwrap();
    assert_eq!(forest.edge_indices(), vec![EdgeIndex(0), EdgeIndex(1)]);

    // same result on repeated calls
    assert_eq!(graph.spanning_forest().unwrap(), forest);
}

#[test]
fn self_loops_and_parallel_edges() {
    let graph: Graph<i32> = Graph::build(2, [(0, 0, 0), (0, 1, 7), (1, 0, 3)], false).unwrap();
    let forest = graph.spanning_forest().unwrap();
    assert_eq!(forest.edge_indices(), vec![EdgeIndex(2)]);
    assert_eq!(forest.total_weight, 3);
}

#[test]
fn empty_and_single_node() {
    let empty: Graph<u32> = Graph::unweighted(0, [], false).unwrap();
    let forest = empty.spanning_forest().unwrap();
    assert!(forest.is_empty());
    assert_eq!(forest.component_count, 0);

    let single: Graph<u32> = Graph::unweighted(1, [], false).unwrap();
    let forest = single.spanning_forest().unwrap();
    assert!(forest.is_spanning_tree());
    assert_eq!(forest.total_weight, 0);
}

#[test]
fn external_ordering() {
    let graph = classic();
    // an ordering produced elsewhere, e.g. by descending weight
    let order = [3, 0, 1, 2, 4].map(EdgeIndex);
    let forest = graph.spanning_forest_with_order(order).unwrap();
    assert_eq!(forest.total_weight, 15 + 10 + 6);
    assert_eq!(
        forest.edge_indices(),
        vec![EdgeIndex(3), EdgeIndex(0), EdgeIndex(1)]
    );
}

#[test]
fn external_ordering_is_validated_first() {
    let graph = classic();
    assert_eq!(
        graph.spanning_forest_with_order([EdgeIndex(0), EdgeIndex(9)]),
        Err(GraphError::InvalidIndex {
            kind: IndexKind::Edge,
            index: 9,
            bound: 5
        })
    );
}

#[test]
fn negative_weights_are_rejected() {
    let graph: Graph<i32> = Graph::build(3, [(0, 1, 2), (1, 2, -3)], false).unwrap();
    assert_eq!(
        graph.spanning_forest(),
        Err(GraphError::InvalidCapacity { edge: EdgeIndex(1) })
    );
}

#[test]
fn forest_weight_overflow_is_reported() {
    // the cheapest spanning tree weighs 300, more than a u8 holds
    let graph: Graph<u8> =
        Graph::build(4, [(0, 1, 100), (1, 2, 100), (2, 3, 100), (0, 3, 250)], false).unwrap();
    assert_eq!(
        graph.spanning_forest(),
        Err(GraphError::InvalidCapacity { edge: EdgeIndex(2) })
    );

    let wide: Graph<u16> =
        Graph::build(4, [(0, 1, 100), (1, 2, 100), (2, 3, 100), (0, 3, 250)], false).unwrap();
    assert_eq!(wide.spanning_forest().unwrap().total_weight, 300);
}

/// Weight of the lightest acyclic edge subset that reaches the same number of
/// components as the whole graph.
fn brute_force_forest_weight(n: usize, edges: &[(usize, usize, u32)]) -> u32 {
    let full = Graph::build(n, edges.iter().copied(), false)
        .unwrap()
        .connected_components()
        .count;
    let mut best = u32::MAX;
    for mask in 0u32..(1 << edges.len()) {
        let mut uf = UnionFind::new(n);
        let mut weight = 0;
        let mut acyclic = true;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= uf.union(NodeIndex(u), NodeIndex(v)).unwrap();
                weight += w;
            }
        }
        if acyclic && uf.n_sets() == full {
            best = best.min(weight);
        }
    }
    best
}

proptest! {
    #[test]
    fn kruskal_matches_brute_force(
        n in 1usize..6,
        raw in prop::collection::vec((0usize..6, 0usize..6, 0u32..20), 0..9),
    ) {
        let edges: Vec<_> = raw.into_iter().map(|(u, v, w)| (u % n, v % n, w)).collect();
        let graph = Graph::build(n, edges.iter().copied(), false).unwrap();
        let forest = graph.spanning_forest().unwrap();

        prop_assert_eq!(forest.component_count, graph.connected_components().count);
        prop_assert_eq!(forest.len(), n - forest.component_count);
        prop_assert_eq!(forest.total_weight, brute_force_forest_weight(n, &edges));
    }
}
