use super::*;

#[test]
fn build_undirected_stores_both_sides() {
    let graph: Graph<u32> = Graph::build(3, [(0, 1, 4), (1, 2, 7)], false).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.hedge_count(), 4);
    assert!(!graph.is_directed());

    assert_eq!(graph.crown(NodeIndex(1)).len(), 2);
    assert_eq!(graph.out_degree(NodeIndex(1)), 2);
    for h in graph.crown(NodeIndex(1)) {
        assert_eq!(graph.node_id(*h), NodeIndex(1));
    }
    assert_eq!(graph.total_weight(), Ok(11));
}

#[test]
fn directed_walks_only_leave_through_sources() {
    let graph: Graph<i32> = Graph::unweighted(3, [(0, 1), (1, 2), (2, 0)], true).unwrap();

    for node in graph.nodes() {
        assert_eq!(graph.crown(node).len(), 2);
        assert_eq!(graph.out_degree(node), 1);
    }

    let out: Vec<_> = graph
        .iter_outgoing(NodeIndex(0))
        .map(|h| graph.involved_node_id(h))
        .collect();
    assert_eq!(out, vec![NodeIndex(1)]);
    assert_eq!(*graph.weight(EdgeIndex(2)), 1);
}

#[test]
fn parallel_edges_keep_distinct_hedges() {
    let graph: Graph<u8> = Graph::unweighted(2, [(0, 1), (0, 1)], false).unwrap();
    let crown = graph.crown(NodeIndex(0));

    assert_eq!(crown.len(), 2);
    assert_ne!(crown[0], crown[1]);
    assert_ne!(crown[0].edge(), crown[1].edge());
    assert_eq!(graph.involved_node_id(crown[0]), NodeIndex(1));
    assert_eq!(graph.involved_node_id(crown[1]), NodeIndex(1));
}

#[test]
fn self_loop_sits_twice_in_its_crown() {
    let graph: Graph<u8> = Graph::unweighted(1, [(0, 0)], false).unwrap();
    assert_eq!(graph.crown(NodeIndex(0)).len(), 2);
    assert!(graph.edge(EdgeIndex(0)).unwrap().is_self_loop());
}

#[test]
fn out_of_range_endpoint_is_rejected() {
    let err = Graph::<f64>::build(2, [(0, 1, 1.0), (1, 2, 1.0)], true).unwrap_err();
    assert_eq!(
        err,
        GraphError::InvalidIndex {
            kind: IndexKind::Node,
            index: 2,
            bound: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid node index 2: expected a value below 2"
    );
}

#[test]
fn builder_accepts_nodes_added_after_edges() {
    let mut builder = GraphBuilder::new(Orientation::Directed);
    let a = NodeIndex(0);
    let b = NodeIndex(1);
    builder.add_edge(a, b, 2.5f32);
    assert!(builder.clone().build().is_err());

    assert_eq!(builder.add_node(), a);
    assert_eq!(builder.add_node(), b);
    let graph = builder.build().unwrap();
    assert_eq!(graph.edge_list(), "0-1:2.5");
}

#[test]
fn capacity_validation_names_the_edge() {
    let graph: Graph<i64> = Graph::build(3, [(0, 1, 3), (1, 2, -1), (0, 2, -4)], true).unwrap();
    assert_eq!(
        graph.validate_capacities(),
        Err(GraphError::InvalidCapacity { edge: EdgeIndex(1) })
    );

    let graph: Graph<f64> = Graph::build(2, [(0, 1, f64::NAN)], true).unwrap();
    assert!(graph.validate_capacities().is_err());

    let graph: Graph<f64> = Graph::build(2, [(0, 1, 2.0), (1, 0, f64::INFINITY)], true).unwrap();
    assert_eq!(
        graph.validate_capacities(),
        Err(GraphError::InvalidCapacity { edge: EdgeIndex(1) })
    );
}

#[test]
fn total_weight_reports_overflow() {
    let graph: Graph<u8> = Graph::build(3, [(0, 1, 100), (1, 2, 100), (2, 0, 100)], false).unwrap();
    assert_eq!(
        graph.total_weight(),
        Err(GraphError::InvalidCapacity { edge: EdgeIndex(2) })
    );

    let wide: Graph<u16> = Graph::build(3, [(0, 1, 100), (1, 2, 100), (2, 0, 100)], false).unwrap();
    assert_eq!(wide.total_weight(), Ok(300));
}

#[test]
fn checks_report_bounds() {
    let graph: Graph<u32> = Graph::unweighted(4, [(0, 1)], false).unwrap();
    assert_eq!(graph.check_node(3), Ok(NodeIndex(3)));
    assert!(graph.check_node(4).is_err());
    assert_eq!(graph.check_edge(0), Ok(EdgeIndex(0)));
    assert_eq!(
        graph.check_edge(1),
        Err(GraphError::InvalidIndex {
            kind: IndexKind::Edge,
            index: 1,
            bound: 1
        })
    );
}
