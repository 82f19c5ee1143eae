use bitvec::prelude::*;

use super::lowlink::{Frame, LowLinks, TraversalContext};
use crate::graph::{EdgeIndex, Graph, NodeIndex};

/// Everything one undirected low-link traversal produces.
#[derive(Debug)]
pub(crate) struct CutTraversal {
    /// Sorted by edge index.
    pub(crate) bridges: Vec<EdgeIndex>,
    /// Sorted by node index.
    pub(crate) articulation_points: Vec<NodeIndex>,
    /// One entry per DFS tree, members in reverse discovery order.
    pub(crate) trees: Vec<Vec<NodeIndex>>,
    pub(crate) links: LowLinks,
}

/// Low-link traversal of the underlying undirected structure.
///
/// Every hedge in a crown is followed regardless of the graph's orientation. The
/// tree edge back to the parent is skipped by hedge identity, so a second edge
/// between the same two nodes counts as a back edge.
pub(crate) fn traverse<W>(graph: &Graph<W>) -> CutTraversal {
    let n = graph.node_count();
    let mut ctx = TraversalContext::new(n);
    let mut is_cut = bitvec![0; n];
    let mut bridges = Vec::new();
    let mut trees = Vec::new();
    let mut work: Vec<Frame> = Vec::new();

    for root in graph.nodes() {
        if ctx.is_visited(root) {
            continue;
        }
        ctx.discover(root);
        work.push(Frame::new(root, None));
        let mut tree = vec![root];
        let mut root_children = 0usize;

        while let Some(frame) = work.last_mut() {
            let v = frame.node;
            let next = graph.crown(v).get(frame.cursor).copied();

            let Some(hedge) = next else {
                let Some(finished) = work.pop() else { break };
                let Some(parent_frame) = work.last() else {
                    continue;
                };
                let u = parent_frame.node;
                let low = ctx.low(v);
                ctx.lower_to(u, low);

                let Some(disc_u) = ctx.discovery(u) else {
                    continue;
                };
                if low > disc_u {
                    if let Some(tree_edge) = finished.parent {
                        bridges.push(tree_edge.edge());
                    }
                }
                if u == root {
                    root_children += 1;
                } else if low >= disc_u {
                    is_cut.set(u.0, true);
                }
                continue;
            };

            frame.cursor += 1;
            if frame.is_parent_edge(hedge) {
                continue;
            }
            let w = graph.involved_node_id(hedge);
            match ctx.discovery(w) {
                None => {
                    ctx.discover(w);
                    tree.push(w);
                    work.push(Frame::new(w, Some(hedge)));
                }
                Some(order) => ctx.lower_to(v, order),
            }
        }

        if root_children > 1 {
            is_cut.set(root.0, true);
        }
        tree.reverse();
        trees.push(tree);
    }

    bridges.sort_unstable();
    let articulation_points = is_cut.iter_ones().map(NodeIndex).collect();

    CutTraversal {
        bridges,
        articulation_points,
        trees,
        links: ctx.into_links(),
    }
}
