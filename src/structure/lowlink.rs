//! Discovery order and low-link bookkeeping shared by every depth-first analysis.
//!
//! The depth-first searches in this module never recurse. Each one drives a
//! work stack of [`Frame`]s, one per node on the current DFS path, where the
//! frame remembers how far through the node's crown the search has got. Popping
//! a frame is the moment a recursive implementation would return to its caller,
//! so the visit order is exactly the recursive one.

use crate::graph::{Hedge, NodeIndex, NodeVec};

/// Per-node discovery order and low-link value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowLinks {
    /// `None` until the node is discovered.
    pub discovery: NodeVec<Option<usize>>,
    /// Smallest discovery order reachable from the node's DFS subtree through at
    /// most one non-tree edge. Only meaningful for discovered nodes.
    pub low: NodeVec<usize>,
}

/// Mutable state of one traversal. Lives exactly as long as the analysis call.
#[derive(Debug)]
pub(crate) struct TraversalContext {
    links: LowLinks,
    counter: usize,
}

impl TraversalContext {
    pub(crate) fn new(node_count: usize) -> Self {
        TraversalContext {
            links: LowLinks {
                discovery: NodeVec::filled(node_count, None),
                low: NodeVec::filled(node_count, usize::MAX),
            },
            counter: 0,
        }
    }

    /// Assigns the next discovery order to `node` and returns it.
    pub(crate) fn discover(&mut self, node: NodeIndex) -> usize {
        let order = self.counter;
        self.counter += 1;
        self.links.discovery[node] = Some(order);
        self.links.low[node] = order;
        order
    }

    pub(crate) fn discovery(&self, node: NodeIndex) -> Option<usize> {
        self.links.discovery[node]
    }

    pub(crate) fn is_visited(&self, node: NodeIndex) -> bool {
        self.links.discovery[node].is_some()
    }

    pub(crate) fn low(&self, node: NodeIndex) -> usize {
        self.links.low[node]
    }

    /// `low[node] = min(low[node], value)`.
    pub(crate) fn lower_to(&mut self, node: NodeIndex, value: usize) {
        let low = &mut self.links.low[node];
        if value < *low {
            *low = value;
        }
    }

    /// Whether `node` heads its own component: `low[node] == discovery[node]`.
    pub(crate) fn is_component_root(&self, node: NodeIndex) -> bool {
        self.links.discovery[node] == Some(self.links.low[node])
    }

    pub(crate) fn into_links(self) -> LowLinks {
        self.links
    }
}

/// One node on the explicit DFS path.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame {
    pub(crate) node: NodeIndex,
    /// The hedge at the parent's end of the tree edge used to reach `node`.
    pub(crate) parent: Option<Hedge>,
    /// Position of the next hedge to look at in `node`'s crown.
    pub(crate) cursor: usize,
}

impl Frame {
    pub(crate) fn new(node: NodeIndex, parent: Option<Hedge>) -> Self {
        Frame {
            node,
            parent,
            cursor: 0,
        }
    }

    /// Whether `hedge` is the far side of the tree edge into this frame's node.
    ///
    /// Compared by hedge identity, so a parallel edge back to the parent is not
    /// mistaken for the tree edge.
    pub(crate) fn is_parent_edge(&self, hedge: Hedge) -> bool {
        self.parent.map(Hedge::inv) == Some(hedge)
    }
}
