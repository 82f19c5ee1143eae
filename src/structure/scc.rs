use ahash::AHashSet;
use bitvec::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::lowlink::{Frame, LowLinks, TraversalContext};
use crate::graph::{Graph, NodeIndex, NodeVec};

/// Strongly connected components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SccDecomposition {
    /// Components in completion order. For a directed graph this is a reverse
    /// topological order of the condensation. Members are listed in the order
    /// they left the traversal stack.
    pub components: Vec<Vec<NodeIndex>>,
    /// Position in `components` of each node's component.
    pub component_of: NodeVec<usize>,
}

impl SccDecomposition {
    pub(crate) fn from_components(node_count: usize, components: Vec<Vec<NodeIndex>>) -> Self {
        let mut component_of = NodeVec::filled(node_count, 0);
        for (i, component) in components.iter().enumerate() {
            for node in component {
                component_of[*node] = i;
            }
        }
        SccDecomposition {
            components,
            component_of,
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component_of(&self, node: NodeIndex) -> Option<usize> {
        self.component_of.get(node).copied()
    }

    pub fn same_component(&self, a: NodeIndex, b: NodeIndex) -> bool {
        matches!(
            (self.component_of(a), self.component_of(b)),
            (Some(x), Some(y)) if x == y
        )
    }

    /// Edges of the component graph, first occurrence order, without duplicates
    /// or self loops.
    ///
    /// Walks the graph's edges along its orientation; for an undirected graph
    /// every component is closed and the result is empty.
    pub fn condensation<W>(&self, graph: &Graph<W>) -> Vec<(usize, usize)> {
        let mut seen = AHashSet::new();
        let mut out = Vec::new();
        for (_, edge) in graph.edges() {
            let from = self.component_of[edge.source];
            let to = self.component_of[edge.sink];
            if from != to && seen.insert((from, to)) {
                out.push((from, to));
            }
        }
        out
    }
}

/// Tarjan's algorithm, following the graph's orientation.
///
/// A neighbour that is still on the component stack lowers the current node to
/// its *discovery* order, never to its low-link.
pub(crate) fn tarjan<W>(graph: &Graph<W>) -> (SccDecomposition, LowLinks) {
    let n = graph.node_count();
    let orientation = graph.orientation();
    let mut ctx = TraversalContext::new(n);
    let mut on_stack = bitvec![0; n];
    let mut stack: Vec<NodeIndex> = Vec::new();
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();
    let mut work: Vec<Frame> = Vec::new();

    for root in graph.nodes() {
        if ctx.is_visited(root) {
            continue;
        }
        ctx.discover(root);
        on_stack.set(root.0, true);
        stack.push(root);
        work.push(Frame::new(root, None));

        while let Some(frame) = work.last_mut() {
            let v = frame.node;
            let next = graph.crown(v).get(frame.cursor).copied();

            let Some(hedge) = next else {
                // all neighbours done: return to the caller
                work.pop();
                if ctx.is_component_root(v) {
                    let mut component = Vec::new();
                    while let Some(w) = stack.pop() {
                        on_stack.set(w.0, false);
                        component.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(component);
                }
                if let Some(parent) = work.last() {
                    let low = ctx.low(v);
                    ctx.lower_to(parent.node, low);
                }
                continue;
            };

            frame.cursor += 1;
            if !orientation.allows(hedge) {
                continue;
            }
            let w = graph.involved_node_id(hedge);
            match ctx.discovery(w) {
                None => {
                    ctx.discover(w);
                    on_stack.set(w.0, true);
                    stack.push(w);
                    work.push(Frame::new(w, Some(hedge)));
                }
                Some(order) if on_stack[w.0] => ctx.lower_to(v, order),
                // finished in an earlier component
                Some(_) => {}
            }
        }
    }

    (
        SccDecomposition::from_components(n, components),
        ctx.into_links(),
    )
}
