//! # Graph store
//!
//! A fixed set of nodes `[0, V)` and an append-only list of edges. Every edge is
//! stored as a pair of half-edges ([`Hedge`]), one at each endpoint, so that a
//! traversal always knows *which* edge it arrived through, not only which node it
//! came from. This is what lets the low-link analyses skip the tree edge to the
//! DFS parent while still treating a parallel edge to the same parent as a back
//! edge.
//!
//! The store is immutable once built; every analysis borrows it and keeps its own
//! auxiliary arrays.

use std::fmt::Display;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::num_traits::Weight;

pub mod builder;
pub mod involution;

pub use builder::GraphBuilder;
pub use involution::{Flow, Hedge, Orientation};

crate::define_indexed_vec!(
    /// Dense node identifier in `[0, V)`.
    pub struct NodeIndex;

    /// Per-node storage, indexable only by [`NodeIndex`].
    pub struct NodeVec;
);

crate::define_indexed_vec!(
    /// Dense edge identifier, in insertion order.
    pub struct EdgeIndex;

    /// Per-edge storage, indexable only by [`EdgeIndex`].
    pub struct EdgeVec;
);

/// What kind of index failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexKind {
    Node,
    Edge,
    Left,
    Right,
}

impl Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IndexKind::Node => "node",
            IndexKind::Edge => "edge",
            IndexKind::Left => "left vertex",
            IndexKind::Right => "right vertex",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphError {
    #[error("Invalid {kind} index {index}: expected a value below {bound}")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        bound: usize,
    },
    #[error("Edge {edge} has a capacity that is negative, not finite, or overflows the weight type")]
    InvalidCapacity { edge: EdgeIndex },
    #[error("Source and sink are the same node ({node})")]
    SourceIsSink { node: NodeIndex },
}

impl GraphError {
    pub(crate) fn check(kind: IndexKind, index: usize, bound: usize) -> Result<(), GraphError> {
        if index < bound {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex { kind, index, bound })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeRecord<W> {
    pub source: NodeIndex,
    pub sink: NodeIndex,
    pub weight: W,
}

impl<W> EdgeRecord<W> {
    /// The endpoint on the `flow` side of the edge.
    pub fn endpoint(&self, flow: Flow) -> NodeIndex {
        match flow {
            Flow::Source => self.source,
            Flow::Sink => self.sink,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }
}

impl<W: Display> Display for EdgeRecord<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.source, self.sink, self.weight)
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph<W> {
    orientation: Orientation,
    edges: EdgeVec<EdgeRecord<W>>,
    /// The hedges attached to each node, in edge insertion order.
    crowns: NodeVec<Vec<Hedge>>,
}

impl<W: Weight> Graph<W> {
    /// Builds a graph on `vertex_count` nodes from `(source, sink, weight)` triples.
    ///
    /// Every endpoint is checked against `[0, vertex_count)` before anything is stored.
    pub fn build(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
        orientation: impl Into<Orientation>,
    ) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::new(orientation);
        builder.add_nodes(vertex_count);
        for (source, sink, weight) in edges {
            builder.add_edge(NodeIndex(source), NodeIndex(sink), weight);
        }
        builder.build()
    }

    /// Builds a graph where every edge carries [`Weight::one`].
    pub fn unweighted(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
        orientation: impl Into<Orientation>,
    ) -> Result<Self, GraphError> {
        Self::build(
            vertex_count,
            edges.into_iter().map(|(u, v)| (u, v, W::one())),
            orientation,
        )
    }

    /// Fails with [`GraphError::InvalidCapacity`] on the first edge whose weight is
    /// negative, NaN or infinite.
    pub fn validate_capacities(&self) -> Result<(), GraphError> {
        match self
            .edges
            .iter()
            .find(|(_, e)| !e.weight.is_valid_capacity())
        {
            Some((edge, _)) => Err(GraphError::InvalidCapacity { edge }),
            None => Ok(()),
        }
    }

    /// Sum of all edge weights. Fails with [`GraphError::InvalidCapacity`] naming
    /// the edge at which the sum stops fitting in `W`.
    pub fn total_weight(&self) -> Result<W, GraphError> {
        self.edges.iter().try_fold(W::zero(), |acc, (edge, e)| {
            acc.checked_add(e.weight)
                .ok_or(GraphError::InvalidCapacity { edge })
        })
    }
}

impl<W> Graph<W> {
    pub(crate) fn from_parts(
        orientation: Orientation,
        node_count: usize,
        edges: EdgeVec<EdgeRecord<W>>,
    ) -> Self {
        let mut crowns: NodeVec<Vec<Hedge>> = NodeVec::filled(node_count, Vec::new());
        for (edge, record) in &edges {
            crowns[record.source].push(Hedge::source_of(edge));
            crowns[record.sink].push(Hedge::sink_of(edge));
        }
        debug!(
            nodes = node_count,
            edges = edges.len(),
            ?orientation,
            "built graph"
        );
        Graph {
            orientation,
            edges,
            crowns,
        }
    }

    pub fn node_count(&self) -> usize {
        self.crowns.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn hedge_count(&self) -> usize {
        self.edges.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.crowns.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    pub fn check_node(&self, node: usize) -> Result<NodeIndex, GraphError> {
        GraphError::check(IndexKind::Node, node, self.node_count())?;
        Ok(NodeIndex(node))
    }

    pub fn check_edge(&self, edge: usize) -> Result<EdgeIndex, GraphError> {
        GraphError::check(IndexKind::Edge, edge, self.edge_count())?;
        Ok(EdgeIndex(edge))
    }

    pub fn edge(&self, edge: EdgeIndex) -> Option<&EdgeRecord<W>> {
        self.edges.get(edge)
    }

    /// The record of an edge index already known to be in range.
    pub(crate) fn record(&self, edge: EdgeIndex) -> &EdgeRecord<W> {
        &self.edges[edge]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &EdgeRecord<W>)> {
        self.edges.iter()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + DoubleEndedIterator + ExactSizeIterator {
        self.crowns.indices()
    }

    /// All hedges attached to `node`, whatever their direction.
    pub fn crown(&self, node: NodeIndex) -> &[Hedge] {
        &self.crowns[node]
    }

    /// Hedges a walk may leave `node` through, respecting the graph orientation.
    pub fn iter_outgoing(&self, node: NodeIndex) -> impl Iterator<Item = Hedge> + '_ {
        let orientation = self.orientation;
        self.crowns[node]
            .iter()
            .copied()
            .filter(move |h| orientation.allows(*h))
    }

    /// The node `hedge` is attached to.
    pub fn node_id(&self, hedge: Hedge) -> NodeIndex {
        self.edges[hedge.edge()].endpoint(hedge.flow())
    }

    /// The node at the other end of `hedge`'s edge.
    pub fn involved_node_id(&self, hedge: Hedge) -> NodeIndex {
        self.node_id(hedge.inv())
    }

    pub fn weight(&self, edge: EdgeIndex) -> &W {
        &self.edges[edge].weight
    }

    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.iter_outgoing(node).count()
    }

    /// The edge list, one `source-sink:weight` entry per edge.
    pub fn edge_list(&self) -> String
    where
        W: Display,
    {
        self.edges.values().join(", ")
    }
}

#[cfg(test)]
mod test;
