//! # Minimum spanning forests
//!
//! Kruskal's algorithm on top of [`UnionFind`]: edges are tried in ascending
//! weight order and accepted whenever they join two different sets. A
//! disconnected graph yields one tree per component; this is reported through
//! [`SpanningForest::component_count`] rather than an error.
//!
//! Edge direction is ignored. Weights must be valid capacities (non-negative and
//! finite), and the forest's total weight must fit in the weight type.

use std::cmp::Ordering;
use std::fmt::Display;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{EdgeIndex, Graph, GraphError, NodeIndex};
use crate::num_traits::Weight;
use crate::union_find::UnionFind;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForestEdge<W> {
    pub edge: EdgeIndex,
    pub source: NodeIndex,
    pub sink: NodeIndex,
    pub weight: W,
}

impl<W: Display> Display for ForestEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.source, self.sink, self.weight)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningForest<W> {
    pub total_weight: W,
    /// Accepted edges, in the order they were accepted.
    pub edges: Vec<ForestEdge<W>>,
    /// Number of trees in the forest; isolated nodes count as trees.
    pub component_count: usize,
}

impl<W> SpanningForest<W> {
    /// `false` when the graph was disconnected and the result is a proper forest.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1
    }

    pub fn edge_indices(&self) -> Vec<EdgeIndex> {
        self.edges.iter().map(|e| e.edge).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<W: Display> Display for SpanningForest<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "weight {} over {} component{}: {}",
            self.total_weight,
            self.component_count,
            if self.component_count == 1 { "" } else { "s" },
            self.edges.iter().join(", ")
        )
    }
}

impl<W: Weight> Graph<W> {
    /// Minimum spanning forest, with ties between equal weights broken by edge order.
    pub fn spanning_forest(&self) -> Result<SpanningForest<W>, GraphError> {
        self.validate_capacities()?;
        // stable: equal weights keep insertion order
        let order = self.edges().map(|(e, _)| e).sorted_by(|a, b| {
            self.weight(*a)
                .partial_cmp(self.weight(*b))
                .unwrap_or(Ordering::Equal)
        });
        self.kruskal(order)
    }

    /// Kruskal over a caller supplied edge ordering.
    ///
    /// The ordering is trusted to be ascending by weight; it is not re-sorted.
    /// Edges absent from `order` are never considered.
    pub fn spanning_forest_with_order(
        &self,
        order: impl IntoIterator<Item = EdgeIndex>,
    ) -> Result<SpanningForest<W>, GraphError> {
        self.validate_capacities()?;
        let order: Vec<EdgeIndex> = order
            .into_iter()
            .map(|e| self.check_edge(e.0))
            .collect::<Result<_, _>>()?;
        self.kruskal(order)
    }

    /// Fails with [`GraphError::InvalidCapacity`] on the accepted edge whose weight
    /// no longer fits in the running total.
    fn kruskal(
        &self,
        order: impl IntoIterator<Item = EdgeIndex>,
    ) -> Result<SpanningForest<W>, GraphError> {
        let target = self.node_count().saturating_sub(1);
        let mut uf = UnionFind::new(self.node_count());
        let mut edges = Vec::with_capacity(target);
        let mut total_weight = W::zero();

        for edge in order {
            if edges.len() == target {
                break;
            }
            let record = self.record(edge);
            if uf.union_roots(record.source, record.sink) {
                total_weight = total_weight
                    .checked_add(record.weight)
                    .ok_or(GraphError::InvalidCapacity { edge })?;
                edges.push(ForestEdge {
                    edge,
                    source: record.source,
                    sink: record.sink,
                    weight: record.weight,
                });
            }
        }

        debug!(
            accepted = edges.len(),
            components = uf.n_sets(),
            "spanning forest"
        );

        Ok(SpanningForest {
            total_weight,
            edges,
            component_count: uf.n_sets(),
        })
    }
}

#[cfg(test)]
mod test;
