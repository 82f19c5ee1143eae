//! # Disjoint sets
//!
//! Union-find with union by rank and path compression. Nodes live in `Cell`s so
//! that [`UnionFind::find`] can compress paths through a shared reference; the
//! structure is therefore `!Sync` and owned by exactly one in-flight computation.

use std::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::graph::{Graph, GraphError, IndexKind, NodeIndex, NodeVec};

/// A node in the union-find forest.
///
/// - `Root { rank, size }`: a representative. `rank` bounds the height of its
///   tree and only decides the merge direction; `size` counts the members.
/// - `Child(parent)`: points to its parent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UFNode {
    Root { rank: usize, size: usize },
    Child(NodeIndex),
}

#[derive(Debug, Clone)]
pub struct UnionFind {
    nodes: NodeVec<Cell<UFNode>>,
    n_sets: usize,
}

impl UnionFind {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            nodes: (0..n)
                .map(|_| Cell::new(UFNode::Root { rank: 0, size: 1 }))
                .collect(),
            n_sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint sets currently held.
    pub fn n_sets(&self) -> usize {
        self.n_sets
    }

    fn check(&self, x: NodeIndex) -> Result<(), GraphError> {
        GraphError::check(IndexKind::Node, x.0, self.nodes.len())
    }

    /// Finds the representative of the set containing `x`, compressing the path.
    pub fn find(&self, x: NodeIndex) -> Result<NodeIndex, GraphError> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// [`UnionFind::find`] for an index already known to be in range.
    ///
    /// Two passes: walk up to the root, then point every node on the way at it.
    pub(crate) fn find_root(&self, x: NodeIndex) -> NodeIndex {
        let mut root = x;
        while let UFNode::Child(parent) = self.nodes[root].get() {
            root = parent;
        }

        let mut current = x;
        while let UFNode::Child(parent) = self.nodes[current].get() {
            if parent != root {
                self.nodes[current].set(UFNode::Child(root));
            }
            current = parent;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already one set.
    pub fn union(&mut self, x: NodeIndex, y: NodeIndex) -> Result<bool, GraphError> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.union_roots(x, y))
    }

    pub(crate) fn union_roots(&mut self, x: NodeIndex, y: NodeIndex) -> bool {
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return false;
        }

        let (rank_x, size_x) = self.root_data(root_x);
        let (rank_y, size_y) = self.root_data(root_y);

        // union by rank; ties keep x as the root
        let (winner, loser) = if rank_x < rank_y {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };

        let rank = if rank_x == rank_y {
            rank_x + 1
        } else {
            rank_x.max(rank_y)
        };

        self.nodes[winner].set(UFNode::Root {
            rank,
            size: size_x + size_y,
        });
        self.nodes[loser].set(UFNode::Child(winner));
        self.n_sets -= 1;

        trace!(%winner, %loser, rank, "merged sets");
        true
    }

    fn root_data(&self, root: NodeIndex) -> (usize, usize) {
        match self.nodes[root].get() {
            UFNode::Root { rank, size } => (rank, size),
            UFNode::Child(_) => unreachable!("find_root should always return a root"),
        }
    }

    pub fn connected(&self, x: NodeIndex, y: NodeIndex) -> Result<bool, GraphError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of elements in the set containing `x`.
    pub fn set_size(&self, x: NodeIndex) -> Result<usize, GraphError> {
        let root = self.find(x)?;
        Ok(self.root_data(root).1)
    }

    /// Rank of the root of `x`'s set.
    pub fn rank_of(&self, x: NodeIndex) -> Result<usize, GraphError> {
        let root = self.find(x)?;
        Ok(self.root_data(root).0)
    }

    /// The current node, without compressing anything.
    pub fn node(&self, x: NodeIndex) -> Option<UFNode> {
        self.nodes.get(x).map(Cell::get)
    }

    /// All sets, ordered by their smallest member, members ascending.
    pub fn sets(&self) -> Vec<Vec<NodeIndex>> {
        let mut slot: NodeVec<Option<usize>> = NodeVec::filled(self.nodes.len(), None);
        let mut sets: Vec<Vec<NodeIndex>> = Vec::with_capacity(self.n_sets);
        for x in self.nodes.indices() {
            let root = self.find_root(x);
            let index = *slot[root].get_or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[index].push(x);
        }
        sets
    }
}

/// Connected components of a graph, found with a disjoint set over its edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Components {
    /// Component label of every node; labels are dense and follow the smallest member.
    pub labels: NodeVec<usize>,
    pub count: usize,
}

impl Components {
    pub fn label(&self, node: NodeIndex) -> Option<usize> {
        self.labels.get(node).copied()
    }

    pub fn members(&self, label: usize) -> Vec<NodeIndex> {
        self.labels
            .iter()
            .filter(|(_, l)| **l == label)
            .map(|(n, _)| n)
            .collect()
    }
}

impl<W> Graph<W> {
    /// A disjoint set in which every edge's endpoints have been merged.
    pub fn union_find(&self) -> UnionFind {
        let mut uf = UnionFind::new(self.node_count());
        for (_, edge) in self.edges() {
            uf.union_roots(edge.source, edge.sink);
        }
        uf
    }

    /// Weakly connected components: edge direction is ignored.
    pub fn connected_components(&self) -> Components {
        let uf = self.union_find();
        let mut labels = NodeVec::filled(self.node_count(), 0);
        let sets = uf.sets();
        for (label, set) in sets.iter().enumerate() {
            for node in set {
                labels[*node] = label;
            }
        }
        Components {
            labels,
            count: sets.len(),
        }
    }

    /// Whether the underlying undirected graph contains a cycle.
    ///
    /// Self-loops and parallel edges count as cycles.
    pub fn has_undirected_cycle(&self) -> bool {
        let mut uf = UnionFind::new(self.node_count());
        self.edges()
            .any(|(_, edge)| !uf.union_roots(edge.source, edge.sink))
    }
}
