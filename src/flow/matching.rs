//! Maximum bipartite matching by augmenting paths.
//!
//! Left vertices are tried in order. Each attempt runs a depth-first search for
//! an augmenting path; a right vertex already matched to some left vertex `l` is
//! usable when `l` can itself be moved to another right vertex. The set of right
//! vertices seen is cleared before every attempt: a vertex that was a dead end
//! for one left vertex may still complete the path of the next.

use bitvec::prelude::*;
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::graph::{
    EdgeIndex, EdgeRecord, EdgeVec, Graph, GraphError, IndexKind, NodeIndex, Orientation,
};
use crate::num_traits::Weight;

/// Left-to-right adjacency of a bipartite graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BipartiteGraph {
    left_count: usize,
    right_count: usize,
    /// `(left, right)` pairs in insertion order.
    pairs: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matching {
    /// Matched `(left, right)` pairs, sorted by left vertex.
    pub pairs: Vec<(usize, usize)>,
    pub match_of_left: Vec<Option<usize>>,
    pub match_of_right: Vec<Option<usize>>,
}

impl Matching {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Every vertex on both sides is matched.
    pub fn is_perfect(&self) -> bool {
        self.match_of_left.iter().all(Option::is_some)
            && self.match_of_right.iter().all(Option::is_some)
    }

    pub fn right_of(&self, left: usize) -> Option<usize> {
        self.match_of_left.get(left).copied().flatten()
    }

    pub fn left_of(&self, right: usize) -> Option<usize> {
        self.match_of_right.get(right).copied().flatten()
    }
}

impl std::fmt::Display for Matching {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.pairs.iter().map(|(l, r)| format!("{l}-{r}")).join(", ")
        )
    }
}

/// One left vertex on the current augmenting path.
#[derive(Clone, Copy, Debug)]
struct Attempt {
    left: usize,
    /// Position of the next right vertex to try in `left`'s adjacency.
    cursor: usize,
}

impl BipartiteGraph {
    pub fn new(
        left_count: usize,
        right_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let pairs: Vec<(usize, usize)> = edges.into_iter().collect();
        for &(left, right) in &pairs {
            GraphError::check(IndexKind::Left, left, left_count)?;
            GraphError::check(IndexKind::Right, right, right_count)?;
        }
        let mut adjacency = vec![Vec::new(); left_count];
        for &(left, right) in &pairs {
            adjacency[left].push(right);
        }
        Ok(BipartiteGraph {
            left_count,
            right_count,
            pairs,
            adjacency,
        })
    }

    pub fn left_count(&self) -> usize {
        self.left_count
    }

    pub fn right_count(&self) -> usize {
        self.right_count
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn neighbours(&self, left: usize) -> &[usize] {
        &self.adjacency[left]
    }

    /// Node of the flow network feeding every left vertex.
    pub fn super_source(&self) -> NodeIndex {
        NodeIndex(self.left_count + self.right_count)
    }

    /// Node of the flow network drained by every right vertex.
    pub fn super_sink(&self) -> NodeIndex {
        NodeIndex(self.left_count + self.right_count + 1)
    }

    /// The unit-capacity directed network whose maximum flow from
    /// [`super_source`](Self::super_source) to [`super_sink`](Self::super_sink)
    /// equals the maximum matching size.
    ///
    /// Left vertex `l` becomes node `l`, right vertex `r` node `left_count + r`.
    pub fn as_flow_network<W: Weight>(&self) -> Graph<W> {
        let source = self.super_source();
        let sink = self.super_sink();
        let mut edges =
            EdgeVec::with_capacity(self.left_count + self.pairs.len() + self.right_count);

        for left in 0..self.left_count {
            edges.push(EdgeRecord {
                source,
                sink: NodeIndex(left),
                weight: W::one(),
            });
        }
        for &(left, right) in &self.pairs {
            edges.push(EdgeRecord {
                source: NodeIndex(left),
                sink: NodeIndex(self.left_count + right),
                weight: W::one(),
            });
        }
        for right in 0..self.right_count {
            edges.push(EdgeRecord {
                source: NodeIndex(self.left_count + right),
                sink,
                weight: W::one(),
            });
        }
        Graph::from_parts(
            Orientation::Directed,
            self.left_count + self.right_count + 2,
            edges,
        )
    }

    pub fn max_matching(&self) -> Matching {
        let mut match_of_left = vec![None; self.left_count];
        let mut match_of_right: Vec<Option<usize>> = vec![None; self.right_count];
        let mut seen = bitvec![0; self.right_count];
        let mut path: Vec<Attempt> = Vec::new();

        for root in 0..self.left_count {
            seen.fill(false);
            path.clear();
            path.push(Attempt {
                left: root,
                cursor: 0,
            });

            let augmented = loop {
                let Some(attempt) = path.last_mut() else {
                    break false;
                };
                let Some(&right) = self.adjacency[attempt.left].get(attempt.cursor) else {
                    // dead end: the caller moves on to its next candidate
                    path.pop();
                    continue;
                };
                attempt.cursor += 1;
                if seen[right] {
                    continue;
                }
                seen.set(right, true);
                match match_of_right[right] {
                    None => break true,
                    Some(holder) => path.push(Attempt {
                        left: holder,
                        cursor: 0,
                    }),
                }
            };

            if augmented {
                // every attempt on the path takes the right vertex it last tried
                for attempt in &path {
                    let right = self.adjacency[attempt.left][attempt.cursor - 1];
                    match_of_left[attempt.left] = Some(right);
                    match_of_right[right] = Some(attempt.left);
                }
                trace!(left = root, length = path.len(), "augmenting path");
            }
        }

        let pairs = match_of_left
            .iter()
            .enumerate()
            .filter_map(|(left, right)| right.map(|r| (left, r)))
            .collect_vec();
        debug!(
            left = self.left_count,
            right = self.right_count,
            matched = pairs.len(),
            "bipartite matching"
        );
        Matching {
            pairs,
            match_of_left,
            match_of_right,
        }
    }

    /// The edge of [`as_flow_network`](Self::as_flow_network) that carries pair `index`.
    pub fn flow_edge_of_pair(&self, index: usize) -> EdgeIndex {
        EdgeIndex(self.left_count + index)
    }
}

/// Maximum matching between `left_count` left and `right_count` right vertices.
///
/// Every pair is validated before the search starts.
pub fn max_bipartite_matching(
    left_count: usize,
    right_count: usize,
    edges: impl IntoIterator<Item = (usize, usize)>,
) -> Result<Matching, GraphError> {
    Ok(BipartiteGraph::new(left_count, right_count, edges)?.max_matching())
}
