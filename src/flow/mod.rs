//! # Maximum flow
//!
//! Edmonds-Karp: augment along a *shortest* residual path, found by breadth-first
//! search, until none is left. Shortest paths bound the number of augmentations
//! by `O(V E)`, for `O(V E^2)` overall.
//!
//! The residual network reuses the half-edge layout of [`Graph`]: every hedge is
//! an arc leaving the node it is attached to. The source hedge of an edge is its
//! forward arc and the sink hedge the mirrored reverse arc, so the two arcs of
//! an edge are always `arc` and `arc.inv()`. A directed edge starts with residual
//! `(capacity, 0)` on that pair, an undirected one with `(capacity, capacity)`.
//!
//! Pushing flow moves capacity from one arc of the pair to the other, so
//! `residual(a) + residual(a.inv()) == original(a) + original(a.inv())` holds
//! throughout.
//!
//! ```
//! use arclink::graph::{EdgeIndex, Graph, NodeIndex};
//!
//! let graph: Graph<u32> =
//!     Graph::build(4, [(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)], true).unwrap();
//! let flow = graph.max_flow(0, 3).unwrap();
//! assert_eq!(flow.value, 5);
//!
//! let cut = flow.min_cut();
//! assert_eq!(cut.capacity, 5);
//! assert_eq!(cut.source_side, vec![NodeIndex(0)]);
//! assert_eq!(cut.cut_edges, vec![EdgeIndex(0), EdgeIndex(1)]);
//! ```

use std::collections::VecDeque;
use std::fmt::Display;

use bitvec::prelude::*;
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::graph::{
    EdgeIndex, Flow, Graph, GraphError, Hedge, NodeIndex, NodeVec, Orientation,
};
use crate::num_traits::Weight;

pub mod matching;

pub use matching::{max_bipartite_matching, BipartiteGraph, Matching};

/// Residual capacities of every arc of a graph, alongside the graph they belong to.
#[derive(Clone, Debug)]
pub struct ResidualNetwork<'a, W> {
    graph: &'a Graph<W>,
    /// Indexed by the arc's hedge.
    residual: Vec<W>,
}

/// A snapshot of one arc, as yielded by [`ResidualNetwork::arcs`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResidualArc<W> {
    pub arc: Hedge,
    pub tail: NodeIndex,
    pub head: NodeIndex,
    pub original: W,
    pub residual: W,
}

impl<'a, W: Weight> ResidualNetwork<'a, W> {
    fn new(graph: &'a Graph<W>) -> Self {
        let mut residual = Vec::with_capacity(graph.hedge_count());
        for (_, record) in graph.edges() {
            residual.push(record.weight);
            residual.push(match graph.orientation() {
                Orientation::Directed => W::zero(),
                Orientation::Undirected => record.weight,
            });
        }
        ResidualNetwork { graph, residual }
    }

    pub fn graph(&self) -> &'a Graph<W> {
        self.graph
    }

    /// Capacity of `arc` before any flow was pushed.
    pub fn original(&self, arc: Hedge) -> W {
        if arc.is_source() || !self.graph.is_directed() {
            *self.graph.weight(arc.edge())
        } else {
            W::zero()
        }
    }

    /// Capacity still available on `arc`.
    pub fn residual(&self, arc: Hedge) -> W {
        self.residual[arc.0]
    }

    /// Flow currently carried by `arc`, zero when the net flow on its edge runs
    /// the other way.
    pub fn arc_flow(&self, arc: Hedge) -> W {
        let original = self.original(arc);
        let residual = self.residual(arc);
        if residual < original {
            original - residual
        } else {
            W::zero()
        }
    }

    /// Net flow along `edge` in its stated direction, from source to sink.
    pub fn flow_on(&self, edge: EdgeIndex) -> W {
        self.arc_flow(Hedge::source_of(edge))
    }

    /// Net flow along `edge` against its stated direction. Only an undirected
    /// edge can carry any.
    pub fn reverse_flow_on(&self, edge: EdgeIndex) -> W {
        self.arc_flow(Hedge::sink_of(edge))
    }

    pub fn arcs(&self) -> impl Iterator<Item = ResidualArc<W>> + '_ {
        (0..self.residual.len()).map(Hedge).map(|arc| ResidualArc {
            arc,
            tail: self.graph.node_id(arc),
            head: self.graph.involved_node_id(arc),
            original: self.original(arc),
            residual: self.residual(arc),
        })
    }

    /// Whether every arc pair still sums to its original total capacity.
    pub fn is_conserved(&self) -> bool {
        self.graph.edges().all(|(edge, _)| {
            let forward = Hedge::source_of(edge);
            let reverse = forward.inv();
            self.residual(forward) + self.residual(reverse)
                == self.original(forward) + self.original(reverse)
        })
    }

    /// Breadth-first search over arcs with positive residual capacity.
    ///
    /// Returns the visited set and, for every visited node but `source`, the arc
    /// it was first reached through. Stops as soon as `target` is dequeued.
    fn search(
        &self,
        source: NodeIndex,
        target: Option<NodeIndex>,
    ) -> (BitVec, NodeVec<Option<Hedge>>) {
        let n = self.graph.node_count();
        let mut visited = bitvec![0; n];
        let mut via: NodeVec<Option<Hedge>> = NodeVec::filled(n, None);
        let mut queue = VecDeque::from([source]);
        visited.set(source.0, true);

        while let Some(u) = queue.pop_front() {
            if Some(u) == target {
                break;
            }
            for &arc in self.graph.crown(u) {
                let v = self.graph.involved_node_id(arc);
                if visited[v.0] || !self.residual(arc).is_positive() {
                    continue;
                }
                visited.set(v.0, true);
                via[v] = Some(arc);
                queue.push_back(v);
            }
        }
        (visited, via)
    }

    /// Arcs of a fewest-arc residual path from `source` to `sink`, in path order.
    fn shortest_path(&self, source: NodeIndex, sink: NodeIndex) -> Option<Vec<Hedge>> {
        let (visited, via) = self.search(source, Some(sink));
        if !visited[sink.0] {
            return None;
        }
        let mut path = Vec::new();
        let mut node = sink;
        while let Some(arc) = via[node] {
            path.push(arc);
            node = self.graph.node_id(arc);
        }
        path.reverse();
        Some(path)
    }

    fn push(&mut self, path: &[Hedge], amount: W) {
        for &arc in path {
            self.residual[arc.0] -= amount;
            self.residual[arc.inv().0] += amount;
        }
    }
}

#[derive(Clone, Debug)]
pub struct MaxFlow<'a, W> {
    pub value: W,
    pub source: NodeIndex,
    pub sink: NodeIndex,
    /// Final residual capacities.
    pub residual: ResidualNetwork<'a, W>,
}

/// A minimum `source`-`sink` edge cut.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinCut<W> {
    /// Nodes still reachable from the source in the final residual network, sorted.
    pub source_side: Vec<NodeIndex>,
    /// Edges with capacity leading out of `source_side`, sorted.
    pub cut_edges: Vec<EdgeIndex>,
    pub capacity: W,
}

impl<W: Display> Display for MinCut<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "capacity {} across [{}] leaving {{{}}}",
            self.capacity,
            self.cut_edges.iter().join(", "),
            self.source_side.iter().join(",")
        )
    }
}

impl<W: Weight> MaxFlow<'_, W> {
    /// The cut read off the final residual network. Its capacity equals [`MaxFlow::value`].
    pub fn min_cut(&self) -> MinCut<W> {
        let (reachable, _) = self.residual.search(self.source, None);
        let graph = self.residual.graph();
        let mut cut_edges = Vec::new();
        let mut capacity = W::zero();

        for (edge, record) in graph.edges() {
            let forward = Hedge::source_of(edge);
            for arc in [forward, forward.inv()] {
                let crosses = reachable[graph.node_id(arc).0]
                    && !reachable[graph.involved_node_id(arc).0];
                let original = self.residual.original(arc);
                if crosses && original.is_positive() && !record.is_self_loop() {
                    capacity += original;
                    if cut_edges.last() != Some(&edge) {
                        cut_edges.push(edge);
                    }
                }
            }
        }

        MinCut {
            source_side: reachable.iter_ones().map(NodeIndex).collect(),
            cut_edges,
            capacity,
        }
    }
}

impl<W: Weight> Graph<W> {
    /// Maximum flow from `source` to `sink`, with edge weights as capacities.
    ///
    /// Indices, then the source/sink pair, then capacities are validated before
    /// any residual state exists. Capacities whose sums would not fit in `W`
    /// (an undirected arc pair, or the capacity around both `source` and `sink`)
    /// are rejected with [`GraphError::InvalidCapacity`] at the same point.
    pub fn max_flow(&self, source: usize, sink: usize) -> Result<MaxFlow<'_, W>, GraphError> {
        let source = self.check_node(source)?;
        let sink = self.check_node(sink)?;
        if source == sink {
            return Err(GraphError::SourceIsSink { node: source });
        }
        self.validate_capacities()?;
        self.check_flow_headroom(source, sink)?;

        let mut residual = ResidualNetwork::new(self);
        let mut value = W::zero();
        let mut augmentations = 0usize;

        while let Some(path) = residual.shortest_path(source, sink) {
            let Some(bottleneck) = path
                .iter()
                .map(|arc| residual.residual(*arc))
                .reduce(W::min_of)
            else {
                break;
            };
            residual.push(&path, bottleneck);
            value += bottleneck;
            augmentations += 1;
            trace!(%bottleneck, arcs = path.len(), "augmenting path");
        }

        debug!(%source, %sink, %value, augmentations, "max flow");
        Ok(MaxFlow {
            value,
            source,
            sink,
            residual,
        })
    }
}

impl<W: Weight> Graph<W> {
    /// Checks that every sum Edmonds-Karp forms fits in `W`.
    ///
    /// A residual never exceeds the total of its arc pair, `cap + cap` for an
    /// undirected edge. The flow value never exceeds the capacity leaving
    /// `source` nor the capacity entering `sink`, so it is enough for one of
    /// the two to fit.
    fn check_flow_headroom(&self, source: NodeIndex, sink: NodeIndex) -> Result<(), GraphError> {
        for (edge, record) in self.edges() {
            let reverse = match self.orientation() {
                Orientation::Directed => W::zero(),
                Orientation::Undirected => record.weight,
            };
            record
                .weight
                .checked_add(reverse)
                .ok_or(GraphError::InvalidCapacity { edge })?;
        }

        let out_of_source = self.capacity_through(source, Flow::Source);
        let into_sink = self.capacity_through(sink, Flow::Sink);
        match (out_of_source, into_sink) {
            (Err(edge), Err(_)) => Err(GraphError::InvalidCapacity { edge }),
            _ => Ok(()),
        }
    }

    /// Total capacity of the arcs leaving (`Flow::Source`) or entering
    /// (`Flow::Sink`) `node`, or the edge at which that total overflows.
    fn capacity_through(&self, node: NodeIndex, flow: Flow) -> Result<W, EdgeIndex> {
        let mut total = W::zero();
        for &hedge in self.crown(node) {
            let arc = match flow {
                Flow::Source => hedge,
                Flow::Sink => hedge.inv(),
            };
            let record = self.record(arc.edge());
            if record.is_self_loop() || !self.orientation().allows(arc) {
                continue;
            }
            total = total.checked_add(record.weight).ok_or(arc.edge())?;
        }
        Ok(total)
    }
}
