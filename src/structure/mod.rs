//! # Structural analysis
//!
//! Strongly connected components, bridges and articulation points, all read off
//! the discovery order and low-link values of a depth-first search.
//!
//! SCCs follow the graph's [`Orientation`](crate::graph::Orientation). Bridges and
//! articulation points are properties of the underlying undirected structure and
//! are computed on it for directed graphs as well.
//!
//! ```
//! use arclink::graph::{EdgeIndex, Graph, NodeIndex};
//! use arclink::structure::AnalysisMode;
//!
//! // two triangles sharing node 2
//! let graph: Graph<u32> =
//!     Graph::unweighted(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)], false).unwrap();
//! let report = graph.analyze_structure(AnalysisMode::All);
//!
//! assert_eq!(report.articulation_points, Some(vec![NodeIndex(2)]));
//! assert_eq!(report.bridges, Some(vec![]));
//! assert_eq!(report.sccs.map(|s| s.len()), Some(1));
//! ```

use std::fmt::Display;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{EdgeIndex, Graph, NodeIndex};

pub mod lowlink;
mod cut;
mod scc;

pub use lowlink::LowLinks;
pub use scc::SccDecomposition;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalysisMode {
    Scc,
    Bridges,
    ArticulationPoints,
    #[default]
    All,
}

impl AnalysisMode {
    fn wants_scc(self) -> bool {
        matches!(self, AnalysisMode::Scc | AnalysisMode::All)
    }

    fn wants_cut(self) -> bool {
        !matches!(self, AnalysisMode::Scc)
    }
}

/// Result of [`Graph::analyze_structure`]. Anything the mode did not ask for is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructureReport {
    pub sccs: Option<SccDecomposition>,
    /// Sorted by edge index.
    pub bridges: Option<Vec<EdgeIndex>>,
    /// Sorted by node index.
    pub articulation_points: Option<Vec<NodeIndex>>,
}

impl Display for StructureReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(sccs) = &self.sccs {
            parts.push(format!(
                "sccs: {}",
                sccs.components
                    .iter()
                    .map(|c| format!("{{{}}}", c.iter().sorted().join(",")))
                    .join(" ")
            ));
        }
        if let Some(bridges) = &self.bridges {
            parts.push(format!("bridges: {}", bridges.iter().join(",")));
        }
        if let Some(points) = &self.articulation_points {
            parts.push(format!("articulation points: {}", points.iter().join(",")));
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl<W> Graph<W> {
    pub fn analyze_structure(&self, mode: AnalysisMode) -> StructureReport {
        let mut report = StructureReport::default();

        if mode.wants_cut() {
            let cut = cut::traverse(self);
            if mode.wants_scc() && !self.is_directed() {
                // undirected: the DFS trees are the components
                report.sccs = Some(SccDecomposition::from_components(
                    self.node_count(),
                    cut.trees,
                ));
            }
            if mode != AnalysisMode::ArticulationPoints {
                report.bridges = Some(cut.bridges);
            }
            if mode != AnalysisMode::Bridges {
                report.articulation_points = Some(cut.articulation_points);
            }
        }
        if mode.wants_scc() && report.sccs.is_none() {
            report.sccs = Some(scc::tarjan(self).0);
        }

        debug!(
            ?mode,
            sccs = report.sccs.as_ref().map(SccDecomposition::len),
            bridges = report.bridges.as_ref().map(Vec::len),
            articulation_points = report.articulation_points.as_ref().map(Vec::len),
            "structure analysed"
        );
        report
    }

    pub fn strongly_connected_components(&self) -> SccDecomposition {
        scc::tarjan(self).0
    }

    pub fn bridges(&self) -> Vec<EdgeIndex> {
        cut::traverse(self).bridges
    }

    pub fn articulation_points(&self) -> Vec<NodeIndex> {
        cut::traverse(self).articulation_points
    }

    /// Discovery order and low-link values of the undirected traversal behind
    /// [`Graph::bridges`] and [`Graph::articulation_points`].
    pub fn low_links(&self) -> LowLinks {
        cut::traverse(self).links
    }

    /// Discovery order and low-link values of the oriented traversal behind
    /// [`Graph::strongly_connected_components`].
    pub fn scc_low_links(&self) -> LowLinks {
        scc::tarjan(self).1
    }
}
