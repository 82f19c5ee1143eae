//! # Arclink
//!
//! Arclink is a Rust library for connectivity questions on graphs: which nodes
//! belong together, which edges and nodes hold a graph together, and how much
//! can flow through it.
//!
//! - [`union_find`]: disjoint sets with union by rank and path compression.
//! - [`spanning`]: minimum spanning forests (Kruskal).
//! - [`structure`]: strongly connected components, bridges and articulation
//!   points from one low-link framework.
//! - [`flow`]: Edmonds-Karp maximum flow, minimum cuts and bipartite matching.
//!
//! Everything operates on an immutable [`Graph`] whose edges are stored as pairs of
//! half-edges. Analyses borrow the graph and own their auxiliary state, so a single
//! graph can be analysed from several threads at once. Depth-first traversals use
//! explicit work stacks and never recurse.
//!
//! ```
//! use arclink::Graph;
//!
//! let graph: Graph<u32> = Graph::build(
//!     4,
//!     [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
//!     false,
//! )?;
//! assert_eq!(graph.spanning_forest()?.total_weight, 19);
//! assert_eq!(graph.max_flow(0, 3)?.value, 5 + 4 + 10);
//! # Ok::<(), arclink::GraphError>(())
//! ```

pub mod flow;
pub mod graph;
pub mod num_traits;
pub mod spanning;
pub mod structure;
pub mod typed_vec;
pub mod union_find;

pub use graph::{EdgeIndex, Graph, GraphError, NodeIndex, Orientation};

pub type Result<T> = std::result::Result<T, GraphError>;
