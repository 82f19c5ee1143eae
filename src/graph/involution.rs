use std::ops::Neg;

use derive_more::{From, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::EdgeIndex;

/// One side of an edge.
///
/// Every edge `e` owns exactly two hedges: `Hedge(2e)` sits at the source and
/// `Hedge(2e + 1)` at the sink. The pairing is an involution, `inv(inv(h)) == h`,
/// and never has fixed points: there are no dangling half-edges in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hedge(pub usize);

impl Hedge {
    pub fn source_of(edge: EdgeIndex) -> Self {
        Hedge(edge.0 << 1)
    }

    pub fn sink_of(edge: EdgeIndex) -> Self {
        Hedge((edge.0 << 1) | 1)
    }

    /// Gives the involved hedge: the sink for a source and vice versa.
    #[inline]
    pub fn inv(self) -> Self {
        Hedge(self.0 ^ 1)
    }

    #[inline]
    pub fn edge(self) -> EdgeIndex {
        EdgeIndex(self.0 >> 1)
    }

    #[inline]
    pub fn flow(self) -> Flow {
        if self.0 & 1 == 0 {
            Flow::Source
        } else {
            Flow::Sink
        }
    }

    pub fn is_source(self) -> bool {
        self.flow() == Flow::Source
    }
}

impl std::fmt::Display for Hedge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Flow {
    Source, // outgoing
    Sink,   // incoming
}

impl Neg for Flow {
    type Output = Flow;

    fn neg(self) -> Self::Output {
        match self {
            Flow::Source => Flow::Sink,
            Flow::Sink => Flow::Source,
        }
    }
}

impl From<bool> for Flow {
    fn from(value: bool) -> Self {
        if value {
            Flow::Source
        } else {
            Flow::Sink
        }
    }
}

/// Edge semantics of a whole graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Only the source hedge of an edge can be walked.
    Directed,
    /// Both hedges of an edge can be walked.
    #[default]
    Undirected,
}

impl Orientation {
    /// Whether a walk may leave its node through `hedge`.
    #[inline]
    pub fn allows(self, hedge: Hedge) -> bool {
        match self {
            Orientation::Directed => hedge.is_source(),
            Orientation::Undirected => true,
        }
    }
}

impl From<bool> for Orientation {
    fn from(directed: bool) -> Self {
        if directed {
            Orientation::Directed
        } else {
            Orientation::Undirected
        }
    }
}
