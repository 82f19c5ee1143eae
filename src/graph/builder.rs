use super::{EdgeIndex, EdgeRecord, EdgeVec, Graph, GraphError, IndexKind, NodeIndex, Orientation};

/// Incremental construction of a [`Graph`].
///
/// Edges may reference nodes that are added later; all endpoints are validated
/// once, in [`GraphBuilder::build`], so a rejected build stores nothing.
#[derive(Clone, Debug)]
pub struct GraphBuilder<W> {
    node_count: usize,
    orientation: Orientation,
    edges: EdgeVec<EdgeRecord<W>>,
}

impl<W> GraphBuilder<W> {
    pub fn new(orientation: impl Into<Orientation>) -> Self {
        GraphBuilder {
            node_count: 0,
            orientation: orientation.into(),
            edges: EdgeVec::new(),
        }
    }

    pub fn build(self) -> Result<Graph<W>, GraphError> {
        self.try_into()
    }

    pub fn add_node(&mut self) -> NodeIndex {
        let index = self.node_count;
        self.node_count += 1;
        NodeIndex(index)
    }

    /// Adds `n` nodes and returns the index of the first one.
    pub fn add_nodes(&mut self, n: usize) -> NodeIndex {
        let first = NodeIndex(self.node_count);
        self.node_count += n;
        first
    }

    pub fn add_edge(&mut self, source: NodeIndex, sink: NodeIndex, weight: W) -> EdgeIndex {
        self.edges.push(EdgeRecord {
            source,
            sink,
            weight,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W> TryFrom<GraphBuilder<W>> for Graph<W> {
    type Error = GraphError;

    fn try_from(builder: GraphBuilder<W>) -> Result<Self, Self::Error> {
        for record in builder.edges.values() {
            GraphError::check(IndexKind::Node, record.source.0, builder.node_count)?;
            GraphError::check(IndexKind::Node, record.sink.0, builder.node_count)?;
        }
        Ok(Graph::from_parts(
            builder.orientation,
            builder.node_count,
            builder.edges,
        ))
    }
}
