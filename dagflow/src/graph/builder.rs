//! Graph builder: nodes + mapped edges (src → dst).
//!
//! Add nodes with `add_node`, connect them with `add_edge(src, dst, mapping)` or
//! `add_dependency(src, dst)`, then `build` to get a validated [`Graph`].

use crate::value::State;

use super::dag::Graph;
use super::spec::{EdgeSpec, GraphSpec, NodeSpec};
use super::structural_error::StructuralError;

/// Collects node and edge descriptors; `build` validates them into a [`Graph`].
///
/// Nothing is checked until `build`: ids may be added in any order and edges may
/// name nodes that are added later.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    spec: GraphSpec,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with its initial state. Duplicate ids are reported by `build`.
    pub fn add_node(&mut self, id: impl Into<String>, state: State) -> &mut Self {
        self.spec.nodes.push(NodeSpec::new(id, state));
        self
    }

    /// Adds an edge from `src` to `dst` copying each `(src_key, dst_key)` pair.
    pub fn add_edge<I, K, V>(
        &mut self,
        src: impl Into<String>,
        dst: impl Into<String>,
        keys: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.spec.edges.push(EdgeSpec::new(src, dst, keys));
        self
    }

    /// Adds an ordering-only edge: `dst` runs after `src`, no data is copied.
    pub fn add_dependency(&mut self, src: impl Into<String>, dst: impl Into<String>) -> &mut Self {
        self.add_edge(src, dst, std::iter::empty::<(String, String)>())
    }

    /// Validates the collected descriptors and builds the graph.
    ///
    /// Returns `StructuralError` on duplicate node ids, edges naming unknown nodes,
    /// mapped keys whose initial values differ in kind, or two mapped edges on one pair.
    pub fn build(self) -> Result<Graph, StructuralError> {
        self.spec.build()
    }
}
