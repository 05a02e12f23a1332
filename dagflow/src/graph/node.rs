//! Graph node: id, state and incident edge handles.

use crate::value::State;

use super::edge::EdgeIdx;

/// Handle of a node inside its graph's arena.
///
/// Handles are assigned in ascending node-id order, so comparing two handles
/// compares their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub(crate) usize);

impl NodeIdx {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the graph.
///
/// Holds its key-value state and the handles of its incoming and outgoing edges.
/// Edges are owned by the graph; the handle lists are used for traversal only.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: String,
    pub(crate) state: State,
    pub(crate) paths_in: Vec<EdgeIdx>,
    pub(crate) paths_out: Vec<EdgeIdx>,
}

impl Node {
    pub(crate) fn new(id: String, state: State) -> Self {
        Self {
            id,
            state,
            paths_in: Vec::new(),
            paths_out: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current state. Reflects the most recent run.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn incoming(&self) -> &[EdgeIdx] {
        &self.paths_in
    }

    pub fn outgoing(&self) -> &[EdgeIdx] {
        &self.paths_out
    }

    /// True when the node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.paths_out.is_empty()
    }
}
