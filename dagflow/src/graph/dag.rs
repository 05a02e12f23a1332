//! Validated graph: node and edge arenas plus state queries.
//!
//! Built by `GraphBuilder::build` or `GraphSpec::build`. Runs (`Graph::run`, in
//! `crate::run`) mutate node state in place; the queries here read it back.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::error::QueryError;
use crate::run::RunId;
use crate::snapshot::SnapshotStore;
use crate::value::State;

use super::edge::{Edge, EdgeIdx};
use super::node::{Node, NodeIdx};

/// A validated DAG description with live node state.
///
/// Owns every node and edge. Node handles are in ascending id order. Acyclicity is
/// not checked here; every run checks it first.
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) index: HashMap<String, NodeIdx>,
    /// When set, every successful run stores a snapshot of all node states.
    pub(crate) snapshots: Option<Arc<dyn SnapshotStore>>,
}

impl Graph {
    pub(crate) fn from_arena(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        index: HashMap<String, NodeIdx>,
    ) -> Self {
        Self {
            nodes,
            edges,
            index,
            snapshots: None,
        }
    }

    /// Attaches a snapshot store. Later runs record their final states under their run id,
    /// readable through [`Graph::state_at`].
    pub fn with_snapshot_store(self, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            snapshots: Some(store),
            ..self
        }
    }

    /// Returns the snapshot store, if one was attached.
    pub fn snapshot_store(&self) -> Option<&Arc<dyn SnapshotStore>> {
        self.snapshots.as_ref()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.idx_of(id).map(|idx| &self.nodes[idx.0])
    }

    pub fn idx_of(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn node_at(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.0]
    }

    pub fn edge_at(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx.0]
    }

    pub(crate) fn id_of(&self, idx: NodeIdx) -> &str {
        &self.nodes[idx.0].id
    }

    /// Current state of `node_id`.
    pub fn state(&self, node_id: &str) -> Result<&State, QueryError> {
        self.node(node_id)
            .map(Node::state)
            .ok_or_else(|| QueryError::NodeNotFound(node_id.to_string()))
    }

    /// State of every node with no outgoing edges, keyed by id.
    ///
    /// Works over the full graph; enable/disable filters of past runs do not apply.
    pub fn leaf_outputs(&self) -> BTreeMap<String, State> {
        self.nodes
            .iter()
            .filter(|n| n.is_leaf())
            .map(|n| (n.id.clone(), n.state.clone()))
            .collect()
    }

    /// State of `node_id` as recorded at the end of run `run_id`.
    ///
    /// Requires a snapshot store (see [`Graph::with_snapshot_store`]).
    pub fn state_at(&self, run_id: &RunId, node_id: &str) -> Result<State, QueryError> {
        let snapshot = self
            .snapshots
            .as_ref()
            .and_then(|store| store.get(run_id))
            .ok_or(QueryError::RunNotFound(*run_id))?;
        snapshot
            .state(node_id)
            .cloned()
            .ok_or_else(|| QueryError::NodeNotFound(node_id.to_string()))
    }

    /// Copies every node's current state, keyed by id.
    pub fn states(&self) -> BTreeMap<String, State> {
        self.nodes
            .iter()
            .map(|n| (n.id.clone(), n.state.clone()))
            .collect()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("snapshots", &self.snapshots.is_some())
            .finish()
    }
}
