//! Graph edge: endpoints plus source-key to destination-key mapping.

use std::collections::BTreeMap;

use super::node::NodeIdx;

/// Source key -> destination key.
pub type KeyMapping = BTreeMap<String, String>;

/// Handle of an edge inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIdx(pub(crate) usize);

/// A directed edge. Unique per (source, destination) pair.
///
/// An empty mapping copies no data but still orders the destination after the source.
/// A mapping-less edge on an already connected pair is folded into the existing edge.
#[derive(Debug, Clone)]
pub struct Edge {
    pub(crate) src: NodeIdx,
    pub(crate) dst: NodeIdx,
    pub(crate) keys: KeyMapping,
}

impl Edge {
    pub fn src(&self) -> NodeIdx {
        self.src
    }

    pub fn dst(&self) -> NodeIdx {
        self.dst
    }

    pub fn keys(&self) -> &KeyMapping {
        &self.keys
    }

    /// True for ordering-only edges.
    pub fn is_dependency_only(&self) -> bool {
        self.keys.is_empty()
    }
}
