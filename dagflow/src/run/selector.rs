//! Working set selection from a run config's enable / disable lists.

use std::collections::HashSet;

use crate::graph::{Graph, NodeIdx};

use super::config::RunConfig;
use super::error::RunError;

/// Nodes taking part in one run, indexed by node handle.
///
/// Edges whose destination is outside the set are inert for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    members: Vec<bool>,
    len: usize,
}

impl WorkingSet {
    /// Selects the working set for `config`.
    ///
    /// - enable list: exactly the listed ids that exist;
    /// - disable list: every node except the listed ones;
    /// - neither: every node.
    ///
    /// Fails with `ConflictingNodeFilter` when both lists are given.
    pub fn select(graph: &Graph, config: &RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        let n = graph.node_count();
        let members = if let Some(enabled) = config.enabled() {
            let mut members = vec![false; n];
            for idx in enabled.iter().filter_map(|id| graph.idx_of(id)) {
                members[idx.index()] = true;
            }
            members
        } else if let Some(disabled) = config.disabled() {
            let disabled: HashSet<&str> = disabled.iter().map(String::as_str).collect();
            graph.nodes().map(|node| !disabled.contains(node.id())).collect()
        } else {
            vec![true; n]
        };
        let len = members.iter().filter(|m| **m).count();
        Ok(Self { members, len })
    }

    pub fn contains(&self, idx: NodeIdx) -> bool {
        self.members.get(idx.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| NodeIdx(i))
    }
}
