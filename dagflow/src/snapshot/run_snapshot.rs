//! Snapshot of all node states at the end of one run.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::run::RunId;
use crate::value::State;

/// Every node's state, keyed by id, as it was when run `run_id` finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub run_id: RunId,
    pub created_at: DateTime<Utc>,
    pub states: BTreeMap<String, State>,
}

/// Item returned by `SnapshotStore::list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotListItem {
    pub run_id: RunId,
    pub created_at: DateTime<Utc>,
}

impl RunSnapshot {
    /// Copies the current state of every node in `graph`.
    pub fn capture(run_id: RunId, graph: &Graph) -> Self {
        Self {
            run_id,
            created_at: Utc::now(),
            states: graph.states(),
        }
    }

    pub fn state(&self, node_id: &str) -> Option<&State> {
        self.states.get(node_id)
    }

    pub fn list_item(&self) -> SnapshotListItem {
        SnapshotListItem {
            run_id: self.run_id,
            created_at: self.created_at,
        }
    }
}
