//! In-memory snapshot store.

use dashmap::DashMap;

use crate::run::RunId;

use super::run_snapshot::{RunSnapshot, SnapshotListItem};
use super::store::SnapshotStore;

/// Keeps snapshots in a concurrent map. Lost when dropped.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: DashMap<RunId, RunSnapshot>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn put(&self, snapshot: RunSnapshot) {
        self.snapshots.insert(snapshot.run_id, snapshot);
    }

    fn get(&self, run_id: &RunId) -> Option<RunSnapshot> {
        self.snapshots.get(run_id).map(|s| s.value().clone())
    }

    fn list(&self) -> Vec<SnapshotListItem> {
        let mut items: Vec<SnapshotListItem> =
            self.snapshots.iter().map(|s| s.value().list_item()).collect();
        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.run_id.cmp(&b.run_id))
        });
        items
    }

    fn remove(&self, run_id: &RunId) -> bool {
        self.snapshots.remove(run_id).is_some()
    }
}
