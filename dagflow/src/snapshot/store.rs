//! Snapshot store trait.

use crate::run::RunId;

use super::run_snapshot::{RunSnapshot, SnapshotListItem};

/// Keeps run snapshots keyed by run id.
///
/// **Interaction**: `Graph::run` calls `put` after a successful run when a store is
/// attached; `Graph::state_at` calls `get`.
pub trait SnapshotStore: Send + Sync {
    /// Stores `snapshot`, replacing any snapshot with the same run id.
    fn put(&self, snapshot: RunSnapshot);

    fn get(&self, run_id: &RunId) -> Option<RunSnapshot>;

    /// Stored runs, oldest first.
    fn list(&self) -> Vec<SnapshotListItem>;

    /// Removes a snapshot; returns whether it existed.
    fn remove(&self, run_id: &RunId) -> bool;
}
