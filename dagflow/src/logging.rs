//! Logging for graph runs.
//!
//! Structured `tracing` events for run start/end, leveling, per-node propagation
//! and snapshots. The library never installs a subscriber; embedders do.

use crate::run::{RunError, RunId};

/// Log run start.
pub fn log_run_start(run_id: &RunId, nodes: usize) {
    tracing::info!(%run_id, nodes, "Starting graph run");
}

/// Log the level partition size of a run.
pub fn log_levels(run_id: &RunId, levels: usize, working_nodes: usize) {
    tracing::debug!(%run_id, levels, working_nodes, "Working set leveled");
}

/// Log values pulled into a node during propagation.
pub fn log_node_propagated(node_id: &str, keys: usize) {
    tracing::trace!(node_id, keys, "Propagated into node");
}

/// Log run completion.
pub fn log_run_complete(run_id: &RunId, writes: usize) {
    tracing::info!(%run_id, writes, "Graph run complete");
}

/// Log a failed run.
pub fn log_run_error(run_id: &RunId, error: &RunError) {
    tracing::error!(%run_id, %error, "Graph run failed");
}

pub fn log_snapshot_saved(run_id: &RunId) {
    tracing::debug!(%run_id, "Run snapshot saved");
}
