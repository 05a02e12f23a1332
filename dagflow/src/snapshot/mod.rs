//! # Run snapshots
//!
//! Runs mutate node state in place, so by default a run id cannot be used to read
//! back the state of an earlier run. A [`SnapshotStore`] attached with
//! `Graph::with_snapshot_store` records a [`RunSnapshot`] after every successful
//! run; `Graph::state_at(run_id, node_id)` reads from it.
//!
//! | Type                    | Persistence | Use case        |
//! |-------------------------|-------------|-----------------|
//! | [`MemorySnapshotStore`] | In-memory   | Embedding, tests |
//!
//! Stores are `Send + Sync` and can be shared between graphs through `Arc`.

mod memory_store;
mod run_snapshot;
mod store;

pub use memory_store::MemorySnapshotStore;
pub use run_snapshot::{RunSnapshot, SnapshotListItem};
pub use store::SnapshotStore;
