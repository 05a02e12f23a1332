//! Per-run snapshots through a snapshot store.

use std::sync::Arc;

use dagflow::{MemorySnapshotStore, QueryError, RunConfig, RunId, SnapshotStore, Value};

use crate::common::chain;

#[test]
fn state_at_reads_each_run_separately() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut g = chain().with_snapshot_store(store.clone());

    let first = g.run(&RunConfig::new().with_root_input("A", "key", 1)).unwrap();
    let second = g.run(&RunConfig::new().with_root_input("A", "key", 2)).unwrap();

    assert_eq!(g.state_at(&first, "C").unwrap()["key"], Value::Int(1));
    assert_eq!(g.state_at(&second, "C").unwrap()["key"], Value::Int(2));
    assert_eq!(g.state("C").unwrap()["key"], Value::Int(2));
    assert_eq!(store.list().len(), 2);
}

#[test]
fn failed_run_stores_no_snapshot() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut g = chain().with_snapshot_store(store.clone());
    let cfg = RunConfig::new().enable(["A"]).disable(["B"]);
    assert!(g.run(&cfg).is_err());
    assert!(store.is_empty());
}

#[test]
fn state_at_unknown_run_or_node() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut g = chain().with_snapshot_store(store);
    let run = g.run(&RunConfig::new()).unwrap();

    let unknown = RunId::new();
    assert_eq!(
        g.state_at(&unknown, "A").unwrap_err(),
        QueryError::RunNotFound(unknown)
    );
    assert_eq!(
        g.state_at(&run, "Z").unwrap_err(),
        QueryError::NodeNotFound("Z".into())
    );
}

/// **Scenario**: One store shared by two graphs keeps both graphs' runs.
#[test]
fn store_shared_between_graphs() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut g1 = chain().with_snapshot_store(store.clone());
    let mut g2 = chain().with_snapshot_store(store.clone());
    let r1 = g1.run(&RunConfig::new()).unwrap();
    let r2 = g2.run(&RunConfig::new()).unwrap();
    assert!(store.get(&r1).is_some());
    assert!(store.get(&r2).is_some());
    assert!(g1.snapshot_store().is_some());
}
