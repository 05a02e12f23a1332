//! # dagflow
//!
//! Data-flow execution over directed acyclic graphs. Nodes hold key-value state;
//! edges declare which keys of a source node's state are copied into which keys of
//! a destination node's state. A run computes, level by level, the final state of
//! every node from root inputs, overwrites and an optional enable / disable filter.
//!
//! ## Main Modules
//!
//! - [`graph`]: `GraphBuilder`, `GraphSpec`, `Graph` — build and validate graphs,
//!   query node state, leaf outputs and islands.
//! - [`run`]: `RunConfig`, `RunId`, `Graph::run` — working set, leveling, propagation.
//! - [`snapshot`]: optional per-run snapshots keyed by `RunId`.
//! - [`value`]: `Value`, `ValueKind`, `State`.
//!
//! ## Propagation rules
//!
//! 1. Root inputs are merged into working nodes.
//! 2. Overwrites are merged into working nodes, before any propagation.
//! 3. Levels are processed in ascending order, nodes within a level by ascending id.
//!    Each node receives the mapped keys of its working predecessors. When several
//!    edges target the same key, the source with the higher level wins; on a tie,
//!    the smaller source id wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use dagflow::{state_from, GraphBuilder, RunConfig, Value};
//!
//! let mut builder = GraphBuilder::new();
//! builder
//!     .add_node("A", state_from([("key", Value::from(10))]))
//!     .add_node("B", state_from([("key", Value::from(0))]))
//!     .add_node("C", state_from([("key", Value::from(0))]))
//!     .add_edge("A", "B", [("key", "key")])
//!     .add_edge("B", "C", [("key", "key")]);
//! let mut graph = builder.build()?;
//!
//! let run_id = graph.run(&RunConfig::new().with_root_input("A", "key", 10))?;
//! assert_eq!(graph.state("C")?["key"], Value::Int(10));
//! # let _ = run_id;
//! # Ok::<(), dagflow::Error>(())
//! ```

pub mod error;
pub mod graph;
pub mod logging;
pub mod run;
pub mod snapshot;
pub mod value;

pub use error::{Error, QueryError};
pub use graph::{
    CycleError, Edge, EdgeSpec, Graph, GraphBuilder, GraphSpec, KeyMapping, Node, NodeSpec,
    StructuralError,
};
pub use run::{RunConfig, RunError, RunId, WorkingSet};
pub use snapshot::{MemorySnapshotStore, RunSnapshot, SnapshotListItem, SnapshotStore};
pub use value::{state_from, State, Value, ValueKind};
