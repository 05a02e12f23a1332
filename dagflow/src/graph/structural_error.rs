//! Graph construction error.
//!
//! Returned by `GraphBuilder::build` / `GraphSpec::build` when the node and edge
//! descriptors do not describe a valid graph.

use thiserror::Error;

use crate::value::ValueKind;

/// Error when building a graph (duplicate ids, dangling edges, mismatched key kinds,
/// duplicate edges).
///
/// Validation runs once, at construction. It never mutates node state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    /// Two node descriptors share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// An edge names a source or destination that is not a node of the graph.
    #[error("edge {src} -> {dst} references unknown node {missing}")]
    DanglingEdge {
        src: String,
        dst: String,
        missing: String,
    },

    /// Both endpoints already hold a value for a mapped key pair and the kinds differ,
    /// or the destination value is null.
    #[error("incompatible data types for {src_key} -> {dst_key} ({src_kind} -> {dst_kind})")]
    TypeMismatch {
        src_key: String,
        dst_key: String,
        src_kind: ValueKind,
        dst_kind: ValueKind,
    },

    /// More than one edge with the same (source, destination) pair.
    #[error("duplicate edge {src} -> {dst}")]
    DuplicateEdge { src: String, dst: String },
}
