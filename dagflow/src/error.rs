//! Query error and the crate-wide error type.

use thiserror::Error;

use crate::graph::StructuralError;
use crate::run::{RunError, RunId};

/// Error returned by state queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("node {0} not found in the graph")]
    NodeNotFound(String),

    /// No snapshot is stored for the run (or no snapshot store is attached).
    #[error("no snapshot for run {0}")]
    RunNotFound(RunId),
}

/// Any dagflow error. For embedders that want a single error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Query(#[from] QueryError),
}
