//! Run error.

use thiserror::Error;

use crate::graph::CycleError;

/// Error returned by `Graph::run` and by queries that select a working set.
///
/// Raised before any node state is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    /// Both an enable list and a disable list were given.
    #[error("cannot provide both enable_list and disable_list")]
    ConflictingNodeFilter,

    #[error(transparent)]
    Cycle(#[from] CycleError),
}
