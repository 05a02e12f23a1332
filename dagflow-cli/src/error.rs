//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

/// Error from loading inputs or running the graph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] dagflow::Error),
}

impl From<dagflow::StructuralError> for Error {
    fn from(e: dagflow::StructuralError) -> Self {
        Error::Engine(e.into())
    }
}

impl From<dagflow::RunError> for Error {
    fn from(e: dagflow::RunError) -> Self {
        Error::Engine(e.into())
    }
}

impl From<dagflow::QueryError> for Error {
    fn from(e: dagflow::QueryError) -> Self {
        Error::Engine(e.into())
    }
}
