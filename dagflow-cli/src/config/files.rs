//! JSON file loaders for graph descriptors and run configs.

use std::path::Path;

use dagflow::{GraphSpec, RunConfig};
use serde::de::DeserializeOwned;

use crate::error::Error;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a [`GraphSpec`] (`{"nodes": [...], "edges": [...]}`) from `path`.
pub fn load_graph_spec(path: &Path) -> Result<GraphSpec, Error> {
    load_json(path)
}

/// Reads a [`RunConfig`] from `path`; `None` yields the default config.
pub fn load_run_config(path: Option<&Path>) -> Result<RunConfig, Error> {
    match path {
        Some(p) => load_json(p),
        None => Ok(RunConfig::default()),
    }
}
