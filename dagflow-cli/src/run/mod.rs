//! Build, run and report.
//!
//! [`execute`] works on descriptors already in memory; [`run_files`] loads them
//! from JSON files first.

use std::collections::BTreeMap;
use std::path::Path;

use dagflow::{GraphSpec, RunConfig, RunId, State};
use serde::Serialize;

use crate::config::{load_graph_spec, load_run_config, OutputSelection};
use crate::error::Error;

/// Result of one CLI run, printed as JSON.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Vec<String>>>,
    pub states: BTreeMap<String, State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaves: Option<BTreeMap<String, State>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub islands: Option<Vec<Vec<String>>>,
}

impl RunReport {
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the graph from `spec`, runs it with `config` and collects the selected output.
pub fn execute(
    spec: GraphSpec,
    config: &RunConfig,
    selection: &OutputSelection,
) -> Result<RunReport, Error> {
    let mut graph = spec.build()?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph built"
    );

    let levels = if selection.levels {
        Some(graph.levels(config)?)
    } else {
        None
    };
    let run_id = graph.run(config)?;

    let states = if selection.nodes.is_empty() {
        graph.states()
    } else {
        selection
            .nodes
            .iter()
            .map(|id| -> Result<(String, State), Error> {
                Ok((id.clone(), graph.state(id)?.clone()))
            })
            .collect::<Result<_, _>>()?
    };
    let leaves = selection.leaves.then(|| graph.leaf_outputs());
    let islands = if selection.islands {
        Some(graph.islands(config)?)
    } else {
        None
    };

    Ok(RunReport {
        run_id,
        levels,
        states,
        leaves,
        islands,
    })
}

/// Loads `graph_path` (and `config_path`, if given) and calls [`execute`].
pub fn run_files(
    graph_path: &Path,
    config_path: Option<&Path>,
    selection: &OutputSelection,
) -> Result<RunReport, Error> {
    let spec = load_graph_spec(graph_path)?;
    let config = load_run_config(config_path)?;
    execute(spec, &config, selection)
}
