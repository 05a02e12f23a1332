//! Inputs for a CLI run: graph and run-config files, output selection.
//!
//! Re-exports the file loaders and [`OutputSelection`].

mod files;
mod output;

pub use files::{load_graph_spec, load_run_config};
pub use output::OutputSelection;
