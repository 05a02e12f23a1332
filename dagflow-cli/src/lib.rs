//! dagflow-cli library: load a graph and a run config from JSON, run, report.
//!
//! The `dagflow` binary is a thin wrapper around [`run_files`]; other crates can
//! call [`execute`] with descriptors they already hold.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dagflow_cli::{run_files, OutputSelection};
//!
//! let report = run_files("graph.json".as_ref(), None, &OutputSelection::default())?;
//! println!("{}", report.to_json_pretty()?);
//! # Ok::<(), dagflow_cli::Error>(())
//! ```

mod config;
mod error;
mod logging;
mod run;

pub use config::{load_graph_spec, load_run_config, OutputSelection};
pub use error::Error;
pub use logging::init_tracing;
pub use run::{execute, run_files, RunReport};

#[cfg(test)]
mod tests;
