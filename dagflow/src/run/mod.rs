//! Running a graph: select the working set, seed inputs, level, propagate.
//!
//! `Graph::run` takes a [`RunConfig`] and returns a [`RunId`]. Config and cycle
//! checks happen before any state is touched, so a failed run leaves every node
//! as it was. Runs are destructive: node state is updated in place and carries
//! over into the next run. Attach a snapshot store to keep per-run results.

mod config;
mod error;
mod leveler;
mod propagate;
mod run_id;
mod selector;

pub use config::RunConfig;
pub use error::RunError;
pub(crate) use leveler::Levels;
pub use run_id::RunId;
pub use selector::WorkingSet;

use crate::graph::{detect_cycle, Graph};
use crate::logging;
use crate::snapshot::RunSnapshot;

impl Graph {
    /// Runs the graph with `config` and returns the run id.
    ///
    /// Order: validate config, detect cycles (over the whole graph), select the
    /// working set, seed root inputs, level, apply overwrites, propagate level by
    /// level. Overwrites are applied before propagation, so a value propagated from
    /// an ancestor replaces an overwrite of the same key.
    pub fn run(&mut self, config: &RunConfig) -> Result<RunId, RunError> {
        let run_id = RunId::new();
        logging::log_run_start(&run_id, self.node_count());
        match self.run_inner(run_id, config) {
            Ok(writes) => {
                logging::log_run_complete(&run_id, writes);
                Ok(run_id)
            }
            Err(e) => {
                logging::log_run_error(&run_id, &e);
                Err(e)
            }
        }
    }

    fn run_inner(&mut self, run_id: RunId, config: &RunConfig) -> Result<usize, RunError> {
        config.validate()?;
        detect_cycle(self)?;
        let working = WorkingSet::select(self, config)?;

        propagate::seed_root_inputs(self, &working, config);
        let levels = Levels::compute(self, &working);
        logging::log_levels(&run_id, levels.len(), working.len());
        propagate::apply_overwrites(self, &working, config);
        let writes = propagate::propagate(self, &working, &levels);

        if let Some(store) = &self.snapshots {
            store.put(RunSnapshot::capture(run_id, self));
            logging::log_snapshot_saved(&run_id);
        }
        Ok(writes)
    }

    /// The level partition a run with `config` would use, as node ids.
    ///
    /// Fails like `run` on conflicting filters or a cycle; touches no state.
    pub fn levels(&self, config: &RunConfig) -> Result<Vec<Vec<String>>, RunError> {
        config.validate()?;
        detect_cycle(self)?;
        let working = WorkingSet::select(self, config)?;
        Ok(Levels::compute(self, &working).to_ids(self))
    }
}
