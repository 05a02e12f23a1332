//! What a CLI run prints.

/// Which parts of the result go into the report.
///
/// With no node ids given, every node's state is reported.
#[derive(Clone, Debug, Default)]
pub struct OutputSelection {
    /// Report only these nodes (unknown ids are an error).
    pub nodes: Vec<String>,
    /// Include leaf outputs.
    pub leaves: bool,
    /// Include islands of the run's working set.
    pub islands: bool,
    /// Include the level partition used by the run.
    pub levels: bool,
}
