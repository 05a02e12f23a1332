//! Weakly-connected components of the working set.

use crate::run::{RunConfig, RunError, WorkingSet};

use super::dag::Graph;
use super::node::NodeIdx;

impl Graph {
    /// Partitions the working set of `config` into islands: components connected
    /// through edges in either direction, using only working nodes.
    ///
    /// Discovery starts from working nodes in ascending id order; islands are returned
    /// in discovery order. Fails with `ConflictingNodeFilter` like a run would.
    pub fn islands(&self, config: &RunConfig) -> Result<Vec<Vec<String>>, RunError> {
        let working = WorkingSet::select(self, config)?;
        let mut visited = vec![false; self.node_count()];
        let mut islands = Vec::new();

        for root in working.iter() {
            if visited[root.index()] {
                continue;
            }
            visited[root.index()] = true;
            let mut island = Vec::new();
            let mut stack = vec![root];
            while let Some(idx) = stack.pop() {
                island.push(self.id_of(idx).to_string());
                for next in self.neighbours(idx) {
                    if working.contains(next) && !visited[next.index()] {
                        visited[next.index()] = true;
                        stack.push(next);
                    }
                }
            }
            islands.push(island);
        }
        Ok(islands)
    }

    /// Nodes adjacent to `idx` through outgoing or incoming edges.
    fn neighbours(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        let node = self.node_at(idx);
        let out = node.outgoing().iter().map(|e| self.edge_at(*e).dst());
        let inc = node.incoming().iter().map(|e| self.edge_at(*e).src());
        out.chain(inc)
    }
}
