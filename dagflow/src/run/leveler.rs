//! Topological leveling of the working set (Kahn's algorithm).
//!
//! Level 0 holds every working node without a working predecessor; each later
//! level holds the nodes whose last working predecessor was peeled in the level
//! before. Every edge between working nodes goes from a lower level to a higher one.

use crate::graph::{Graph, NodeIdx};

use super::selector::WorkingSet;

/// Level partition of a working set. Nodes within a level are in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Levels {
    levels: Vec<Vec<NodeIdx>>,
    level_of: Vec<Option<usize>>,
}

impl Levels {
    /// Levels the working set. The graph must be acyclic (checked by the caller).
    pub(crate) fn compute(graph: &Graph, working: &WorkingSet) -> Self {
        let mut in_degree = vec![0usize; graph.node_count()];
        for edge in graph.edges() {
            if working.contains(edge.src()) && working.contains(edge.dst()) {
                in_degree[edge.dst().index()] += 1;
            }
        }

        let mut level_of = vec![None; graph.node_count()];
        let mut levels = Vec::new();
        let mut frontier: Vec<NodeIdx> = working
            .iter()
            .filter(|idx| in_degree[idx.index()] == 0)
            .collect();

        while !frontier.is_empty() {
            let depth = levels.len();
            let mut next = Vec::new();
            for &idx in &frontier {
                level_of[idx.index()] = Some(depth);
                for &e in graph.node_at(idx).outgoing() {
                    let dst = graph.edge_at(e).dst();
                    if !working.contains(dst) {
                        continue;
                    }
                    in_degree[dst.index()] -= 1;
                    if in_degree[dst.index()] == 0 {
                        next.push(dst);
                    }
                }
            }
            next.sort_unstable();
            levels.push(std::mem::replace(&mut frontier, next));
        }

        debug_assert_eq!(
            levels.iter().map(Vec::len).sum::<usize>(),
            working.len(),
            "working set must be acyclic"
        );
        Self { levels, level_of }
    }

    /// Levels in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &[NodeIdx]> {
        self.levels.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Level of `idx`, or `None` when it is not in the working set.
    pub fn level_of(&self, idx: NodeIdx) -> Option<usize> {
        self.level_of.get(idx.index()).copied().flatten()
    }

    /// Levels as node ids.
    pub fn to_ids(&self, graph: &Graph) -> Vec<Vec<String>> {
        self.levels
            .iter()
            .map(|level| {
                level
                    .iter()
                    .map(|idx| graph.node_at(*idx).id().to_string())
                    .collect()
            })
            .collect()
    }
}
