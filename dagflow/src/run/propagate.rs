//! Root-input seeding, overwrites and level-by-level propagation.
//!
//! Each node pulls its incoming values once all of its working predecessors are
//! final (they sit in lower levels). When several edges map into the same
//! destination key, the contribution from the higher-level source wins; on a
//! level tie the source with the smaller id wins.

use std::collections::BTreeMap;

use crate::graph::{Graph, NodeIdx};
use crate::logging;
use crate::value::{State, Value};

use super::config::RunConfig;
use super::leveler::Levels;
use super::selector::WorkingSet;

/// Merges `patches` into the state of every working node that has an entry.
/// Ids that are unknown or outside the working set are ignored.
fn merge_patches(graph: &mut Graph, working: &WorkingSet, patches: &BTreeMap<String, State>) {
    for (node_id, patch) in patches {
        let Some(idx) = graph.idx_of(node_id) else {
            continue;
        };
        if !working.contains(idx) {
            continue;
        }
        graph.nodes[idx.index()]
            .state
            .extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

pub(crate) fn seed_root_inputs(graph: &mut Graph, working: &WorkingSet, config: &RunConfig) {
    merge_patches(graph, working, &config.root_inputs);
}

/// Applied to all working nodes before any propagation; propagation may replace
/// an overwritten key afterwards.
pub(crate) fn apply_overwrites(graph: &mut Graph, working: &WorkingSet, config: &RunConfig) {
    merge_patches(graph, working, &config.overwrites);
}

/// One candidate value for a destination key.
struct Contribution<'g> {
    level: usize,
    source: &'g str,
    value: &'g Value,
}

impl Contribution<'_> {
    fn beats(&self, other: &Self) -> bool {
        self.level > other.level || (self.level == other.level && self.source < other.source)
    }
}

/// Resolves the incoming values of `idx` from its working predecessors.
fn incoming_writes(
    graph: &Graph,
    working: &WorkingSet,
    levels: &Levels,
    idx: NodeIdx,
) -> Vec<(String, Value)> {
    let mut winners: BTreeMap<&str, Contribution<'_>> = BTreeMap::new();
    for &e in graph.node_at(idx).incoming() {
        let edge = graph.edge_at(e);
        if !working.contains(edge.src()) {
            continue;
        }
        let Some(level) = levels.level_of(edge.src()) else {
            continue;
        };
        let source = graph.node_at(edge.src());
        for (src_key, dst_key) in edge.keys() {
            let Some(value) = source.state().get(src_key) else {
                continue;
            };
            let candidate = Contribution {
                level,
                source: source.id(),
                value,
            };
            let replace = winners
                .get(dst_key.as_str())
                .map_or(true, |current| candidate.beats(current));
            if replace {
                winners.insert(dst_key.as_str(), candidate);
            }
        }
    }
    winners
        .into_iter()
        .map(|(k, c)| (k.to_string(), c.value.clone()))
        .collect()
}

/// Propagates values level by level. Returns the number of key writes.
pub(crate) fn propagate(graph: &mut Graph, working: &WorkingSet, levels: &Levels) -> usize {
    let mut total = 0;
    for level in levels.iter() {
        for &idx in level {
            let writes = incoming_writes(graph, working, levels, idx);
            if writes.is_empty() {
                continue;
            }
            total += writes.len();
            logging::log_node_propagated(graph.id_of(idx), writes.len());
            graph.nodes[idx.index()].state.extend(writes);
        }
    }
    total
}
