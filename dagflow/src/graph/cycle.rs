//! Cycle detection over the full node set.
//!
//! Three-color depth-first search (unvisited / on stack / done). Runs at the start
//! of every run and ignores enable/disable filters: a node disabled in one run can
//! be enabled in the next.

use thiserror::Error;

use super::dag::Graph;
use super::node::NodeIdx;

/// The graph contains a cycle. `path` lists the node ids around it, first id repeated last.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cycle detected in the graph: {}", path.join(" -> "))]
pub struct CycleError {
    pub path: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnStack,
    Done,
}

/// Returns `Err` with the first cycle found. Roots are tried in ascending id order.
pub(crate) fn detect_cycle(graph: &Graph) -> Result<(), CycleError> {
    let mut color = vec![Color::Unvisited; graph.node_count()];
    // (node, position of the next outgoing edge to follow)
    let mut stack: Vec<(NodeIdx, usize)> = Vec::new();

    for root in 0..graph.node_count() {
        if color[root] != Color::Unvisited {
            continue;
        }
        color[root] = Color::OnStack;
        stack.push((NodeIdx(root), 0));

        while let Some((current, pos)) = stack.last_mut() {
            let out = graph.node_at(*current).outgoing();
            if *pos >= out.len() {
                color[current.0] = Color::Done;
                stack.pop();
                continue;
            }
            let next = graph.edge_at(out[*pos]).dst();
            *pos += 1;
            match color[next.0] {
                Color::Unvisited => {
                    color[next.0] = Color::OnStack;
                    stack.push((next, 0));
                }
                Color::OnStack => return Err(cycle_path(graph, &stack, next)),
                Color::Done => {}
            }
        }
    }
    Ok(())
}

fn cycle_path(graph: &Graph, stack: &[(NodeIdx, usize)], back_to: NodeIdx) -> CycleError {
    let start = stack
        .iter()
        .position(|(n, _)| *n == back_to)
        .unwrap_or(0);
    let mut path: Vec<String> = stack[start..]
        .iter()
        .map(|(n, _)| graph.id_of(*n).to_string())
        .collect();
    path.push(graph.id_of(back_to).to_string());
    CycleError { path }
}
