//! Structural validation and arena assembly.
//!
//! Turns node and edge descriptors into a [`Graph`]: node handles are assigned in
//! ascending id order, edges are resolved to handles and registered on both
//! endpoints. Fails on the first structural problem found.
//!
//! A second edge on an already connected pair is accepted only when one of the
//! two carries no mapping: it adds neither data nor ordering, so it is folded
//! into the existing edge. Two mapped edges on one pair are a `DuplicateEdge`.

use std::collections::{HashMap, HashSet};

use crate::value::State;

use super::dag::Graph;
use super::edge::{Edge, EdgeIdx, KeyMapping};
use super::node::{Node, NodeIdx};
use super::spec::{EdgeSpec, NodeSpec};
use super::structural_error::StructuralError;

pub(crate) fn assemble(
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
) -> Result<Graph, StructuralError> {
    check_unique_ids(&nodes)?;

    let mut nodes = nodes;
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    let mut arena: Vec<Node> = nodes
        .into_iter()
        .map(|spec| Node::new(spec.id, spec.state))
        .collect();
    let index: HashMap<String, NodeIdx> = arena
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.clone(), NodeIdx(i)))
        .collect();

    let mut seen_pairs: HashMap<(NodeIdx, NodeIdx), EdgeIdx> = HashMap::new();
    let mut edge_arena: Vec<Edge> = Vec::with_capacity(edges.len());
    for spec in edges {
        let src = resolve(&index, &spec, &spec.src)?;
        let dst = resolve(&index, &spec, &spec.dst)?;
        check_mapping_kinds(&arena[src.0].state, &arena[dst.0].state, &spec.keys)?;

        if let Some(&existing) = seen_pairs.get(&(src, dst)) {
            let edge = &mut edge_arena[existing.0];
            if spec.keys.is_empty() {
                continue;
            }
            if !edge.is_dependency_only() {
                return Err(StructuralError::DuplicateEdge {
                    src: spec.src,
                    dst: spec.dst,
                });
            }
            edge.keys = spec.keys;
            continue;
        }

        let idx = EdgeIdx(edge_arena.len());
        seen_pairs.insert((src, dst), idx);
        arena[src.0].paths_out.push(idx);
        arena[dst.0].paths_in.push(idx);
        edge_arena.push(Edge {
            src,
            dst,
            keys: spec.keys,
        });
    }

    Ok(Graph::from_arena(arena, edge_arena, index))
}

fn check_unique_ids(nodes: &[NodeSpec]) -> Result<(), StructuralError> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(StructuralError::DuplicateNode(node.id.clone()));
        }
    }
    Ok(())
}

fn resolve(
    index: &HashMap<String, NodeIdx>,
    edge: &EdgeSpec,
    id: &str,
) -> Result<NodeIdx, StructuralError> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| StructuralError::DanglingEdge {
            src: edge.src.clone(),
            dst: edge.dst.clone(),
            missing: id.to_string(),
        })
}

/// Checks every mapped pair where both sides already hold a value.
///
/// A null destination value never matches, even against a null source.
pub(crate) fn check_mapping_kinds(
    src: &State,
    dst: &State,
    keys: &KeyMapping,
) -> Result<(), StructuralError> {
    for (src_key, dst_key) in keys {
        let (Some(src_value), Some(dst_value)) = (src.get(src_key), dst.get(dst_key)) else {
            continue;
        };
        if dst_value.is_null() || src_value.kind() != dst_value.kind() {
            return Err(StructuralError::TypeMismatch {
                src_key: src_key.clone(),
                dst_key: dst_key.clone(),
                src_kind: src_value.kind(),
                dst_kind: dst_value.kind(),
            });
        }
    }
    Ok(())
}
