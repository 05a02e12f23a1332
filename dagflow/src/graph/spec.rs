//! Serializable graph descriptors.
//!
//! [`GraphSpec`] is what an embedding layer hands over: a list of node
//! descriptors (id, initial state) and edge descriptors (source, destination,
//! key mapping). Field aliases accept the `node_id` / `data` / `src_node` /
//! `dst_node` / `src_to_dst_data_keys` names used by existing graph records.

use serde::{Deserialize, Deserializer, Serialize};

use crate::value::State;

use super::dag::Graph;
use super::edge::KeyMapping;
use super::structural_error::StructuralError;
use super::validate;

/// One node descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(alias = "node_id")]
    pub id: String,
    #[serde(default, alias = "data")]
    pub state: State,
}

/// One edge descriptor. A missing or null mapping means ordering only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(alias = "src_node")]
    pub src: String,
    #[serde(alias = "dst_node")]
    pub dst: String,
    #[serde(
        default,
        alias = "src_to_dst_data_keys",
        deserialize_with = "null_as_empty"
    )]
    pub keys: KeyMapping,
}

/// Node and edge descriptors for a whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, state: State) -> Self {
        Self {
            id: id.into(),
            state,
        }
    }
}

impl EdgeSpec {
    pub fn new<I, K, V>(src: impl Into<String>, dst: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            src: src.into(),
            dst: dst.into(),
            keys: keys
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl GraphSpec {
    /// Validates the descriptors and builds the graph.
    pub fn build(self) -> Result<Graph, StructuralError> {
        validate::assemble(self.nodes, self.edges)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<KeyMapping, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<KeyMapping>::deserialize(deserializer)?.unwrap_or_default())
}
