//! Run configuration: root inputs, overwrites, enable / disable lists.
//!
//! A value object consumed by one `Graph::run` and then discarded. Deserializes
//! from the JSON shape embedding layers already use (`data_overwrites` is
//! accepted for `overwrites`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::{State, Value};

use super::error::RunError;

/// Config for a single run.
///
/// - `root_inputs`: per node, state merged in before anything else.
/// - `overwrites`: per node, state merged in after root inputs and before propagation.
///   Propagation in the same run may replace an overwritten key.
/// - `enable_list` / `disable_list`: restrict which nodes take part. Mutually
///   exclusive; an empty list counts as not given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub root_inputs: BTreeMap<String, State>,
    #[serde(default, alias = "data_overwrites")]
    pub overwrites: BTreeMap<String, State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_list: Option<Vec<String>>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `key = value` into the root input of `node_id`.
    pub fn with_root_input(
        mut self,
        node_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.root_inputs
            .entry(node_id.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Merges `key = value` into the overwrite of `node_id`.
    pub fn with_overwrite(
        mut self,
        node_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.overwrites
            .entry(node_id.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Runs only the given nodes (unknown ids are ignored).
    pub fn enable<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_list = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Runs every node except the given ones.
    pub fn disable<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disable_list = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Non-empty enable list, if any.
    pub fn enabled(&self) -> Option<&[String]> {
        self.enable_list.as_deref().filter(|l| !l.is_empty())
    }

    /// Non-empty disable list, if any.
    pub fn disabled(&self) -> Option<&[String]> {
        self.disable_list.as_deref().filter(|l| !l.is_empty())
    }

    /// Fails with `ConflictingNodeFilter` when both lists are given.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.enabled().is_some() && self.disabled().is_some() {
            return Err(RunError::ConflictingNodeFilter);
        }
        Ok(())
    }
}
