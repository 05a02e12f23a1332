//! Graph model: nodes with key-value state, edges with key mappings.
//!
//! Build with [`GraphBuilder`] (or deserialize a [`GraphSpec`]) and `build` to get
//! a validated [`Graph`]. Structure is checked once, at build time; acyclicity is
//! checked by every run.

mod builder;
mod cycle;
mod dag;
mod edge;
mod islands;
mod node;
mod spec;
mod structural_error;
mod validate;

pub use builder::GraphBuilder;
pub use cycle::CycleError;
pub use dag::Graph;
pub use edge::{Edge, EdgeIdx, KeyMapping};
pub use node::{Node, NodeIdx};
pub use spec::{EdgeSpec, GraphSpec, NodeSpec};
pub use structural_error::StructuralError;

pub(crate) use cycle::detect_cycle;
