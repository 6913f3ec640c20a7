//! Bidirectional conversion between the visual graph and the backend
//! workflow shape.
//!
//! Both directions are deterministic pure functions: the encoder resolves
//! edges into per-outlet successor slots and emits steps in node order, the
//! decoder lays steps out on a fixed grid and rebuilds edges from the `next`
//! pointers and loop bodies.

mod decode;
mod encode;

pub use decode::{COLUMN_PITCH, GRID_COLUMNS, GRID_ORIGIN, ROW_PITCH, decode};
pub use encode::encode;

use crate::error::GraphConversionError;
use crate::graph::{IntoGraph, WorkflowGraph};
use crate::workflow::WorkflowDefinition;

impl IntoGraph for WorkflowDefinition {
    fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError> {
        Ok(decode(&self))
    }
}
