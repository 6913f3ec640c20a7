//! Prelude module for convenient imports
//!
//! Re-exports the types and functions needed for the common
//! edit/validate/encode/decode cycle, so callers can pull in the whole
//! surface with a single `use`.

// Conversion between the two representations
pub use crate::codec::{decode, encode};

// Visual graph model
pub use crate::graph::{
    IntoGraph, NodeAttributes, NodeKind, Outlet, Position, VisualEdge, VisualNode, WorkflowGraph,
};

// Backend wire model
pub use crate::workflow::{
    BranchNext, NextRef, StepConfig, WorkflowDefinition, WorkflowMeta, WorkflowStep,
};

// Validation and preview ordering
pub use crate::order::execution_order;
pub use crate::validate::{ValidationFinding, ValidationReport, validate, validate_workflow};

// Error types
pub use crate::error::{GraphConversionError, GraphError, WireError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
