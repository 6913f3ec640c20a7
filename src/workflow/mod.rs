//! The backend-facing side of the adapter: the wire workflow shape and the
//! built-in templates.

pub mod definition;
pub mod template;

pub use definition::*;
pub use template::WorkflowTemplate;
