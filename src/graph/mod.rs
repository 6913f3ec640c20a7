//! The visual side of the adapter: nodes, edges, outlets, and the editable
//! graph that the editor canvas mutates.

pub mod conversion;
pub mod edge;
pub mod editor;
pub mod node;

pub use conversion::*;
pub use edge::*;
pub use editor::*;
pub use node::*;
