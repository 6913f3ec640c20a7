//! # Tsunagu - Workflow Graph Adapter
//!
//! **Tsunagu** converts between the two representations of an automation
//! workflow: the visual node/edge graph a drag-and-drop editor mutates, and
//! the linear step list the backend workflow service executes. It also
//! validates graphs before they are saved and computes a best-effort
//! execution-order preview.
//!
//! ## Core Workflow
//!
//! 1.  **Edit**: The editor builds a [`WorkflowGraph`](graph::WorkflowGraph)
//!     of tool, agent, condition and loop nodes, connected through outlets
//!     (`true`/`false` branches, `loop-body`/`exit`, or the plain default).
//! 2.  **Validate**: [`validate`](validate::validate) checks required
//!     attributes, connectivity and cycles, accumulating every finding so
//!     the UI can show all problems at once.
//! 3.  **Encode**: [`encode`](codec::encode) turns the graph into a
//!     [`WorkflowDefinition`](workflow::WorkflowDefinition), the exact JSON
//!     shape the backend accepts over HTTP.
//! 4.  **Decode**: [`decode`](codec::decode) is the inverse, laying saved
//!     workflows back out on a grid for editing. Graphs can also be seeded
//!     from the built-in [`templates`](workflow::template).
//!
//! The adapter never executes anything and never persists anything: it is a
//! pure, synchronous translation and checking layer between the editor and
//! the backend service that owns orchestration.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsunagu::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = WorkflowGraph::default();
//!     graph.add_node(
//!         VisualNode::new("search", NodeKind::Tool).with_attributes(NodeAttributes::Tool {
//!             tool: "web_search".to_string(),
//!             params: Default::default(),
//!         }),
//!     )?;
//!     graph.add_node(
//!         VisualNode::new("summarize", NodeKind::Agent).with_attributes(NodeAttributes::Agent {
//!             agent: "researcher".to_string(),
//!             prompt: "Summarize the results".to_string(),
//!         }),
//!     )?;
//!     graph.connect("search", "summarize", Outlet::Next)?;
//!
//!     // Validate before encoding; an invalid graph must not be saved.
//!     let report = validate(&graph.nodes, &graph.edges);
//!     assert!(report.is_valid(), "{:?}", report.messages());
//!
//!     let meta = WorkflowMeta::new("Research", "Search the web, then summarize");
//!     let workflow = encode(&graph.nodes, &graph.edges, meta);
//!     println!("{}", workflow.to_json()?);
//!
//!     // The inverse transform restores the same node ids.
//!     let restored = decode(&workflow);
//!     assert_eq!(restored.nodes.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod graph;
pub mod order;
pub mod prelude;
pub mod validate;
pub mod workflow;
