use super::WorkflowGraph;
use crate::error::GraphConversionError;

/// A trait for custom editor formats that can be converted into a
/// [`WorkflowGraph`].
///
/// Editor frameworks tend to wrap node data in their own envelopes (extra
/// nesting, framework-specific handles). Implementing `IntoGraph` on the
/// structs you deserialize that format into gives the adapter a single
/// canonical model to encode and validate.
///
/// The crate implements it for [`WorkflowDefinition`](crate::workflow::WorkflowDefinition),
/// so a saved backend workflow converts into an editable graph the same way.
///
/// # Example
///
/// ```rust
/// use tsunagu::prelude::*;
/// use tsunagu::error::GraphConversionError;
///
/// struct MyEditorNode { id: String, tool_name: String }
/// struct MyEditorExport { nodes: Vec<MyEditorNode> }
///
/// impl IntoGraph for MyEditorExport {
///     fn into_graph(self) -> std::result::Result<WorkflowGraph, GraphConversionError> {
///         let nodes = self
///             .nodes
///             .into_iter()
///             .map(|n| {
///                 VisualNode::new(n.id, NodeKind::Tool).with_attributes(NodeAttributes::Tool {
///                     tool: n.tool_name,
///                     params: Default::default(),
///                 })
///             })
///             .collect();
///         Ok(WorkflowGraph::new(nodes, vec![]))
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into an editable workflow graph.
    fn into_graph(self) -> Result<WorkflowGraph, GraphConversionError>;
}
