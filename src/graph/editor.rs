use serde::{Deserialize, Serialize};

use super::{NodeKind, Outlet, VisualEdge, VisualNode};
use crate::error::GraphError;

/// An editable node/edge graph, the in-memory model behind the workflow
/// editor canvas.
///
/// The graph owns its collections and is mutated through the methods below;
/// the codec, validator and order resolver never mutate it, they only derive
/// new structures from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<VisualNode>, edges: Vec<VisualEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Adds a node, rejecting duplicate ids. Duplicate ids would make every
    /// downstream edge reference ambiguous, so they are refused at the door.
    pub fn add_node(&mut self, node: VisualNode) -> Result<(), GraphError> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(GraphError::DuplicateNodeId(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Convenience for `add_node(VisualNode::new(id, kind))`.
    pub fn add_new_node(&mut self, id: impl Into<String>, kind: NodeKind) -> Result<(), GraphError> {
        self.add_node(VisualNode::new(id, kind))
    }

    pub fn node(&self, id: &str) -> Option<&VisualNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut VisualNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Removes a node and every edge touching it. Returns the removed node,
    /// or `None` if no node with that id exists.
    pub fn remove_node(&mut self, id: &str) -> Option<VisualNode> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        self.edges.retain(|e| e.source != id && e.target != id);
        Some(node)
    }

    /// Connects `source` to `target` through `outlet`, returning the edge id.
    ///
    /// The edge id is derived from the `(source, outlet, target)` triple, so
    /// reconnecting the same triple replaces the existing edge rather than
    /// stacking a duplicate.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        outlet: Outlet,
    ) -> Result<String, GraphError> {
        for endpoint in [source, target] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::UnknownNode {
                    source_id: source.to_string(),
                    target: target.to_string(),
                    missing: endpoint.to_string(),
                });
            }
        }

        let id = VisualEdge::derived_id(source, outlet, target);
        self.edges.retain(|e| e.id != id);
        self.edges
            .push(VisualEdge::new(id.clone(), source, target, outlet));
        Ok(id)
    }

    /// Removes the edge with the given id. Returns the removed edge, or
    /// `None` if no such edge exists.
    pub fn disconnect(&mut self, edge_id: &str) -> Option<VisualEdge> {
        let index = self.edges.iter().position(|e| e.id == edge_id)?;
        Some(self.edges.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
