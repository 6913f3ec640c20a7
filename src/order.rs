//! Best-effort execution-order preview.
//!
//! The backend owns the authoritative traversal; this resolver only gives
//! the editor a local preview of the likely order before a run starts.

use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

use crate::graph::{VisualEdge, VisualNode};

/// Computes a breadth-first preview order over the graph.
///
/// The entry point is the first node (in slice order) with no incoming edge;
/// if every node has one, the first node is used. Traversal merges all
/// outlets into one adjacency and visits each node once. Nodes unreachable
/// from the entry are omitted, which is fine for a preview: the validator
/// already rejects disconnected multi-node graphs before anything is saved.
pub fn execution_order(nodes: &[VisualNode], edges: &[VisualEdge]) -> Vec<String> {
    let Some(entry) = entry_node(nodes, edges) else {
        return Vec::new();
    };

    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut order = Vec::new();
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    seen.insert(entry);
    queue.push_back(entry);
    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());
        if let Some(successors) = adjacency.get(current) {
            for &next in successors {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    order
}

/// First node without an incoming edge, falling back to raw node order.
fn entry_node<'a>(nodes: &'a [VisualNode], edges: &[VisualEdge]) -> Option<&'a str> {
    let targets: AHashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    nodes
        .iter()
        .find(|n| !targets.contains(n.id.as_str()))
        .or_else(|| nodes.first())
        .map(|n| n.id.as_str())
}
