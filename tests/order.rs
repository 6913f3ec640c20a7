//! Tests for the execution-order preview resolver.
mod common;
use common::*;
use tsunagu::prelude::*;

#[test]
fn test_order_follows_chain() {
    let (nodes, edges) = linear_graph();
    assert_eq!(execution_order(&nodes, &edges), vec!["a", "b", "c"]);
}

#[test]
fn test_order_is_breadth_first_over_branches() {
    let (nodes, edges) = branching_graph();
    assert_eq!(
        execution_order(&nodes, &edges),
        vec!["fetch", "check", "ok", "bad"]
    );
}

#[test]
fn test_order_omits_unreached_components() {
    // Preview-only incompleteness: only the entry's component is visited.
    let nodes = vec![
        tool_node("a", "web_search"),
        tool_node("b", "web_browser"),
        tool_node("c", "file_manager"),
        tool_node("d", "shell_execute"),
    ];
    let edges = vec![
        edge("a", "b", Outlet::Next),
        edge("c", "d", Outlet::Next),
    ];

    assert_eq!(execution_order(&nodes, &edges), vec!["a", "b"]);
}

#[test]
fn test_order_falls_back_to_first_node_when_no_entry() {
    // Every node has an incoming edge, so raw node order picks the entry.
    let nodes = vec![tool_node("a", "web_search"), tool_node("b", "web_browser")];
    let edges = vec![
        edge("a", "b", Outlet::Next),
        edge("b", "a", Outlet::Next),
    ];

    assert_eq!(execution_order(&nodes, &edges), vec!["a", "b"]);
}

#[test]
fn test_order_visits_each_node_once() {
    let (nodes, edges) = loop_graph();
    let order = execution_order(&nodes, &edges);
    assert_eq!(order, vec!["start", "each", "work", "done"]);
}

#[test]
fn test_order_of_empty_graph_is_empty() {
    assert!(execution_order(&[], &[]).is_empty());
}
