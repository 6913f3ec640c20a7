//! Common test utilities for building graphs and workflows.
use tsunagu::prelude::*;

/// A tool node whose label equals its id, for predictable finding messages.
#[allow(dead_code)]
pub fn tool_node(id: &str, tool: &str) -> VisualNode {
    VisualNode::new(id, NodeKind::Tool)
        .with_label(id)
        .with_attributes(NodeAttributes::Tool {
            tool: tool.to_string(),
            params: Default::default(),
        })
}

#[allow(dead_code)]
pub fn agent_node(id: &str, agent: &str) -> VisualNode {
    VisualNode::new(id, NodeKind::Agent)
        .with_label(id)
        .with_attributes(NodeAttributes::Agent {
            agent: agent.to_string(),
            prompt: String::new(),
        })
}

#[allow(dead_code)]
pub fn condition_node(id: &str, condition: &str) -> VisualNode {
    VisualNode::new(id, NodeKind::Condition)
        .with_label(id)
        .with_attributes(NodeAttributes::Condition {
            condition: condition.to_string(),
        })
}

#[allow(dead_code)]
pub fn loop_node(id: &str, iterate_over: &str) -> VisualNode {
    VisualNode::new(id, NodeKind::Loop)
        .with_label(id)
        .with_attributes(NodeAttributes::Loop {
            iterate_over: iterate_over.to_string(),
            max_iterations: 10,
        })
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str, outlet: Outlet) -> VisualEdge {
    VisualEdge::new(
        format!("e-{}-{}-{}", source, outlet, target),
        source,
        target,
        outlet,
    )
}

/// `a -> b -> c`, all tool nodes, fully valid.
#[allow(dead_code)]
pub fn linear_graph() -> (Vec<VisualNode>, Vec<VisualEdge>) {
    let nodes = vec![
        tool_node("a", "web_search"),
        tool_node("b", "web_browser"),
        tool_node("c", "file_manager"),
    ];
    let edges = vec![
        edge("a", "b", Outlet::Next),
        edge("b", "c", Outlet::Next),
    ];
    (nodes, edges)
}

/// `fetch -> check -(true)-> ok / -(false)-> bad`, fully valid.
#[allow(dead_code)]
pub fn branching_graph() -> (Vec<VisualNode>, Vec<VisualEdge>) {
    let nodes = vec![
        tool_node("fetch", "web_search"),
        condition_node("check", "fetch_output.success"),
        tool_node("ok", "file_manager"),
        tool_node("bad", "shell_execute"),
    ];
    let edges = vec![
        edge("fetch", "check", Outlet::Next),
        edge("check", "ok", Outlet::True),
        edge("check", "bad", Outlet::False),
    ];
    (nodes, edges)
}

/// `start -> each -(loop-body)-> work -> each` with `each -(exit)-> done`.
#[allow(dead_code)]
pub fn loop_graph() -> (Vec<VisualNode>, Vec<VisualEdge>) {
    let nodes = vec![
        tool_node("start", "web_search"),
        loop_node("each", "start_output.results"),
        tool_node("work", "web_browser"),
        agent_node("done", "researcher"),
    ];
    let edges = vec![
        edge("start", "each", Outlet::Next),
        edge("each", "work", Outlet::LoopBody),
        edge("work", "each", Outlet::Next),
        edge("each", "done", Outlet::Exit),
    ];
    (nodes, edges)
}
