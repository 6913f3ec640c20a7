//! Built-in workflow templates, expressed as static literal graphs.
//!
//! Templates seed the editor canvas with a ready-made graph; the user then
//! tweaks parameters and saves, which encodes the graph like any other.

use ahash::AHashMap;
use serde_json::json;

use crate::graph::{NodeAttributes, NodeKind, Outlet, VisualEdge, VisualNode, WorkflowGraph};

/// A named starter graph offered by the editor's template picker.
#[derive(Debug, Clone)]
pub struct WorkflowTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub graph: WorkflowGraph,
}

/// All built-in templates, in picker order.
pub fn builtin() -> Vec<WorkflowTemplate> {
    vec![research(), data_processing(), automation()]
}

/// Looks up a built-in template by id.
pub fn find(id: &str) -> Option<WorkflowTemplate> {
    builtin().into_iter().find(|t| t.id == id)
}

fn tool_params(entries: &[(&str, serde_json::Value)]) -> AHashMap<String, serde_json::Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Search the web, read the top results in a loop, and summarize.
pub fn research() -> WorkflowTemplate {
    let nodes = vec![
        VisualNode::new("search", NodeKind::Tool)
            .with_label("Web Search")
            .with_attributes(NodeAttributes::Tool {
                tool: "web_search".to_string(),
                params: tool_params(&[("query", json!("{query}"))]),
            })
            .with_position(80.0, 80.0),
        VisualNode::new("browse", NodeKind::Loop)
            .with_label("Read Top Results")
            .with_attributes(NodeAttributes::Loop {
                iterate_over: "search_output.results".to_string(),
                max_iterations: 5,
            })
            .with_position(360.0, 80.0),
        VisualNode::new("read_page", NodeKind::Tool)
            .with_label("Read Page")
            .with_attributes(NodeAttributes::Tool {
                tool: "web_browser".to_string(),
                params: tool_params(&[("url", json!("{url}"))]),
            })
            .with_position(360.0, 240.0),
        VisualNode::new("summarize", NodeKind::Agent)
            .with_label("Create Summary")
            .with_attributes(NodeAttributes::Agent {
                agent: "researcher".to_string(),
                prompt: "Summarize the gathered information".to_string(),
            })
            .with_position(640.0, 80.0),
    ];
    let edges = vec![
        VisualEdge::new("e-search-next-browse", "search", "browse", Outlet::Next),
        VisualEdge::new("e-browse-loop-body-read_page", "browse", "read_page", Outlet::LoopBody),
        VisualEdge::new("e-browse-exit-summarize", "browse", "summarize", Outlet::Exit),
    ];
    WorkflowTemplate {
        id: "research",
        name: "Web Research Workflow",
        description: "Search the web, gather information, and create a summary",
        graph: WorkflowGraph::new(nodes, edges),
    }
}

/// Read a data file, analyze it, and write a report.
pub fn data_processing() -> WorkflowTemplate {
    let nodes = vec![
        VisualNode::new("read_data", NodeKind::Tool)
            .with_label("Read Data File")
            .with_attributes(NodeAttributes::Tool {
                tool: "file_manager".to_string(),
                params: tool_params(&[("action", json!("read")), ("path", json!("{input_file}"))]),
            })
            .with_position(80.0, 80.0),
        VisualNode::new("analyze", NodeKind::Agent)
            .with_label("Analyze Data")
            .with_attributes(NodeAttributes::Agent {
                agent: "analyst".to_string(),
                prompt: "Analyze the data and create visualizations".to_string(),
            })
            .with_position(360.0, 80.0),
        VisualNode::new("save_report", NodeKind::Tool)
            .with_label("Save Report")
            .with_attributes(NodeAttributes::Tool {
                tool: "file_manager".to_string(),
                params: tool_params(&[
                    ("action", json!("write")),
                    ("path", json!("report.md")),
                    ("content", json!("{analyze_output}")),
                ]),
            })
            .with_position(640.0, 80.0),
    ];
    let edges = vec![
        VisualEdge::new("e-read_data-next-analyze", "read_data", "analyze", Outlet::Next),
        VisualEdge::new("e-analyze-next-save_report", "analyze", "save_report", Outlet::Next),
    ];
    WorkflowTemplate {
        id: "data_processing",
        name: "Data Processing Workflow",
        description: "Read data, process it, and generate a report",
        graph: WorkflowGraph::new(nodes, edges),
    }
}

/// Check system status and branch into an action or a fallback command.
pub fn automation() -> WorkflowTemplate {
    let nodes = vec![
        VisualNode::new("check_status", NodeKind::Tool)
            .with_label("Check System Status")
            .with_attributes(NodeAttributes::Tool {
                tool: "shell_execute".to_string(),
                params: tool_params(&[("command", json!("{status_command}"))]),
            })
            .with_position(80.0, 80.0),
        VisualNode::new("status_ok", NodeKind::Condition)
            .with_label("Status OK?")
            .with_attributes(NodeAttributes::Condition {
                condition: "check_status_output.success".to_string(),
            })
            .with_position(360.0, 80.0),
        VisualNode::new("run_action", NodeKind::Tool)
            .with_label("Run Action")
            .with_attributes(NodeAttributes::Tool {
                tool: "shell_execute".to_string(),
                params: tool_params(&[("command", json!("{action_command}"))]),
            })
            .with_position(640.0, 80.0),
        VisualNode::new("run_fallback", NodeKind::Tool)
            .with_label("Run Fallback")
            .with_attributes(NodeAttributes::Tool {
                tool: "shell_execute".to_string(),
                params: tool_params(&[("command", json!("{fallback_command}"))]),
            })
            .with_position(640.0, 240.0),
    ];
    let edges = vec![
        VisualEdge::new("e-check_status-next-status_ok", "check_status", "status_ok", Outlet::Next),
        VisualEdge::new("e-status_ok-true-run_action", "status_ok", "run_action", Outlet::True),
        VisualEdge::new("e-status_ok-false-run_fallback", "status_ok", "run_fallback", Outlet::False),
    ];
    WorkflowTemplate {
        id: "automation",
        name: "System Automation Workflow",
        description: "Execute shell commands and manage files",
        graph: WorkflowGraph::new(nodes, edges),
    }
}
