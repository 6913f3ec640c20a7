//! Tests for the structural validator.
mod common;
use common::*;
use tsunagu::prelude::*;

#[test]
fn test_empty_graph_is_single_terminal_finding() {
    let report = validate(&[], &[]);
    assert!(!report.is_valid());
    assert_eq!(report.findings, vec![ValidationFinding::EmptyWorkflow]);
}

#[test]
fn test_valid_graphs_pass() {
    for (nodes, edges) in [linear_graph(), branching_graph(), loop_graph()] {
        let report = validate(&nodes, &edges);
        assert!(report.is_valid(), "unexpected findings: {:?}", report.messages());
    }
}

#[test]
fn test_required_fields_per_kind() {
    let cases = [
        (tool_node("t", ""), ValidationFinding::MissingToolName("t".to_string())),
        (agent_node("a", ""), ValidationFinding::MissingAgentId("a".to_string())),
        (condition_node("c", ""), ValidationFinding::EmptyCondition("c".to_string())),
        (
            loop_node("l", ""),
            ValidationFinding::MissingIterationSource("l".to_string()),
        ),
    ];

    for (node, expected) in cases {
        let report = validate(&[node], &[]);
        assert_eq!(report.findings, vec![expected]);
    }
}

#[test]
fn test_finding_messages_name_the_node_label() {
    let node = tool_node("t1", "").with_label("Send Mail");
    let report = validate(&[node], &[]);
    assert_eq!(
        report.messages(),
        vec!["Tool node 'Send Mail' does not specify a tool".to_string()]
    );
}

#[test]
fn test_single_node_graph_is_exempt_from_connectivity() {
    let report = validate(&[tool_node("only", "web_search")], &[]);
    assert!(report.is_valid());
}

#[test]
fn test_disconnected_node_reported_in_multi_node_graph() {
    let nodes = vec![
        tool_node("a", "web_search"),
        tool_node("b", "web_browser"),
        tool_node("c", "file_manager"),
    ];
    let edges = vec![edge("a", "b", Outlet::Next)];

    let report = validate(&nodes, &edges);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::DisconnectedNode("c".to_string())]
    );
}

#[test]
fn test_cycle_reported_exactly_once() {
    let nodes = vec![tool_node("a", "web_search"), tool_node("b", "web_browser")];
    let edges = vec![
        edge("a", "b", Outlet::Next),
        edge("b", "a", Outlet::Next),
    ];

    let report = validate(&nodes, &edges);
    assert!(!report.is_valid());
    assert_eq!(report.findings, vec![ValidationFinding::CircularDependency]);
}

#[test]
fn test_loop_body_back_edge_is_sanctioned() {
    // The only cycle runs through the loop-body edge, which the check skips.
    let (nodes, edges) = loop_graph();
    let report = validate(&nodes, &edges);
    assert!(
        !report
            .findings
            .contains(&ValidationFinding::CircularDependency)
    );
}

#[test]
fn test_duplicate_node_ids_reported_once_per_id() {
    let nodes = vec![
        tool_node("a", "web_search"),
        tool_node("a", "web_browser"),
        tool_node("b", "file_manager"),
    ];
    let edges = vec![edge("a", "b", Outlet::Next)];

    let report = validate(&nodes, &edges);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::DuplicateNodeId("a".to_string())]
    );
}

#[test]
fn test_unknown_edge_endpoint_reported() {
    let nodes = vec![tool_node("a", "web_search")];
    let edges = vec![edge("a", "ghost", Outlet::Next)];

    let report = validate(&nodes, &edges);
    assert!(report.findings.contains(&ValidationFinding::UnknownEdgeEndpoint {
        edge: "e-a-next-ghost".to_string(),
        node: "ghost".to_string(),
    }));
}

#[test]
fn test_outlet_collision_reported() {
    let nodes = vec![
        tool_node("a", "web_search"),
        tool_node("b", "web_browser"),
        tool_node("c", "file_manager"),
    ];
    let edges = vec![
        edge("a", "b", Outlet::Next),
        edge("a", "c", Outlet::Next),
    ];

    let report = validate(&nodes, &edges);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::OutletCollision {
            label: "a".to_string(),
            outlet: Outlet::Next,
        }]
    );
}

#[test]
fn test_illegal_outlet_for_source_kind() {
    let nodes = vec![tool_node("a", "web_search"), tool_node("b", "web_browser")];
    let edges = vec![edge("a", "b", Outlet::True)];

    let report = validate(&nodes, &edges);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::IllegalOutlet {
            label: "a".to_string(),
            kind: NodeKind::Tool,
            outlet: Outlet::True,
        }]
    );
}

#[test]
fn test_findings_accumulate() {
    let nodes = vec![
        tool_node("a", ""),
        agent_node("b", ""),
        tool_node("c", "file_manager"),
    ];
    let edges = vec![edge("a", "b", Outlet::Next)];

    let report = validate(&nodes, &edges);
    assert_eq!(report.findings.len(), 3);
    assert!(report.findings.contains(&ValidationFinding::MissingToolName("a".to_string())));
    assert!(report.findings.contains(&ValidationFinding::MissingAgentId("b".to_string())));
    assert!(report.findings.contains(&ValidationFinding::DisconnectedNode("c".to_string())));
}

#[test]
fn test_validate_workflow_reports_dangling_next() {
    let workflow = WorkflowDefinition::from_json(
        r#"{
            "name": "w",
            "steps": [
                {"id": "a", "name": "a", "type": "tool",
                 "config": {"tool": "web_search"}, "next": "missing"}
            ]
        }"#,
    )
    .expect("parse failed");

    let report = validate_workflow(&workflow);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::DanglingStepReference {
            step: "a".to_string(),
            target: "missing".to_string(),
        }]
    );
}

#[test]
fn test_validate_workflow_reports_dangling_loop_body_and_branch() {
    let workflow = WorkflowDefinition::from_json(
        r#"{
            "name": "w",
            "steps": [
                {"id": "each", "name": "each", "type": "loop",
                 "config": {"iterateOver": "items", "body": "gone"}},
                {"id": "check", "name": "check", "type": "condition",
                 "config": {"condition": "x"},
                 "next": {"true": "each", "false": "nowhere"}}
            ]
        }"#,
    )
    .expect("parse failed");

    let report = validate_workflow(&workflow);
    assert_eq!(report.findings.len(), 2);
    assert!(report.findings.contains(&ValidationFinding::DanglingStepReference {
        step: "each".to_string(),
        target: "gone".to_string(),
    }));
    assert!(report.findings.contains(&ValidationFinding::DanglingStepReference {
        step: "check".to_string(),
        target: "nowhere".to_string(),
    }));
}

#[test]
fn test_validate_workflow_accepts_encoded_graphs() {
    let (nodes, edges) = loop_graph();
    let workflow = encode(&nodes, &edges, WorkflowMeta::new("w", ""));
    assert!(validate_workflow(&workflow).is_valid());
}

#[test]
fn test_validate_workflow_reports_duplicate_step_ids() {
    let workflow = WorkflowDefinition::from_json(
        r#"{
            "name": "w",
            "steps": [
                {"id": "a", "name": "a", "type": "tool", "config": {"tool": "x"}},
                {"id": "a", "name": "a", "type": "tool", "config": {"tool": "y"}}
            ]
        }"#,
    )
    .expect("parse failed");

    let report = validate_workflow(&workflow);
    assert_eq!(
        report.findings,
        vec![ValidationFinding::DuplicateStepId("a".to_string())]
    );
}
