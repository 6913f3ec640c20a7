//! Structural validation of workflow graphs.
//!
//! Validation is a pure function returning a report, never an error for
//! control flow: the editor shows every finding at once and simply refuses
//! to save while any remain. The checks run in a fixed order and accumulate
//! rather than failing fast, with one exception: an empty graph is its own
//! terminal condition and short-circuits everything else.

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use thiserror::Error;

use crate::graph::{NodeAttributes, NodeKind, Outlet, VisualEdge, VisualNode};
use crate::workflow::{StepConfig, WorkflowDefinition};

/// A single validation problem, rendered for the user via `Display`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFinding {
    #[error("Workflow has no nodes")]
    EmptyWorkflow,

    #[error("Duplicate node id '{0}'")]
    DuplicateNodeId(String),

    #[error("Tool node '{0}' does not specify a tool")]
    MissingToolName(String),

    #[error("Agent node '{0}' does not specify an agent")]
    MissingAgentId(String),

    #[error("Condition node '{0}' has an empty condition expression")]
    EmptyCondition(String),

    #[error("Loop node '{0}' does not specify what to iterate over")]
    MissingIterationSource(String),

    #[error("Edge '{edge}' references unknown node '{node}'")]
    UnknownEdgeEndpoint { edge: String, node: String },

    #[error("Node '{label}' is a {kind} node and cannot use the '{outlet}' outlet")]
    IllegalOutlet {
        label: String,
        kind: NodeKind,
        outlet: Outlet,
    },

    #[error("Node '{label}' has more than one edge on the '{outlet}' outlet")]
    OutletCollision { label: String, outlet: Outlet },

    #[error("Node '{0}' is not connected to the workflow")]
    DisconnectedNode(String),

    #[error("Workflow contains a circular dependency")]
    CircularDependency,

    #[error("Duplicate step id '{0}'")]
    DuplicateStepId(String),

    #[error("Step '{step}' points at missing step '{target}'")]
    DanglingStepReference { step: String, target: String },
}

/// The accumulated outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub findings: Vec<ValidationFinding>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// The findings as human-readable strings, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.to_string()).collect()
    }

    fn push(&mut self, finding: ValidationFinding) {
        self.findings.push(finding);
    }
}

/// Validates a visual graph for completeness and well-formedness.
///
/// Checks, in order: non-empty node set, unique node ids, kind-required
/// attributes, edge integrity (known endpoints, legal outlets, no outlet
/// collisions), connectivity (single-node graphs are exempt), and cycle
/// detection. Edges tagged `loop-body` are the one sanctioned back-edge and
/// are skipped by the cycle check; any other cycle yields exactly one
/// aggregate finding.
pub fn validate(nodes: &[VisualNode], edges: &[VisualEdge]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if nodes.is_empty() {
        report.push(ValidationFinding::EmptyWorkflow);
        return report;
    }

    for id in nodes.iter().map(|n| n.id.as_str()).duplicates() {
        report.push(ValidationFinding::DuplicateNodeId(id.to_string()));
    }

    for node in nodes {
        check_required_attributes(node, &mut report);
    }

    let labels: AHashMap<&str, &str> = nodes
        .iter()
        .map(|n| (n.id.as_str(), n.label.as_str()))
        .collect();
    let kinds: AHashMap<&str, NodeKind> =
        nodes.iter().map(|n| (n.id.as_str(), n.kind())).collect();

    for edge in edges {
        for endpoint in [&edge.source, &edge.target] {
            if !labels.contains_key(endpoint.as_str()) {
                report.push(ValidationFinding::UnknownEdgeEndpoint {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
        if let Some(&kind) = kinds.get(edge.source.as_str())
            && !edge.outlet.legal_for(kind)
        {
            report.push(ValidationFinding::IllegalOutlet {
                label: labels[edge.source.as_str()].to_string(),
                kind,
                outlet: edge.outlet,
            });
        }
    }

    for (source, outlet) in edges
        .iter()
        .map(|e| (e.source.as_str(), e.outlet))
        .duplicates()
    {
        report.push(ValidationFinding::OutletCollision {
            label: labels.get(source).unwrap_or(&source).to_string(),
            outlet,
        });
    }

    if nodes.len() > 1 {
        let mut connected: AHashSet<&str> = AHashSet::new();
        for edge in edges {
            connected.insert(edge.source.as_str());
            connected.insert(edge.target.as_str());
        }
        for node in nodes {
            if !connected.contains(node.id.as_str()) {
                report.push(ValidationFinding::DisconnectedNode(node.label.clone()));
            }
        }
    }

    if has_cycle(nodes, edges) {
        report.push(ValidationFinding::CircularDependency);
    }

    report
}

fn check_required_attributes(node: &VisualNode, report: &mut ValidationReport) {
    match &node.attributes {
        NodeAttributes::Tool { tool, .. } if tool.is_empty() => {
            report.push(ValidationFinding::MissingToolName(node.label.clone()));
        }
        NodeAttributes::Agent { agent, .. } if agent.is_empty() => {
            report.push(ValidationFinding::MissingAgentId(node.label.clone()));
        }
        NodeAttributes::Condition { condition } if condition.is_empty() => {
            report.push(ValidationFinding::EmptyCondition(node.label.clone()));
        }
        NodeAttributes::Loop { iterate_over, .. } if iterate_over.is_empty() => {
            report.push(ValidationFinding::MissingIterationSource(node.label.clone()));
        }
        _ => {}
    }
}

/// Depth-first cycle search over the non-loop-body edges. Stops at the first
/// cycle found; the report carries one aggregate finding, not an enumeration.
fn has_cycle(nodes: &[VisualNode], edges: &[VisualEdge]) -> bool {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        if edge.outlet == Outlet::LoopBody {
            continue;
        }
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut stack: AHashSet<&str> = AHashSet::new();
    nodes
        .iter()
        .any(|node| visit(node.id.as_str(), &adjacency, &mut visited, &mut stack))
}

fn visit<'a>(
    node: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
    stack: &mut AHashSet<&'a str>,
) -> bool {
    if stack.contains(node) {
        return true;
    }
    if !visited.insert(node) {
        return false;
    }
    stack.insert(node);
    if let Some(successors) = adjacency.get(node) {
        for next in successors {
            if visit(next, adjacency, visited, stack) {
                return true;
            }
        }
    }
    stack.remove(node);
    false
}

/// Reference-integrity pass over the wire form: every `next` pointer (plain
/// or branch) and every loop `body` must name a step that exists, or be
/// empty. Run on freshly decoded workflows before trusting their edges.
pub fn validate_workflow(workflow: &WorkflowDefinition) -> ValidationReport {
    let mut report = ValidationReport::default();

    if workflow.steps.is_empty() {
        report.push(ValidationFinding::EmptyWorkflow);
        return report;
    }

    for id in workflow.steps.iter().map(|s| s.id.as_str()).duplicates() {
        report.push(ValidationFinding::DuplicateStepId(id.to_string()));
    }

    let ids: AHashSet<&str> = workflow.steps.iter().map(|s| s.id.as_str()).collect();
    for step in &workflow.steps {
        let mut targets: Vec<&str> = step
            .next
            .as_ref()
            .map(|next| next.targets())
            .unwrap_or_default();
        if let StepConfig::Loop { body: Some(body), .. } = &step.config
            && !body.is_empty()
        {
            targets.push(body.as_str());
        }

        for target in targets {
            if !ids.contains(target) {
                report.push(ValidationFinding::DanglingStepReference {
                    step: step.id.clone(),
                    target: target.to_string(),
                });
            }
        }
    }

    report
}
