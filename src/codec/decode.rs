use crate::graph::{NodeAttributes, Outlet, VisualEdge, VisualNode, WorkflowGraph};
use crate::workflow::{NextRef, StepConfig, WorkflowDefinition};

/// Fixed grid used when laying out decoded steps. Purely cosmetic; the only
/// promise is that decoding the same workflow twice yields the same layout.
pub const GRID_COLUMNS: usize = 3;
pub const COLUMN_PITCH: f64 = 280.0;
pub const ROW_PITCH: f64 = 160.0;
pub const GRID_ORIGIN: (f64, f64) = (80.0, 80.0);

fn grid_position(index: usize) -> (f64, f64) {
    let (x0, y0) = GRID_ORIGIN;
    let col = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    (
        x0 + col as f64 * COLUMN_PITCH,
        y0 + row as f64 * ROW_PITCH,
    )
}

/// Converts a backend workflow back into an editable visual graph.
///
/// Node and edge ids are derived from the step ids, so a decode/encode round
/// trip is identity at the id level. Positions are not stored on the wire and
/// come from the fixed grid instead.
///
/// Dangling step references are passed through as-is; run
/// [`validate_workflow`](crate::validate::validate_workflow) on the input (or
/// [`validate`](crate::validate::validate) on the output) to surface them.
pub fn decode(workflow: &WorkflowDefinition) -> WorkflowGraph {
    let mut nodes = Vec::with_capacity(workflow.steps.len());
    let mut edges = Vec::new();

    for (index, step) in workflow.steps.iter().enumerate() {
        let attributes = match &step.config {
            StepConfig::Tool { tool, params } => NodeAttributes::Tool {
                tool: tool.clone(),
                params: params.clone(),
            },
            StepConfig::Agent { agent, prompt } => NodeAttributes::Agent {
                agent: agent.clone(),
                prompt: prompt.clone(),
            },
            StepConfig::Condition { condition } => NodeAttributes::Condition {
                condition: condition.clone(),
            },
            StepConfig::Loop {
                iterate_over,
                max_iterations,
                body: _,
            } => NodeAttributes::Loop {
                iterate_over: iterate_over.clone(),
                max_iterations: *max_iterations,
            },
        };

        let label = if step.name.is_empty() {
            attributes.kind().default_label().to_string()
        } else {
            step.name.clone()
        };

        let (x, y) = grid_position(index);
        nodes.push(VisualNode {
            id: step.id.clone(),
            label,
            position: crate::graph::Position::new(x, y),
            attributes,
        });

        match &step.next {
            Some(NextRef::Step(target)) if !target.is_empty() => {
                edges.push(reconstructed_edge(&step.id, Outlet::Next, target));
            }
            Some(NextRef::Branch(branch)) => {
                if !branch.when_true.is_empty() {
                    edges.push(reconstructed_edge(&step.id, Outlet::True, &branch.when_true));
                }
                if !branch.when_false.is_empty() {
                    edges.push(reconstructed_edge(&step.id, Outlet::False, &branch.when_false));
                }
            }
            _ => {}
        }

        if let StepConfig::Loop { body: Some(body), .. } = &step.config
            && !body.is_empty()
        {
            edges.push(reconstructed_edge(&step.id, Outlet::LoopBody, body));
        }
    }

    WorkflowGraph::new(nodes, edges)
}

fn reconstructed_edge(source: &str, outlet: Outlet, target: &str) -> VisualEdge {
    VisualEdge::new(VisualEdge::derived_id(source, outlet, target), source, target, outlet)
}
