use ahash::AHashMap;

use crate::graph::{NodeAttributes, Outlet, VisualEdge, VisualNode};
use crate::workflow::{
    BranchNext, NextRef, StepConfig, WorkflowDefinition, WorkflowMeta, WorkflowStep,
};

/// Per-source successor slots resolved from the edge list.
///
/// One slot per outlet family; when several edges share a `(source, outlet)`
/// pair the last edge in list order wins. The validator reports such
/// collisions, the encoder itself stays permissive.
#[derive(Debug, Default)]
struct SuccessorSlots {
    next: Option<String>,
    when_true: Option<String>,
    when_false: Option<String>,
    body: Option<String>,
}

fn successor_index(edges: &[VisualEdge]) -> AHashMap<&str, SuccessorSlots> {
    let mut index: AHashMap<&str, SuccessorSlots> = AHashMap::new();
    for edge in edges {
        let slots = index.entry(edge.source.as_str()).or_default();
        let target = edge.target.clone();
        match edge.outlet {
            // A loop's exit edge is its plain successor.
            Outlet::Next | Outlet::Exit => slots.next = Some(target),
            Outlet::True => slots.when_true = Some(target),
            Outlet::False => slots.when_false = Some(target),
            Outlet::LoopBody => slots.body = Some(target),
        }
    }
    index
}

/// Converts a visual graph into the backend workflow shape.
///
/// Step order equals node order; execution order is the backend's concern.
/// No validation happens here: callers are expected to run
/// [`validate`](crate::validate::validate) first, otherwise unwired branches
/// silently become terminal steps.
pub fn encode(nodes: &[VisualNode], edges: &[VisualEdge], meta: WorkflowMeta) -> WorkflowDefinition {
    let mut index = successor_index(edges);

    let steps = nodes
        .iter()
        .map(|node| {
            let slots = index.remove(node.id.as_str()).unwrap_or_default();
            let (config, next) = match &node.attributes {
                NodeAttributes::Tool { tool, params } => (
                    StepConfig::Tool {
                        tool: tool.clone(),
                        params: params.clone(),
                    },
                    slots.next.map(NextRef::Step),
                ),
                NodeAttributes::Agent { agent, prompt } => (
                    StepConfig::Agent {
                        agent: agent.clone(),
                        prompt: prompt.clone(),
                    },
                    slots.next.map(NextRef::Step),
                ),
                NodeAttributes::Condition { condition } => {
                    // Branch form whenever either outlet is wired; an unset
                    // branch is an empty string, never an absent key.
                    let next = if slots.when_true.is_some() || slots.when_false.is_some() {
                        Some(NextRef::Branch(BranchNext {
                            when_true: slots.when_true.unwrap_or_default(),
                            when_false: slots.when_false.unwrap_or_default(),
                        }))
                    } else {
                        None
                    };
                    (
                        StepConfig::Condition {
                            condition: condition.clone(),
                        },
                        next,
                    )
                }
                NodeAttributes::Loop {
                    iterate_over,
                    max_iterations,
                } => (
                    StepConfig::Loop {
                        iterate_over: iterate_over.clone(),
                        max_iterations: *max_iterations,
                        body: slots.body,
                    },
                    slots.next.map(NextRef::Step),
                ),
            };

            WorkflowStep {
                id: node.id.clone(),
                name: node.label.clone(),
                kind: node.kind(),
                config,
                next,
            }
        })
        .collect();

    WorkflowDefinition {
        id: String::new(),
        name: meta.name,
        description: meta.description,
        version: "1.0".to_string(),
        steps,
        variables: AHashMap::new(),
        tags: meta.tags,
    }
}
