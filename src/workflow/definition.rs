use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::WireError;
use crate::graph::NodeKind;
use crate::graph::node::default_max_iterations;

fn default_version() -> String {
    "1.0".to_string()
}

/// The backend-facing workflow shape, matched field-for-field to what the
/// workflow service sends and receives over HTTP.
///
/// `id` and `version` are assigned by the backend; the encoder leaves them
/// at their defaults and the backend fills them in on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub steps: Vec<WorkflowStep>,
    /// Global workflow variables. Always present on the wire; the encoder
    /// emits it empty (populating variables is the backend's business).
    #[serde(default)]
    pub variables: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkflowDefinition {
    /// Parses a workflow from its backend JSON representation.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(|e| WireError::Parse(e.to_string()))
    }

    /// Serializes the workflow to the backend JSON representation.
    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string_pretty(self).map_err(|e| WireError::Serialize(e.to_string()))
    }

    pub fn step(&self, id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == id)
    }
}

/// A single step in a workflow. Serializes as
/// `{id, name, type, config, next?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub config: StepConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextRef>,
}

/// Kind-specific step settings, flattened from the visual node attributes.
///
/// The variants are untagged on the wire; the step's `type` field is the
/// authoritative kind, and each variant's required field names are disjoint,
/// so deserialization is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepConfig {
    Tool {
        tool: String,
        #[serde(default)]
        params: AHashMap<String, serde_json::Value>,
    },
    Agent {
        agent: String,
        #[serde(default)]
        prompt: String,
    },
    Condition {
        condition: String,
    },
    Loop {
        #[serde(rename = "iterateOver")]
        iterate_over: String,
        #[serde(rename = "maxIterations", default = "default_max_iterations")]
        max_iterations: u32,
        /// Id of the step executed for each iteration.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
}

/// A step's successor wiring.
///
/// Plain steps point at a single successor id; condition steps always use
/// the two-key branch form. A terminal step has no `next` at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NextRef {
    Step(String),
    Branch(BranchNext),
}

/// The `{true, false}` successor pair of a condition step. An unset branch
/// is an empty string, never an absent key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BranchNext {
    #[serde(rename = "true")]
    pub when_true: String,
    #[serde(rename = "false")]
    pub when_false: String,
}

impl NextRef {
    /// All non-empty step ids this reference points at.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            NextRef::Step(id) => {
                if id.is_empty() {
                    vec![]
                } else {
                    vec![id.as_str()]
                }
            }
            NextRef::Branch(branch) => [&branch.when_true, &branch.when_false]
                .into_iter()
                .filter(|id| !id.is_empty())
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Workflow metadata supplied by the editor's save dialog, attached to the
/// encoded definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowMeta {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl WorkflowMeta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
