use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds understood by the backend executor.
///
/// The lowercase serde names double as the wire `type` strings on
/// [`WorkflowStep`](crate::workflow::WorkflowStep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Tool,
    Agent,
    Condition,
    Loop,
}

impl NodeKind {
    /// The default display label for a freshly created node of this kind.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeKind::Tool => "Tool",
            NodeKind::Agent => "Agent",
            NodeKind::Condition => "Condition",
            NodeKind::Loop => "Loop",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Tool => "tool",
            NodeKind::Agent => "agent",
            NodeKind::Condition => "condition",
            NodeKind::Loop => "loop",
        };
        write!(f, "{}", name)
    }
}

/// A 2D canvas coordinate. Presentation only, no semantic invariant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind-specific node configuration.
///
/// This is a tagged variant type rather than a loose string map: the `kind`
/// tag fixes which fields exist, so a tool node can never carry loop
/// settings. Empty strings stand in for "not yet filled in by the user" and
/// are what the validator checks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeAttributes {
    Tool {
        /// Name of the backend tool to execute.
        tool: String,
        /// Tool invocation parameters, passed through to the backend verbatim.
        #[serde(default)]
        params: AHashMap<String, serde_json::Value>,
    },
    Agent {
        /// Identifier of the backend agent to delegate to.
        agent: String,
        #[serde(default)]
        prompt: String,
    },
    Condition {
        /// Boolean expression text, evaluated by the backend.
        condition: String,
    },
    Loop {
        /// Context reference naming the collection to iterate over.
        #[serde(rename = "iterateOver")]
        iterate_over: String,
        #[serde(rename = "maxIterations", default = "default_max_iterations")]
        max_iterations: u32,
    },
}

pub(crate) fn default_max_iterations() -> u32 {
    10
}

impl NodeAttributes {
    /// Empty attributes for a freshly created node of the given kind.
    pub fn empty(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Tool => NodeAttributes::Tool {
                tool: String::new(),
                params: AHashMap::new(),
            },
            NodeKind::Agent => NodeAttributes::Agent {
                agent: String::new(),
                prompt: String::new(),
            },
            NodeKind::Condition => NodeAttributes::Condition {
                condition: String::new(),
            },
            NodeKind::Loop => NodeAttributes::Loop {
                iterate_over: String::new(),
                max_iterations: default_max_iterations(),
            },
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeAttributes::Tool { .. } => NodeKind::Tool,
            NodeAttributes::Agent { .. } => NodeKind::Agent,
            NodeAttributes::Condition { .. } => NodeKind::Condition,
            NodeAttributes::Loop { .. } => NodeKind::Loop,
        }
    }
}

/// A node in the editable visual graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub position: Position,
    pub attributes: NodeAttributes,
}

impl VisualNode {
    /// Creates a node with empty attributes and a label derived from the kind.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: kind.default_label().to_string(),
            position: Position::default(),
            attributes: NodeAttributes::empty(kind),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_attributes(mut self, attributes: NodeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// The node kind, derived from the attributes variant.
    pub fn kind(&self) -> NodeKind {
        self.attributes.kind()
    }
}
