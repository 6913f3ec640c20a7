use serde::{Deserialize, Serialize};
use std::fmt;

use super::NodeKind;

/// A named output port on a node.
///
/// The outlet decides which successor field the edge populates when the
/// graph is encoded: `true`/`false` feed a condition step's branch pair,
/// `loop-body` feeds a loop step's `config.body`, and `exit` (loop) or the
/// unlabeled default feed the plain `next` pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outlet {
    #[default]
    Next,
    True,
    False,
    LoopBody,
    Exit,
}

impl Outlet {
    /// Whether an edge may leave a node of `kind` through this outlet.
    pub fn legal_for(&self, kind: NodeKind) -> bool {
        match self {
            Outlet::Next => !matches!(kind, NodeKind::Condition),
            Outlet::True | Outlet::False => kind == NodeKind::Condition,
            Outlet::LoopBody | Outlet::Exit => kind == NodeKind::Loop,
        }
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outlet::Next => "next",
            Outlet::True => "true",
            Outlet::False => "false",
            Outlet::LoopBody => "loop-body",
            Outlet::Exit => "exit",
        };
        write!(f, "{}", name)
    }
}

/// A directed connection between two visual nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, rename = "sourceOutlet")]
    pub outlet: Outlet,
}

impl VisualEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        outlet: Outlet,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            outlet,
        }
    }

    /// The deterministic edge id used by `connect` and the decoder.
    pub(crate) fn derived_id(source: &str, outlet: Outlet, target: &str) -> String {
        format!("e-{}-{}-{}", source, outlet, target)
    }
}
