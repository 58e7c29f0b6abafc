//! Process definitions: the static graph of approval steps
//!
//! A process is authored once, before any instance runs, and is read-only
//! from then on. Nodes are totally ordered by their `order` ordinal; two
//! nodes sharing an ordinal keep their authored relative order.

use serde::{Deserialize, Serialize};

// ── Identifiers ──────────────────────────────────────────────────────

/// Unique identifier for a process node
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Process Node ─────────────────────────────────────────────────────

/// One step in a process definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessNode {
    /// Unique identifier within the process
    pub id: NodeId,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Node kind; only approval nodes are projected
    pub kind: NodeKind,
    /// Position ordinal
    #[serde(default)]
    pub order: f64,
    /// Default approver class used before any task exists
    #[serde(default)]
    pub approver_config: ApproverConfig,
}

impl ProcessNode {
    /// Create a new process node
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(id),
            name: name.into(),
            kind,
            order: 0.0,
            approver_config: ApproverConfig::default(),
        }
    }

    /// Create an approval node
    pub fn approval(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Approval)
    }

    /// Create a start node
    pub fn start(id: impl Into<String>) -> Self {
        Self::new(id, "Start", NodeKind::Start)
    }

    /// Create an end node
    pub fn end(id: impl Into<String>) -> Self {
        Self::new(id, "End", NodeKind::End)
    }

    /// Create an automation node
    pub fn automation(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Automation)
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = order;
        self
    }

    pub fn with_approver(mut self, approver_type: ApproverType) -> Self {
        self.approver_config.approver_type = Some(approver_type);
        self
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approver_config.approver_type = Some(ApproverType::SpecificMembers);
        self.approver_config.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this node takes part in status projection
    pub fn is_approval(&self) -> bool {
        self.kind == NodeKind::Approval
    }
}

// ── Node Kind ────────────────────────────────────────────────────────

/// The kind of a process node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry point of the process
    Start,
    /// A human approval step
    Approval,
    /// A step performed by the system without an approver
    Automation,
    /// Terminal node
    End,
}

// ── Approver Configuration ───────────────────────────────────────────

/// The class of approver a node defaults to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproverType {
    /// The head of the initiator's department
    DepartmentManager,
    /// The initiator's team leader
    TeamLeader,
    /// A fixed list of named members
    SpecificMembers,
}

/// Static approver configuration of a node
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproverConfig {
    /// Approver class; `None` when the author left it unspecified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_type: Option<ApproverType>,
    /// Named members, meaningful for [`ApproverType::SpecificMembers`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}
