//! Derived views: what a projection produces for each node
//!
//! Views are ephemeral. They are recomputed from a snapshot on every
//! request and never persisted.

use crate::{ProcessNode, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Projected status of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// No task has reached the node yet
    #[default]
    NotStarted,
    /// Work is queued on the node
    InProgress,
    /// Every task on the node is closed
    Completed,
    /// At least one approver vetoed
    Rejected,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One approver row of a node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApproverView {
    /// Display name or placeholder label
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
}

impl ApproverView {
    /// A row with no decision recorded yet
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            completed_at: None,
            status: TaskStatus::Pending,
        }
    }
}

/// The projected view of one approval node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedNodeView {
    pub node: ProcessNode,
    pub status: NodeStatus,
    pub approvers: Vec<ApproverView>,
    pub visible: bool,
}
