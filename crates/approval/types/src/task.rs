//! Task ledger entries: units of work bound to a process node
//!
//! Entries are created when an instance advances to (or past) a node and
//! are only ever transitioned, never deleted. A node with several
//! approvers owns several entries sharing the same `node_id`.

use crate::NodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Queued, waiting for the approver
    Pending,
    /// Being worked on
    Running,
    /// Closed without an explicit decision
    Completed,
    /// Closed with an approval
    Approved,
    /// Closed with a veto
    Rejected,
}

impl TaskStatus {
    /// Completed or approved
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Completed | Self::Approved)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A person a task is assigned to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Display name
    pub name: String,
}

impl Assignee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One unit of work bound to exactly one process node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// The node this task belongs to (lookup only)
    pub node_id: NodeId,
    /// Current status
    pub status: TaskStatus,
    /// Who must act; `None` when unassigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    /// Decision comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the task reached a terminal state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl TaskEntry {
    /// Create a new task entry
    pub fn new(node_id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            node_id: NodeId::new(node_id),
            status,
            assignee: None,
            comment: None,
            completed_at: None,
        }
    }

    pub fn pending(node_id: impl Into<String>) -> Self {
        Self::new(node_id, TaskStatus::Pending)
    }

    pub fn running(node_id: impl Into<String>) -> Self {
        Self::new(node_id, TaskStatus::Running)
    }

    pub fn completed(node_id: impl Into<String>) -> Self {
        Self::new(node_id, TaskStatus::Completed)
    }

    pub fn approved(node_id: impl Into<String>) -> Self {
        Self::new(node_id, TaskStatus::Approved)
    }

    pub fn rejected(node_id: impl Into<String>) -> Self {
        Self::new(node_id, TaskStatus::Rejected)
    }

    pub fn with_assignee(mut self, name: impl Into<String>) -> Self {
        self.assignee = Some(Assignee::new(name));
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }

    /// Assignee display name, if any
    pub fn assignee_name(&self) -> Option<&str> {
        self.assignee.as_ref().map(|a| a.name.as_str())
    }
}
