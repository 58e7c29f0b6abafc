//! Approver resolution
//!
//! Produces the approver rows of a node, falling back through three tiers
//! of information:
//!
//! 1. **Ledger** - the node has task entries: one row per entry, copied
//!    as-is, whatever the status.
//! 2. **Pending queue** - no ledger entries, but the task service reports
//!    pending work for the node: one pending row per queued entry.
//! 3. **Definition** - no task data at all: a single pending row labelled
//!    from the node's approver configuration.
//!
//! Every node therefore has at least one row, including nodes of a
//! definition that no instance has reached yet.

use approval_types::{ApproverType, ApproverView, ProcessNode, TaskEntry, TaskStatus};
use serde::{Deserialize, Serialize};

/// Labels used for placeholder approver rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproverLabels {
    /// Ledger entry without an assignee
    pub unknown_approver: String,
    /// Queued entry without an assignee
    pub pending_assignment: String,
    pub department_manager: String,
    pub team_leader: String,
    pub specific_members: String,
    /// Node without approver configuration
    pub unassigned: String,
}

impl Default for ApproverLabels {
    fn default() -> Self {
        Self {
            unknown_approver: "unknown approver".to_string(),
            pending_assignment: "pending assignment".to_string(),
            department_manager: "department head".to_string(),
            team_leader: "team lead".to_string(),
            specific_members: "designated members".to_string(),
            unassigned: "approver not yet assigned".to_string(),
        }
    }
}

impl ApproverLabels {
    /// Label for an approver class
    pub fn for_type(&self, approver_type: Option<ApproverType>) -> &str {
        match approver_type {
            Some(ApproverType::DepartmentManager) => &self.department_manager,
            Some(ApproverType::TeamLeader) => &self.team_leader,
            Some(ApproverType::SpecificMembers) => &self.specific_members,
            None => &self.unassigned,
        }
    }
}

/// Resolves approver rows for a node
#[derive(Clone, Debug, Default)]
pub struct ApproverResolver {
    labels: ApproverLabels,
}

impl ApproverResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: ApproverLabels) -> Self {
        Self { labels }
    }

    /// Resolve the approver rows of `node`.
    ///
    /// `tasks` are the node's ledger entries, `pending` its entries in the
    /// pending queue. The first non-empty tier wins.
    pub fn resolve<'a, T, P>(&self, node: &ProcessNode, tasks: T, pending: P) -> Vec<ApproverView>
    where
        T: IntoIterator<Item = &'a TaskEntry>,
        P: IntoIterator<Item = &'a TaskEntry>,
    {
        let from_ledger: Vec<ApproverView> = tasks
            .into_iter()
            .map(|task| self.from_ledger(task))
            .collect();
        if !from_ledger.is_empty() {
            return from_ledger;
        }

        let from_queue: Vec<ApproverView> = pending
            .into_iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .map(|task| self.from_queue(task))
            .collect();
        if !from_queue.is_empty() {
            tracing::debug!(
                node_id = %node.id,
                rows = from_queue.len(),
                "approvers taken from pending queue"
            );
            return from_queue;
        }

        vec![self.from_definition(node)]
    }

    fn from_ledger(&self, task: &TaskEntry) -> ApproverView {
        ApproverView {
            name: task
                .assignee_name()
                .unwrap_or(self.labels.unknown_approver.as_str())
                .to_string(),
            comment: task.comment.clone(),
            completed_at: task.completed_at,
            status: task.status,
        }
    }

    fn from_queue(&self, task: &TaskEntry) -> ApproverView {
        ApproverView::pending(
            task.assignee_name()
                .unwrap_or(self.labels.pending_assignment.as_str()),
        )
    }

    fn from_definition(&self, node: &ProcessNode) -> ApproverView {
        let config = &node.approver_config;
        let label = self.labels.for_type(config.approver_type);

        let name = match config.approver_type {
            Some(ApproverType::SpecificMembers) if !config.members.is_empty() => {
                format!("{}: {}", label, config.members.join(", "))
            }
            _ => label.to_string(),
        };

        ApproverView::pending(name)
    }
}

/// Resolve approver rows with the default labels
pub fn resolve_approvers<'a, T, P>(node: &ProcessNode, tasks: T, pending: P) -> Vec<ApproverView>
where
    T: IntoIterator<Item = &'a TaskEntry>,
    P: IntoIterator<Item = &'a TaskEntry>,
{
    ApproverResolver::new().resolve(node, tasks, pending)
}
