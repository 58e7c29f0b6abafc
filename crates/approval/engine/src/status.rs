//! Node status resolution
//!
//! Rules, first match wins:
//!
//! 1. any task rejected → `Rejected`
//! 2. at least one task completed/approved and none pending → `Completed`
//! 3. at least one task pending → `InProgress`
//! 4. otherwise → `NotStarted`
//!
//! A single veto ends the node. A lingering pending task keeps a node in
//! progress even after other approvers signed off.

use approval_types::{NodeStatus, ProcessNode, TaskEntry, TaskStatus};

/// Resolve the status of a node from the tasks bound to it.
///
/// `tasks` is expected to hold only the node's own entries. An empty set
/// resolves to [`NodeStatus::NotStarted`].
pub fn resolve_status<'a, I>(node: &ProcessNode, tasks: I) -> NodeStatus
where
    I: IntoIterator<Item = &'a TaskEntry>,
{
    let mut any_closed = false;
    let mut any_pending = false;

    for task in tasks {
        match task.status {
            TaskStatus::Rejected => {
                tracing::trace!(node_id = %node.id, "node rejected");
                return NodeStatus::Rejected;
            }
            TaskStatus::Pending => any_pending = true,
            status => any_closed |= status.is_closed(),
        }
    }

    if any_closed && !any_pending {
        NodeStatus::Completed
    } else if any_pending {
        NodeStatus::InProgress
    } else {
        NodeStatus::NotStarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ProcessNode {
        ProcessNode::approval("review", "Review")
    }

    #[test]
    fn test_no_tasks_is_not_started() {
        let tasks: Vec<TaskEntry> = Vec::new();
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::NotStarted);
    }

    #[test]
    fn test_rejection_dominates() {
        let tasks = vec![
            TaskEntry::approved("review"),
            TaskEntry::completed("review"),
            TaskEntry::rejected("review"),
            TaskEntry::pending("review"),
        ];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::Rejected);
    }

    #[test]
    fn test_all_closed_is_completed() {
        let tasks = vec![TaskEntry::approved("review"), TaskEntry::completed("review")];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::Completed);
    }

    #[test]
    fn test_lingering_pending_keeps_in_progress() {
        let tasks = vec![TaskEntry::completed("review"), TaskEntry::pending("review")];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::InProgress);
    }

    #[test]
    fn test_only_pending_is_in_progress() {
        let tasks = vec![TaskEntry::pending("review")];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::InProgress);
    }

    #[test]
    fn test_running_only_is_not_started() {
        let tasks = vec![TaskEntry::running("review")];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::NotStarted);
    }

    #[test]
    fn test_running_does_not_block_completion() {
        let tasks = vec![TaskEntry::approved("review"), TaskEntry::running("review")];
        assert_eq!(resolve_status(&node(), &tasks), NodeStatus::Completed);
    }
}
