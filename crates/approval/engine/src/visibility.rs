//! Node visibility
//!
//! A node is shown once the process has touched it: it has closed,
//! running or pending work, or the process pointer sits on it. Nodes with
//! no tasks that the pointer has not reached are future steps and stay
//! hidden.
//!
//! The rule assumes a linear process with a single pointer. A branching
//! graph would need a set of active nodes instead.

use approval_types::{NodeId, ProcessNode, TaskEntry, TaskStatus};

/// Decide whether a node is visible at this point of the process.
///
/// `tasks` may chain the node's ledger entries with its queued pending
/// work. `current_node_id` is `None` before the process starts and after
/// it ends; only task-driven visibility applies then.
pub fn is_visible<'a, I>(node: &ProcessNode, tasks: I, current_node_id: Option<&NodeId>) -> bool
where
    I: IntoIterator<Item = &'a TaskEntry>,
{
    if current_node_id == Some(&node.id) {
        return true;
    }

    // Rejected tasks alone do not surface a node; a rejection normally
    // leaves the pointer on it.
    tasks.into_iter().any(|task| match task.status {
        TaskStatus::Completed | TaskStatus::Approved | TaskStatus::Running | TaskStatus::Pending => {
            true
        }
        TaskStatus::Rejected => false,
    })
}
