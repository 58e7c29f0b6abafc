//! Projection summary: per-status counts and the overall outcome

use approval_types::{DerivedNodeView, NodeId, NodeStatus, WorkflowInstance};
use serde::{Deserialize, Serialize};

/// Aggregate view over a projection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub rejected: usize,
    /// Overall outcome of the process so far
    pub outcome: NodeStatus,
    /// Node the process pointer is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_node_id: Option<NodeId>,
}

impl ProjectionSummary {
    /// Summarize a projection of `instance`.
    ///
    /// Counts cover every view. The outcome only looks at visible views:
    /// any rejection rejects the process, a finished pointer over fully
    /// completed nodes completes it, and anything else that is visible
    /// means the process is under way.
    pub fn from_views(views: &[DerivedNodeView], instance: Option<&WorkflowInstance>) -> Self {
        let mut summary = Self {
            total: views.len(),
            current_node_id: instance.and_then(|i| i.current_node_id.clone()),
            ..Self::default()
        };

        for view in views {
            match view.status {
                NodeStatus::NotStarted => summary.not_started += 1,
                NodeStatus::InProgress => summary.in_progress += 1,
                NodeStatus::Completed => summary.completed += 1,
                NodeStatus::Rejected => summary.rejected += 1,
            }
        }

        let visible: Vec<&DerivedNodeView> = views.iter().filter(|v| v.visible).collect();
        let finished = instance.map(|i| i.is_finished()).unwrap_or(false);

        summary.outcome = if visible.iter().any(|v| v.status == NodeStatus::Rejected) {
            NodeStatus::Rejected
        } else if !visible.is_empty()
            && finished
            && visible.iter().all(|v| v.status == NodeStatus::Completed)
        {
            NodeStatus::Completed
        } else if !visible.is_empty() {
            NodeStatus::InProgress
        } else {
            NodeStatus::NotStarted
        };

        summary
    }

    /// Find the view of the node the process pointer is on
    pub fn current<'v>(&self, views: &'v [DerivedNodeView]) -> Option<&'v DerivedNodeView> {
        let current = self.current_node_id.as_ref()?;
        views.iter().find(|v| &v.node.id == current)
    }
}
