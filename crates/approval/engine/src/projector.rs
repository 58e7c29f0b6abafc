//! Process projector: the ordered, annotated view of an approval process
//!
//! Keeps approval nodes, drops the ones that are not visible (ledger
//! entries and queued pending work both count), orders the
//! rest by their `order` ordinal and attaches status and approver rows.
//! Sorting is stable, so nodes sharing an ordinal keep their authored
//! relative order and repeated projections of one snapshot are identical.

use crate::approvers::ApproverResolver;
use crate::config::ProjectionConfig;
use crate::status::resolve_status;
use crate::task_index::TaskIndex;
use crate::visibility::is_visible;
use approval_types::{DerivedNodeView, ProcessNode, TaskStatus, WorkflowInstance};

/// Projects process nodes and an instance into node views
#[derive(Clone, Debug, Default)]
pub struct ProcessProjector {
    approvers: ApproverResolver,
    include_hidden: bool,
}

impl ProcessProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            approvers: ApproverResolver::with_labels(config.labels),
            include_hidden: config.include_hidden,
        }
    }

    /// Project `nodes` against `instance`.
    ///
    /// Returns an empty sequence when there is no instance: nothing has
    /// been started for the entity, so there is nothing to display.
    pub fn project(
        &self,
        nodes: &[ProcessNode],
        instance: Option<&WorkflowInstance>,
    ) -> Vec<DerivedNodeView> {
        let Some(instance) = instance else {
            return Vec::new();
        };

        let index = TaskIndex::build(instance);
        let current = instance.current_node_id.as_ref();

        let mut selected: Vec<(&ProcessNode, bool)> = nodes
            .iter()
            .filter(|node| node.is_approval())
            .map(|node| {
                let tasks = index.tasks_for(&node.id).iter().copied();
                let queued = index
                    .pending_for(&node.id)
                    .iter()
                    .copied()
                    .filter(|task| task.status == TaskStatus::Pending);
                (node, is_visible(node, tasks.chain(queued), current))
            })
            .filter(|(_, visible)| *visible || self.include_hidden)
            .collect();

        // `sort_by` is stable; adding 0.0 folds -0.0 into 0.0
        selected.sort_by(|(a, _), (b, _)| (a.order + 0.0).total_cmp(&(b.order + 0.0)));

        let views: Vec<DerivedNodeView> = selected
            .into_iter()
            .map(|(node, visible)| {
                let tasks = index.tasks_for(&node.id);
                DerivedNodeView {
                    node: node.clone(),
                    status: resolve_status(node, tasks.iter().copied()),
                    approvers: self.approvers.resolve(
                        node,
                        tasks.iter().copied(),
                        index.pending_for(&node.id).iter().copied(),
                    ),
                    visible,
                }
            })
            .collect();

        tracing::debug!(
            instance_id = %instance.id,
            nodes = nodes.len(),
            projected = views.len(),
            "process projected"
        );

        views
    }
}

/// Project with the default configuration
pub fn project(nodes: &[ProcessNode], instance: Option<&WorkflowInstance>) -> Vec<DerivedNodeView> {
    ProcessProjector::new().project(nodes, instance)
}
