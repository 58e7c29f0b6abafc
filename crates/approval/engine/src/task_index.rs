//! Task index: the ledger grouped by node
//!
//! Built once per projection so that looking up a node's tasks is a map
//! access instead of a scan of the whole ledger. Within a node, entries
//! keep ledger order.

use approval_types::{NodeId, TaskEntry, WorkflowInstance};
use std::collections::HashMap;

/// Tasks and queued pending work of one instance, keyed by node
#[derive(Clone, Debug, Default)]
pub struct TaskIndex<'a> {
    tasks: HashMap<&'a NodeId, Vec<&'a TaskEntry>>,
    pending: HashMap<&'a NodeId, Vec<&'a TaskEntry>>,
}

impl<'a> TaskIndex<'a> {
    /// Group an instance's ledger and pending queue by node id
    pub fn build(instance: &'a WorkflowInstance) -> Self {
        Self {
            tasks: group(&instance.tasks),
            pending: group(&instance.pending_tasks),
        }
    }

    /// Ledger entries for a node; empty when the node has none
    pub fn tasks_for(&self, node_id: &NodeId) -> &[&'a TaskEntry] {
        self.tasks.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pending-queue entries for a node
    pub fn pending_for(&self, node_id: &NodeId) -> &[&'a TaskEntry] {
        self.pending.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn group(entries: &[TaskEntry]) -> HashMap<&NodeId, Vec<&TaskEntry>> {
    let mut grouped: HashMap<&NodeId, Vec<&TaskEntry>> = HashMap::new();
    for entry in entries {
        grouped.entry(&entry.node_id).or_default().push(entry);
    }
    grouped
}
