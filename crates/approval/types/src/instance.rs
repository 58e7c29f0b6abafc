//! Workflow instances: one execution of a process for a business entity
//!
//! An instance carries the current node pointer and the task ledger. The
//! pointer is `None` before the process starts and after it terminates.

use crate::{NodeId, ProcessNode, TaskEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Identifiers ──────────────────────────────────────────────────────

/// Unique identifier for a workflow instance
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowInstanceId(pub String);

impl WorkflowInstanceId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for WorkflowInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The business entity an instance is bound to (an expense claim, an
/// asset transfer, a leave request...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: String,
    pub entity_id: String,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.entity_type, self.entity_id)
    }
}

// ── Workflow Instance ────────────────────────────────────────────────

/// The runtime execution context of a process
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInstance {
    /// Unique instance identifier
    pub id: WorkflowInstanceId,
    /// The entity this instance was started for
    pub entity: EntityRef,
    /// The node the process pointer is on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_node_id: Option<NodeId>,
    /// Full task ledger; order is not significant
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
    /// Pending work queue as reported by the task service. May lag or
    /// duplicate `tasks`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pending_tasks: Vec<TaskEntry>,
    /// When the instance was created
    pub created_at: DateTime<Utc>,
}

impl WorkflowInstance {
    /// Create a new workflow instance
    pub fn new(entity: EntityRef) -> Self {
        Self {
            id: WorkflowInstanceId::generate(),
            entity,
            current_node_id: None,
            tasks: Vec::new(),
            pending_tasks: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = WorkflowInstanceId::new(id);
        self
    }

    pub fn with_current_node(mut self, node_id: impl Into<String>) -> Self {
        self.current_node_id = Some(NodeId::new(node_id));
        self
    }

    pub fn with_task(mut self, task: TaskEntry) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = TaskEntry>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    pub fn with_pending_task(mut self, task: TaskEntry) -> Self {
        self.pending_tasks.push(task);
        self
    }

    // ── Query methods ────────────────────────────────────────────────

    /// Get tasks for a specific node, in ledger order
    pub fn tasks_for_node(&self, node_id: &NodeId) -> Vec<&TaskEntry> {
        self.tasks.iter().filter(|t| &t.node_id == node_id).collect()
    }

    /// Check if the process pointer has left the graph
    pub fn is_finished(&self) -> bool {
        self.current_node_id.is_none()
    }

    /// Total task entries in the ledger
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

// ── Snapshot ─────────────────────────────────────────────────────────

/// A process graph together with the populated instance it drives
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub process_nodes: Vec<ProcessNode>,
    pub instance: WorkflowInstance,
}

impl ProcessSnapshot {
    pub fn new(process_nodes: Vec<ProcessNode>, instance: WorkflowInstance) -> Self {
        Self {
            process_nodes,
            instance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_instance() -> WorkflowInstance {
        WorkflowInstance::new(EntityRef::new("expense_claim", "EC-1042"))
    }

    #[test]
    fn test_create_instance() {
        let inst = make_instance();
        assert!(inst.is_finished());
        assert_eq!(inst.task_count(), 0);
        assert!(inst.pending_tasks.is_empty());
    }

    #[test]
    fn test_tasks_for_node() {
        let inst = make_instance()
            .with_current_node("manager")
            .with_task(TaskEntry::approved("manager").with_assignee("Ana"))
            .with_task(TaskEntry::pending("finance"))
            .with_task(TaskEntry::pending("manager").with_assignee("Ben"));

        let manager = inst.tasks_for_node(&NodeId::new("manager"));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager[0].assignee_name(), Some("Ana"));
        assert_eq!(manager[1].assignee_name(), Some("Ben"));
        assert!(inst.tasks_for_node(&NodeId::new("other")).is_empty());

        assert!(!inst.is_finished());
    }

    #[test]
    fn test_instance_id() {
        let id = WorkflowInstanceId::generate();
        assert_eq!(id.0.len(), 36);
        assert_ne!(id, WorkflowInstanceId::generate());

        let named = WorkflowInstanceId::new("inst-1");
        assert_eq!(format!("{}", named), "inst-1");
    }

    #[test]
    fn test_entity_display() {
        let entity = EntityRef::new("asset_transfer", "AT-7");
        assert_eq!(entity.to_string(), "asset_transfer/AT-7");
    }

    #[test]
    fn test_snapshot_deserialize_defaults() {
        let json = r#"{
            "process_nodes": [
                { "id": "a", "kind": "approval", "order": 1 }
            ],
            "instance": {
                "id": "inst-9",
                "entity": { "entity_type": "leave", "entity_id": "L-3" },
                "created_at": "2026-03-01T08:00:00Z"
            }
        }"#;
        let snapshot: ProcessSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.process_nodes.len(), 1);
        assert_eq!(snapshot.instance.id, WorkflowInstanceId::new("inst-9"));
        assert!(snapshot.instance.current_node_id.is_none());
        assert!(snapshot.instance.tasks.is_empty());
        assert!(snapshot.instance.pending_tasks.is_empty());
    }
}
