//! Workflow store: the read seam to wherever instances and process
//! definitions live
//!
//! Both reads may be slow and may fail. The engine never writes through
//! this trait.

use approval_types::{
    ApprovalError, ApprovalResult, EntityRef, ProcessSnapshot, WorkflowInstance, WorkflowInstanceId,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Read access to workflow instances and their process definitions
#[async_trait]
pub trait WorkflowStore: Send + Sync {
    /// Locate the instance bound to a business entity.
    ///
    /// `Ok(None)` means no workflow was ever started for the entity.
    async fn fetch_workflow_instance(
        &self,
        entity: &EntityRef,
    ) -> ApprovalResult<Option<WorkflowInstance>>;

    /// Load the process graph together with the populated instance
    async fn fetch_process_definition(
        &self,
        instance_id: &WorkflowInstanceId,
    ) -> ApprovalResult<ProcessSnapshot>;
}

/// In-memory store keyed by entity
#[derive(Debug, Default)]
pub struct MemoryStore {
    by_entity: RwLock<HashMap<EntityRef, WorkflowInstanceId>>,
    snapshots: RwLock<HashMap<WorkflowInstanceId, ProcessSnapshot>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for setting up a store before sharing it
    pub fn with_snapshot(mut self, snapshot: ProcessSnapshot) -> Self {
        let instance = &snapshot.instance;
        self.by_entity
            .get_mut()
            .insert(instance.entity.clone(), instance.id.clone());
        self.snapshots
            .get_mut()
            .insert(instance.id.clone(), snapshot);
        self
    }

    /// Insert or replace the snapshot of an instance
    pub async fn insert(&self, snapshot: ProcessSnapshot) {
        let instance = &snapshot.instance;
        self.by_entity
            .write()
            .await
            .insert(instance.entity.clone(), instance.id.clone());
        self.snapshots
            .write()
            .await
            .insert(instance.id.clone(), snapshot);
    }

    /// Make every read fail, as an unreachable backend would
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> ApprovalResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApprovalError::Store("store unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WorkflowStore for MemoryStore {
    async fn fetch_workflow_instance(
        &self,
        entity: &EntityRef,
    ) -> ApprovalResult<Option<WorkflowInstance>> {
        self.check_available()?;

        let Some(instance_id) = self.by_entity.read().await.get(entity).cloned() else {
            return Ok(None);
        };
        Ok(self
            .snapshots
            .read()
            .await
            .get(&instance_id)
            .map(|s| s.instance.clone()))
    }

    async fn fetch_process_definition(
        &self,
        instance_id: &WorkflowInstanceId,
    ) -> ApprovalResult<ProcessSnapshot> {
        self.check_available()?;

        self.snapshots
            .read()
            .await
            .get(instance_id)
            .cloned()
            .ok_or_else(|| ApprovalError::DefinitionNotFound(instance_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approval_types::{ProcessNode, TaskEntry};

    fn make_snapshot(entity_id: &str) -> ProcessSnapshot {
        let instance = WorkflowInstance::new(EntityRef::new("expense_claim", entity_id))
            .with_current_node("manager")
            .with_task(TaskEntry::pending("manager"));
        ProcessSnapshot::new(vec![ProcessNode::approval("manager", "Manager")], instance)
    }

    #[tokio::test]
    async fn test_fetch_by_entity() {
        let snapshot = make_snapshot("EC-1");
        let instance_id = snapshot.instance.id.clone();
        let store = MemoryStore::new().with_snapshot(snapshot);

        let found = store
            .fetch_workflow_instance(&EntityRef::new("expense_claim", "EC-1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, instance_id);

        let missing = store
            .fetch_workflow_instance(&EntityRef::new("expense_claim", "EC-2"))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_fetch_definition() {
        let store = MemoryStore::new();
        let snapshot = make_snapshot("EC-3");
        let instance_id = snapshot.instance.id.clone();
        store.insert(snapshot).await;

        let loaded = store.fetch_process_definition(&instance_id).await.unwrap();
        assert_eq!(loaded.process_nodes.len(), 1);
        assert_eq!(loaded.instance.task_count(), 1);

        let result = store
            .fetch_process_definition(&WorkflowInstanceId::new("nonexistent"))
            .await;
        assert!(matches!(result, Err(ApprovalError::DefinitionNotFound(_))));
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MemoryStore::new().with_snapshot(make_snapshot("EC-4"));
        store.set_failing(true);

        let result = store
            .fetch_workflow_instance(&EntityRef::new("expense_claim", "EC-4"))
            .await;
        assert!(matches!(result, Err(ApprovalError::Store(_))));

        store.set_failing(false);
        assert!(store
            .fetch_workflow_instance(&EntityRef::new("expense_claim", "EC-4"))
            .await
            .unwrap()
            .is_some());
    }
}
