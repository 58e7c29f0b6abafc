//! Process view service: loads a snapshot for an entity and projects it
//!
//! Display callers use [`ProcessViewService::load_views`], which fails
//! open: a store error is logged and reported as "no workflow to show".

use crate::config::ProjectionConfig;
use crate::projector::ProcessProjector;
use crate::store::WorkflowStore;
use crate::summary::ProjectionSummary;
use approval_types::{ApprovalResult, DerivedNodeView, EntityRef, ProcessSnapshot};

/// Loads process views for business entities
#[derive(Debug)]
pub struct ProcessViewService<S> {
    store: S,
    projector: ProcessProjector,
}

impl<S: WorkflowStore> ProcessViewService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            projector: ProcessProjector::new(),
        }
    }

    pub fn with_config(store: S, config: ProjectionConfig) -> Self {
        Self {
            store,
            projector: ProcessProjector::with_config(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and project the process of `entity`, propagating store errors.
    ///
    /// An entity without a workflow yields an empty sequence.
    pub async fn try_load_views(&self, entity: &EntityRef) -> ApprovalResult<Vec<DerivedNodeView>> {
        Ok(match self.load_snapshot(entity).await? {
            Some(snapshot) => self.project(&snapshot),
            None => Vec::new(),
        })
    }

    /// Load and project the process of `entity`, treating any store error
    /// as "no workflow".
    pub async fn load_views(&self, entity: &EntityRef) -> Vec<DerivedNodeView> {
        self.try_load_views(entity).await.unwrap_or_else(|err| {
            tracing::warn!(entity = %entity, error = %err, "Failed to load workflow, showing none");
            Vec::new()
        })
    }

    /// Load views plus their summary, failing open like [`Self::load_views`]
    pub async fn load_summary(
        &self,
        entity: &EntityRef,
    ) -> (Vec<DerivedNodeView>, ProjectionSummary) {
        match self.load_snapshot(entity).await {
            Ok(Some(snapshot)) => {
                let views = self.project(&snapshot);
                let summary = ProjectionSummary::from_views(&views, Some(&snapshot.instance));
                (views, summary)
            }
            Ok(None) => (Vec::new(), ProjectionSummary::default()),
            Err(err) => {
                tracing::warn!(entity = %entity, error = %err, "Failed to load workflow, showing none");
                (Vec::new(), ProjectionSummary::default())
            }
        }
    }

    async fn load_snapshot(&self, entity: &EntityRef) -> ApprovalResult<Option<ProcessSnapshot>> {
        let Some(instance) = self.store.fetch_workflow_instance(entity).await? else {
            tracing::debug!(entity = %entity, "No workflow instance for entity");
            return Ok(None);
        };

        let snapshot = self.store.fetch_process_definition(&instance.id).await?;
        Ok(Some(snapshot))
    }

    fn project(&self, snapshot: &ProcessSnapshot) -> Vec<DerivedNodeView> {
        self.projector
            .project(&snapshot.process_nodes, Some(&snapshot.instance))
    }
}
