//! Error types for the approval layer

use crate::WorkflowInstanceId;

/// Errors that can occur while loading approval data.
///
/// Shape problems in business data (unknown node ids, missing approver
/// configuration) are absorbed by the projection and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    #[error("Process definition not found for instance: {0}")]
    DefinitionNotFound(WorkflowInstanceId),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for approval operations
pub type ApprovalResult<T> = Result<T, ApprovalError>;
