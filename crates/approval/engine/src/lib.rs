//! Approval Process Status Engine
//!
//! Derives a read-only view of an approval process from its static node
//! graph and the task ledger of one instance. Every derivation here is a
//! pure function over an immutable snapshot: no locking, no I/O, and the
//! same snapshot always projects to the same ordered output.
//!
//! # Architecture
//!
//! - [`TaskIndex`] - Groups the ledger by node once per projection
//! - [`resolve_status`] - Node status from the node's tasks (rejection dominates)
//! - [`is_visible`] - Whether a node is shown at this point in the process
//! - [`ApproverResolver`] - Approver rows with a three-tier fallback
//! - [`ProcessProjector`] - Composes the above into an ordered view
//! - [`ProcessViewService`] - Loads snapshots from a [`WorkflowStore`] and
//!   projects them, failing open on store errors
//!
//! # Example
//!
//! ```rust
//! use approval_engine::project;
//! use approval_types::*;
//!
//! let nodes = vec![
//!     ProcessNode::approval("manager", "Manager").with_order(1.0),
//!     ProcessNode::approval("finance", "Finance")
//!         .with_order(2.0)
//!         .with_approver(ApproverType::TeamLeader),
//! ];
//! let instance = WorkflowInstance::new(EntityRef::new("expense_claim", "EC-1"))
//!     .with_current_node("finance")
//!     .with_task(TaskEntry::approved("manager").with_assignee("Ana"));
//!
//! let views = project(&nodes, Some(&instance));
//! assert_eq!(views.len(), 2);
//! assert_eq!(views[0].status, NodeStatus::Completed);
//! assert_eq!(views[1].approvers[0].name, "team lead");
//! ```

#![deny(unsafe_code)]

pub mod approvers;
pub mod config;
pub mod projector;
pub mod service;
pub mod status;
pub mod store;
pub mod summary;
pub mod task_index;
pub mod visibility;

// Re-export main types
pub use approvers::{resolve_approvers, ApproverLabels, ApproverResolver};
pub use crate::config::ProjectionConfig;
pub use projector::{project, ProcessProjector};
pub use service::ProcessViewService;
pub use status::resolve_status;
pub use store::{MemoryStore, WorkflowStore};
pub use summary::ProjectionSummary;
pub use task_index::TaskIndex;
pub use visibility::is_visible;
