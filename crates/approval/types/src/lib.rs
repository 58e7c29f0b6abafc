//! Approval Process Domain Types
//!
//! An approval process is a static, ordered list of approval nodes plus a
//! ledger of tasks created as an instance advances through them. These
//! types describe both sides and the read-only view derived from them.
//!
//! # Key Concepts
//!
//! - **ProcessNode**: One step of a process definition. Only
//!   [`NodeKind::Approval`] nodes are projected.
//! - **TaskEntry**: One unit of work bound to a node. A node fans out to
//!   several entries when several approvers must act.
//! - **WorkflowInstance**: The runtime context: the current node pointer
//!   and the full task ledger.
//! - **DerivedNodeView**: The projected status, approvers and visibility of
//!   a node. Recomputed on every request, never stored.
//!
//! Nothing in this crate mutates an instance; the approval actions that
//! transition tasks live outside of it.

#![deny(unsafe_code)]

mod errors;
mod instance;
mod process;
mod task;
mod view;

pub use errors::*;
pub use instance::*;
pub use process::*;
pub use task::*;
pub use view::*;
