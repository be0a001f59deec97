//! # Stipend App - Application State
//!
//! **Purpose**: Hold the console's presentation-independent state and the
//! operator workflows that mutate the platform.
//!
//! Every screen of the console is a subscribe-render-mutate loop:
//!
//! 1. Snapshots pushed by the store replace a local keyed collection
//!    wholesale ([`AppState::apply_snapshot`]).
//! 2. Screens render pure views of those collections ([`views`]).
//! 3. Operator actions become single store writes ([`workflows`]), awaited
//!    only to toggle an in-flight flag or surface a failure message.
//!
//! There is no merging, no retry, and no cross-entity coordination here;
//! the store's last-write-wins semantics are inherited as-is.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Application error types.
pub mod error;

/// Form drafts for the config and task screens.
pub mod forms;

/// Top-level state: the four collections plus the readiness gate.
pub mod state;

/// Per-collection view state and aggregation.
pub mod views;

/// Operator mutations over the admin service.
pub mod workflows;

pub use error::AppError;
pub use state::{AppState, ReadyGate};
pub use views::{
    ConfigState, DashboardStats, StatusFilter, TasksState, UsersState, WithdrawalsState,
};
