//! # View State Module
//!
//! Per-collection state mirroring the remote store, plus pure aggregation
//! for the dashboard. Each state type stores entities in a `HashMap` keyed
//! by identifier and is replaced wholesale on every inbound snapshot.
//!
//! Selection indices, search text, and filters the operator is typing live
//! with the terminal shell, not here. The exception is [`StatusFilter`],
//! which is part of the withdrawal view's contract (default `pending`).

mod config;
mod dashboard;
mod tasks;
mod users;
mod withdrawals;

pub use config::ConfigState;
pub use dashboard::DashboardStats;
pub use tasks::TasksState;
pub use users::UsersState;
pub use withdrawals::{StatusFilter, WithdrawalsState};
