//! # Stipend Core - Domain Types
//!
//! **Purpose**: Define the platform's document types and identifiers.
//!
//! This crate holds the serde-serializable domain model shared by the store
//! adapter, the application state, and the terminal console:
//!
//! - [`SiteConfig`]: the singleton global configuration document
//! - [`Task`]: a catalog entry users complete for a reward
//! - [`User`]: a platform account with balance and lifetime counters
//! - [`WithdrawalRequest`]: a payout request triaged by operators
//!
//! Wire format is JSON with camelCase keys, matching the documents the
//! platform's earning flows already write. Everything here is pure data:
//! no IO, no async, no store access.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Strongly typed entity identifiers.
pub mod ids;

/// The singleton global configuration document.
pub mod config;

/// Task catalog entries and categories.
pub mod task;

/// Platform user accounts.
pub mod user;

/// Withdrawal requests and their status lifecycle.
pub mod withdrawal;

pub use config::{PaymentMethod, SiteConfig, SupportLinks};
pub use ids::{TaskId, UserId, WithdrawalId};
pub use task::{Task, TaskCategory};
pub use user::User;
pub use withdrawal::{WithdrawalRequest, WithdrawalStatus};
