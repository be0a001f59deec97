//! # Stipend Store - Live Document Store Adapter
//!
//! **Purpose**: Wrap the platform's realtime document store behind a thin,
//! typed seam.
//!
//! The platform keeps all persistent state in four externally-owned
//! collections (`config`, `tasks`, `users`, `withdrawal_requests`). The
//! console never reasons about storage beyond this crate's surface:
//!
//! - [`LiveStore`]: subscribe / merge / append / remove over JSON documents
//! - [`MemoryStore`]: in-process implementation backing tests and demos
//! - [`JsonFileStore`]: file-backed implementation for running the console
//!   against a local snapshot
//! - [`AdminService`]: the typed wrapper exposing exactly the operations
//!   the console performs
//!
//! Subscriptions deliver the full current snapshot immediately and after
//! every subsequent change; callers replace their local copy wholesale.
//! There is no merge-on-read, no retry, and no conflict resolution; two
//! writers race with last-write-wins semantics inherited from the store.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Store error types.
pub mod error;

/// Collections and document paths.
pub mod path;

/// The live store trait and subscription handle.
pub mod live;

/// In-memory store implementation.
pub mod memory;

/// JSON-file-backed store implementation.
pub mod file;

/// Typed operator service over a live store.
pub mod service;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use live::{LiveStore, Snapshot, Subscription};
pub use memory::MemoryStore;
pub use path::{Collection, StorePath};
pub use service::{
    decode_config, decode_tasks, decode_users, decode_withdrawals, AdminService,
};
