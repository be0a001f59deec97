//! # Top-Level Application State
//!
//! The shell owns one [`AppState`]: the four collection mirrors plus a
//! readiness gate. Inbound snapshots replace whole collections; nothing is
//! diffed or merged, so a snapshot that lands mid-edit wins over local
//! state: the config form resyncs and drops its draft, and the console
//! surfaces that rather than hiding it.

use stipend_store::{decode_config, decode_tasks, decode_users, decode_withdrawals};
use stipend_store::{Collection, Snapshot};

use crate::views::{ConfigState, TasksState, UsersState, WithdrawalsState};

/// Tracks which collections have delivered their first snapshot.
///
/// The console shows its loading view until every collection has reported
/// once. Readiness derives from actual data arrival, not a timer: a
/// subscription that never fires leaves the gate closed and the loading
/// view honest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadyGate {
    config: bool,
    tasks: bool,
    users: bool,
    withdrawals: bool,
}

impl ReadyGate {
    /// Record the first snapshot for a collection.
    pub fn mark(&mut self, collection: Collection) {
        match collection {
            Collection::Config => self.config = true,
            Collection::Tasks => self.tasks = true,
            Collection::Users => self.users = true,
            Collection::WithdrawalRequests => self.withdrawals = true,
        }
    }

    /// Whether all four collections have reported at least once.
    pub fn is_ready(&self) -> bool {
        self.config && self.tasks && self.users && self.withdrawals
    }
}

/// The four collection mirrors plus the readiness gate.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The configuration mirror.
    pub config: ConfigState,
    /// The task catalog mirror.
    pub tasks: TasksState,
    /// The user directory mirror.
    pub users: UsersState,
    /// The withdrawal queue mirror.
    pub withdrawals: WithdrawalsState,
    ready: ReadyGate,
}

impl AppState {
    /// Create an empty state with the gate closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an inbound snapshot, replacing the collection wholesale and
    /// opening that collection's slot in the readiness gate.
    pub fn apply_snapshot(&mut self, collection: Collection, snapshot: &Snapshot) {
        match collection {
            Collection::Config => self.config.replace(decode_config(snapshot)),
            Collection::Tasks => self.tasks.replace_all(decode_tasks(snapshot)),
            Collection::Users => self.users.replace_all(decode_users(snapshot)),
            Collection::WithdrawalRequests => {
                self.withdrawals.replace_all(decode_withdrawals(snapshot));
            }
        }
        self.ready.mark(collection);
    }

    /// Whether all four initial snapshots have arrived.
    pub fn is_ready(&self) -> bool {
        self.ready.is_ready()
    }
}
