//! # Dashboard Aggregation
//!
//! A pure function of the collection states. Counts are computed, never
//! stored, so the dashboard can never drift from the snapshots it renders.

use super::{TasksState, UsersState, WithdrawalsState};

/// Aggregate metrics shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    /// Sum of current balances across all users (wallet liability).
    pub total_balance: f64,
    /// Sum of lifetime earned totals across all users.
    pub total_earned: f64,
    /// Total amount across approved withdrawals (paid out).
    pub approved_total: f64,
    /// Number of catalog tasks.
    pub task_count: usize,
    /// Number of users.
    pub user_count: usize,
    /// Number of pending withdrawal requests.
    pub pending_count: usize,
    /// Number of approved withdrawal requests.
    pub approved_count: usize,
}

impl DashboardStats {
    /// Compute the metrics from the current snapshots.
    ///
    /// Absent or empty collections contribute zeroes; the result is
    /// independent of entry order.
    pub fn compute(
        tasks: &TasksState,
        users: &UsersState,
        withdrawals: &WithdrawalsState,
    ) -> Self {
        Self {
            total_balance: users.total_balance(),
            total_earned: users.total_earned(),
            approved_total: withdrawals.approved_total(),
            task_count: tasks.count(),
            user_count: users.count(),
            pending_count: withdrawals.pending_count(),
            approved_count: withdrawals.approved_count(),
        }
    }

    /// The activity breakdown as (label, count) rows, in display order.
    pub fn activity(&self) -> [(&'static str, usize); 4] {
        [
            ("Active Tasks", self.task_count),
            ("Users", self.user_count),
            ("Pending", self.pending_count),
            ("Approved", self.approved_count),
        ]
    }
}
