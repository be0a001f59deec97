//! # Withdrawal Queue View State

use std::collections::HashMap;

use stipend_core::{WithdrawalId, WithdrawalRequest, WithdrawalStatus};

/// Status filter applied to the withdrawal table.
///
/// Defaults to `Pending`, the triage queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Only pending requests.
    #[default]
    Pending,
    /// Only approved requests.
    Approved,
    /// Only rejected requests.
    Rejected,
    /// Everything.
    All,
}

impl StatusFilter {
    /// All filters in display order.
    pub fn all() -> &'static [StatusFilter] {
        &[
            StatusFilter::Pending,
            StatusFilter::Approved,
            StatusFilter::Rejected,
            StatusFilter::All,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Pending => "pending",
            StatusFilter::Approved => "approved",
            StatusFilter::Rejected => "rejected",
            StatusFilter::All => "all",
        }
    }

    /// Next filter in display order, wrapping.
    pub fn next(&self) -> StatusFilter {
        match self {
            StatusFilter::Pending => StatusFilter::Approved,
            StatusFilter::Approved => StatusFilter::Rejected,
            StatusFilter::Rejected => StatusFilter::All,
            StatusFilter::All => StatusFilter::Pending,
        }
    }

    /// Whether a request with `status` passes this filter.
    pub fn matches(&self, status: WithdrawalStatus) -> bool {
        match self {
            StatusFilter::Pending => status == WithdrawalStatus::Pending,
            StatusFilter::Approved => status == WithdrawalStatus::Approved,
            StatusFilter::Rejected => status == WithdrawalStatus::Rejected,
            StatusFilter::All => true,
        }
    }
}

/// The withdrawal request queue, keyed by request identifier.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalsState {
    requests: HashMap<WithdrawalId, WithdrawalRequest>,
}

impl WithdrawalsState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue with the latest snapshot.
    pub fn replace_all(&mut self, requests: HashMap<WithdrawalId, WithdrawalRequest>) {
        self.requests = requests;
    }

    /// Get a request by identifier.
    pub fn request(&self, id: &WithdrawalId) -> Option<&WithdrawalRequest> {
        self.requests.get(id)
    }

    /// Number of requests, regardless of status.
    pub fn count(&self) -> usize {
        self.requests.len()
    }

    /// All requests, most recent first. Recomputed from the live snapshot
    /// on every call; ties keep no guaranteed relative order.
    pub fn sorted(&self) -> Vec<(&WithdrawalId, &WithdrawalRequest)> {
        let mut entries: Vec<_> = self.requests.iter().collect();
        entries.sort_by(|(_, a), (_, b)| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Requests passing `filter`, most recent first.
    pub fn filtered(&self, filter: StatusFilter) -> Vec<(&WithdrawalId, &WithdrawalRequest)> {
        self.sorted()
            .into_iter()
            .filter(|(_, request)| filter.matches(request.status))
            .collect()
    }

    /// Number of pending requests.
    pub fn pending_count(&self) -> usize {
        self.requests
            .values()
            .filter(|r| r.status == WithdrawalStatus::Pending)
            .count()
    }

    /// Number of approved requests.
    pub fn approved_count(&self) -> usize {
        self.requests
            .values()
            .filter(|r| r.status == WithdrawalStatus::Approved)
            .count()
    }

    /// Total amount across approved requests.
    pub fn approved_total(&self) -> f64 {
        self.requests
            .values()
            .filter(|r| r.status == WithdrawalStatus::Approved)
            .map(|r| r.amount)
            .sum()
    }
}
