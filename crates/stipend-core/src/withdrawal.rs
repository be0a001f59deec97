//! # Withdrawal Request Types

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a withdrawal request.
///
/// `Pending` may move to `Approved` or `Rejected`; both are terminal.
/// Deletion is orthogonal to status and terminal from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    /// Awaiting operator triage.
    #[default]
    Pending,
    /// Operator approved the payout; execution is manual and off-system.
    Approved,
    /// Operator rejected the request.
    Rejected,
}

impl WithdrawalStatus {
    /// Wire value, which is also the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
        }
    }

    /// Whether operator actions (approve/reject) still apply.
    pub fn is_pending(&self) -> bool {
        matches!(self, WithdrawalStatus::Pending)
    }
}

/// A user's request to withdraw part of their balance.
///
/// `user_name` is a denormalized copy taken when the request was created;
/// it is never re-synced against the user document and can drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    /// Identifier of the requesting user.
    pub user_id: UserId,
    /// Display name cached at request time.
    #[serde(default)]
    pub user_name: String,
    /// Payout method name.
    #[serde(default)]
    pub method: String,
    /// Payout account string (wallet number, address, ...).
    #[serde(default)]
    pub account: String,
    /// Requested amount.
    #[serde(default)]
    pub amount: f64,
    /// Current status.
    #[serde(default)]
    pub status: WithdrawalStatus,
    /// Request creation time.
    pub timestamp: DateTime<Utc>,
}
