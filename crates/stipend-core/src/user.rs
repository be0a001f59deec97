//! # User Account Types

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user account.
///
/// Balances and counters are mutated externally by the platform's earning
/// flows. The console's single supported mutation overwrites `balance` to
/// an operator-supplied value; lifetime totals are never touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    /// Current spendable balance.
    #[serde(default)]
    pub balance: f64,
    /// Lifetime earned total.
    #[serde(default)]
    pub total_earned: f64,
    /// Lifetime withdrawn total.
    #[serde(default)]
    pub total_withdrawn: f64,
    /// Number of successful referrals.
    #[serde(default)]
    pub total_referrals: u32,
    /// Lifetime Monetag ad views.
    #[serde(default)]
    pub ads_watched_monetag: u32,
    /// Lifetime Adexora ad views.
    #[serde(default)]
    pub ads_watched_adexora: u32,
    /// Account creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Weak reference to the referring user, by identifier only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<UserId>,
}

impl User {
    /// Case-insensitive substring match against the display name.
    ///
    /// Identifier matching lives with the keyed view state, which owns the
    /// store key.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.full_name.to_lowercase().contains(needle_lower)
    }

    /// First letter of the display name, for avatar-style rendering.
    pub fn initial(&self) -> char {
        self.full_name.chars().next().unwrap_or('U')
    }
}
