//! # Site Configuration
//!
//! The singleton configuration document the platform clients read: ad
//! network zones and rewards, referral program numbers, support contacts,
//! and payment method definitions.
//!
//! Every scalar is optional on the wire; a missing field renders as zero or
//! empty in the console. The document has no identity and is overwritten in
//! place by a shallow merge of the whole edited object.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Support contact links shown to platform users.
///
/// A typed sub-structure with direct field access; the keys nest under
/// `supportLinks` in the stored document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportLinks {
    /// Announcement channel URL.
    #[serde(default)]
    pub channel: String,
    /// Direct operator chat URL.
    #[serde(default)]
    pub chat: String,
}

/// A named payout method with its minimum withdrawal amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Display name of the method.
    #[serde(default)]
    pub name: String,
    /// Minimum amount a user may withdraw through this method.
    #[serde(default)]
    pub min_withdrawal: f64,
}

/// The global configuration document.
///
/// Numeric fields are floating point end to end: the console's form layer
/// parses operator input with `f64` semantics and non-finite values
/// serialize as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Monetag ad zone identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetag_zone_id: Option<String>,
    /// Daily cap on Monetag ad views per user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetag_daily_ad_limit: Option<f64>,
    /// Reward credited per Monetag ad view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetag_ad_reward: Option<f64>,
    /// Seconds a Monetag ad must play before the reward credits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monetag_ad_timer: Option<f64>,
    /// Adexora ad zone identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adexora_zone_id: Option<String>,
    /// Daily cap on Adexora ad views per user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adexora_daily_ad_limit: Option<f64>,
    /// Reward credited per Adexora ad view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adexora_ad_reward: Option<f64>,
    /// One-time bonus credited for a successful referral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_bonus: Option<f64>,
    /// Percentage of referee earnings credited to the referrer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_commission_percentage: Option<f64>,
    /// Referral count a user needs before withdrawals unlock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_referrals_for_withdrawal: Option<f64>,
    /// Support contact links.
    #[serde(default)]
    pub support_links: SupportLinks,
    /// Payout methods keyed by method key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub payment_methods: HashMap<String, PaymentMethod>,
}

impl SiteConfig {
    /// Per-ad reward for the Monetag network, zero when unset.
    pub fn ad_reward(&self) -> f64 {
        self.monetag_ad_reward.unwrap_or(0.0)
    }

    /// Referral bonus, zero when unset.
    pub fn referral_bonus_amount(&self) -> f64 {
        self.referral_bonus.unwrap_or(0.0)
    }

    /// Referral commission percentage, zero when unset.
    pub fn commission_percentage(&self) -> f64 {
        self.referral_commission_percentage.unwrap_or(0.0)
    }

    /// Referral count gating withdrawal eligibility, zero when unset.
    pub fn min_referrals(&self) -> f64 {
        self.min_referrals_for_withdrawal.unwrap_or(0.0)
    }
}
