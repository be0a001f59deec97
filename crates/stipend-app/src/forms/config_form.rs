//! Config screen form.
//!
//! A local editable copy of the singleton config. Whenever the external
//! copy changes, the form resyncs to it: last external write wins, and an
//! in-progress edit is discarded. The console reports the discard; it does
//! not prevent it.

use stipend_core::SiteConfig;

use super::draft::Draft;

/// Editable fields of the config form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    /// Monetag ad zone identifier.
    MonetagZoneId,
    /// Reward per Monetag ad view.
    MonetagAdReward,
    /// Daily Monetag ad cap.
    MonetagDailyAdLimit,
    /// Monetag ad timer in seconds.
    MonetagAdTimer,
    /// Adexora ad zone identifier.
    AdexoraZoneId,
    /// Reward per Adexora ad view.
    AdexoraAdReward,
    /// Daily Adexora ad cap.
    AdexoraDailyAdLimit,
    /// Referral bonus amount.
    ReferralBonus,
    /// Referral commission percentage.
    ReferralCommissionPercentage,
    /// Referral count required before withdrawal.
    MinReferralsForWithdrawal,
    /// Support channel URL.
    SupportChannel,
    /// Operator chat URL.
    SupportChat,
}

impl ConfigField {
    /// All fields in display order.
    pub fn all() -> &'static [ConfigField] {
        use ConfigField::*;
        &[
            MonetagZoneId,
            MonetagAdReward,
            MonetagDailyAdLimit,
            MonetagAdTimer,
            AdexoraZoneId,
            AdexoraAdReward,
            AdexoraDailyAdLimit,
            ReferralBonus,
            ReferralCommissionPercentage,
            MinReferralsForWithdrawal,
            SupportChannel,
            SupportChat,
        ]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::MonetagZoneId => "Monetag Zone ID",
            ConfigField::MonetagAdReward => "Monetag Ad Reward",
            ConfigField::MonetagDailyAdLimit => "Monetag Daily Ad Limit",
            ConfigField::MonetagAdTimer => "Monetag Ad Timer (s)",
            ConfigField::AdexoraZoneId => "Adexora Zone ID",
            ConfigField::AdexoraAdReward => "Adexora Ad Reward",
            ConfigField::AdexoraDailyAdLimit => "Adexora Daily Ad Limit",
            ConfigField::ReferralBonus => "Referral Bonus",
            ConfigField::ReferralCommissionPercentage => "Referral Commission (%)",
            ConfigField::MinReferralsForWithdrawal => "Min Referrals for Withdrawal",
            ConfigField::SupportChannel => "Support Channel",
            ConfigField::SupportChat => "Contact Admin Link",
        }
    }

    /// Whether operator input is coerced to a number.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            ConfigField::MonetagZoneId
                | ConfigField::AdexoraZoneId
                | ConfigField::SupportChannel
                | ConfigField::SupportChat
        )
    }

    /// Current value rendered for editing.
    pub fn get(&self, config: &SiteConfig) -> String {
        match self {
            ConfigField::MonetagZoneId => config.monetag_zone_id.clone().unwrap_or_default(),
            ConfigField::MonetagAdReward => format_amount(config.monetag_ad_reward),
            ConfigField::MonetagDailyAdLimit => format_amount(config.monetag_daily_ad_limit),
            ConfigField::MonetagAdTimer => format_amount(config.monetag_ad_timer),
            ConfigField::AdexoraZoneId => config.adexora_zone_id.clone().unwrap_or_default(),
            ConfigField::AdexoraAdReward => format_amount(config.adexora_ad_reward),
            ConfigField::AdexoraDailyAdLimit => format_amount(config.adexora_daily_ad_limit),
            ConfigField::ReferralBonus => format_amount(config.referral_bonus),
            ConfigField::ReferralCommissionPercentage => {
                format_amount(config.referral_commission_percentage)
            }
            ConfigField::MinReferralsForWithdrawal => {
                format_amount(config.min_referrals_for_withdrawal)
            }
            ConfigField::SupportChannel => config.support_links.channel.clone(),
            ConfigField::SupportChat => config.support_links.chat.clone(),
        }
    }

    /// Write operator input into the config.
    ///
    /// Numeric fields coerce with `f64` semantics: unparsable input becomes
    /// `NaN` and is not rejected here (it serializes as `null` in the merge
    /// payload). Text fields are stored verbatim.
    pub fn set(&self, config: &mut SiteConfig, input: &str) {
        match self {
            ConfigField::MonetagZoneId => config.monetag_zone_id = Some(input.to_string()),
            ConfigField::MonetagAdReward => config.monetag_ad_reward = Some(coerce(input)),
            ConfigField::MonetagDailyAdLimit => {
                config.monetag_daily_ad_limit = Some(coerce(input));
            }
            ConfigField::MonetagAdTimer => config.monetag_ad_timer = Some(coerce(input)),
            ConfigField::AdexoraZoneId => config.adexora_zone_id = Some(input.to_string()),
            ConfigField::AdexoraAdReward => config.adexora_ad_reward = Some(coerce(input)),
            ConfigField::AdexoraDailyAdLimit => {
                config.adexora_daily_ad_limit = Some(coerce(input));
            }
            ConfigField::ReferralBonus => config.referral_bonus = Some(coerce(input)),
            ConfigField::ReferralCommissionPercentage => {
                config.referral_commission_percentage = Some(coerce(input));
            }
            ConfigField::MinReferralsForWithdrawal => {
                config.min_referrals_for_withdrawal = Some(coerce(input));
            }
            ConfigField::SupportChannel => config.support_links.channel = input.to_string(),
            ConfigField::SupportChat => config.support_links.chat = input.to_string(),
        }
    }
}

fn coerce(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v}"),
        Some(_) => "NaN".to_string(),
        None => "0".to_string(),
    }
}

/// The config screen's editable draft.
#[derive(Debug, Clone, Default)]
pub struct ConfigForm {
    draft: Draft<SiteConfig>,
    loaded: bool,
}

impl ConfigForm {
    /// Create an unloaded form; it renders nothing until the first config
    /// snapshot arrives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resync with the external copy.
    ///
    /// Returns `true` when a dirty draft was discarded (the known
    /// overwrite hazard), so the shell can tell the operator.
    /// An absent external copy leaves the form as it is.
    pub fn resync(&mut self, config: Option<&SiteConfig>) -> bool {
        let Some(config) = config else {
            return false;
        };
        let discarded = self.draft.is_dirty();
        self.draft.resync(config.clone());
        self.loaded = true;
        discarded
    }

    /// Whether a config snapshot has been loaded into the form.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current value of a field, rendered for editing.
    pub fn value_of(&self, field: ConfigField) -> String {
        field.get(self.draft.data())
    }

    /// Apply operator input to a field.
    pub fn set_field(&mut self, field: ConfigField, input: &str) {
        field.set(self.draft.data_mut(), input);
    }

    /// The edited config, submitted whole as a partial merge.
    pub fn config(&self) -> &SiteConfig {
        self.draft.data()
    }

    /// Whether the operator has unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.draft.is_dirty()
    }

    /// Whether a save is in flight (save action disabled).
    pub fn is_submitting(&self) -> bool {
        self.draft.is_submitting()
    }

    /// Mark the save request as in flight.
    pub fn begin_submit(&mut self) {
        self.draft.begin_submit();
    }

    /// Save succeeded.
    pub fn finish_submit(&mut self) {
        self.draft.finish_submit();
    }

    /// Save failed; keep the edit for retry.
    pub fn fail_submit(&mut self, message: String) {
        self.draft.fail_submit(message);
    }

    /// The last save failure, if any.
    pub fn failure(&self) -> Option<&str> {
        self.draft.failure()
    }
}
