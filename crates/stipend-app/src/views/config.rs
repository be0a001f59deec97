//! # Config View State

use stipend_core::SiteConfig;

/// Local mirror of the singleton configuration document.
///
/// `None` until the first snapshot carrying a config document arrives, or
/// when the document is absent remotely.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: Option<SiteConfig>,
}

impl ConfigState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirror with the latest external copy.
    pub fn replace(&mut self, config: Option<SiteConfig>) {
        self.config = config;
    }

    /// The current config document, if any.
    pub fn get(&self) -> Option<&SiteConfig> {
        self.config.as_ref()
    }

    /// Whether a config document has been seen.
    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    /// Per-ad reward shown on the dashboard card, zero when absent.
    pub fn ad_reward(&self) -> f64 {
        self.config.as_ref().map_or(0.0, SiteConfig::ad_reward)
    }

    /// Referral bonus shown on the dashboard card, zero when absent.
    pub fn referral_bonus(&self) -> f64 {
        self.config
            .as_ref()
            .map_or(0.0, SiteConfig::referral_bonus_amount)
    }

    /// Referral commission percentage, zero when absent.
    pub fn commission_percentage(&self) -> f64 {
        self.config
            .as_ref()
            .map_or(0.0, SiteConfig::commission_percentage)
    }

    /// Minimum referral count gating withdrawal, zero when absent.
    pub fn min_referrals(&self) -> f64 {
        self.config.as_ref().map_or(0.0, SiteConfig::min_referrals)
    }
}
