//! Vendor SDK seam.
//!
//! The mobile ads SDK is consumed through two small traits so the ad
//! runtime never touches vendor types directly: [`VendorSdk`] creates ad
//! handles, [`VendorAd`] is one full-screen ad whose load/show outcomes
//! arrive as [`AdEvent`]s. Load and show requests themselves cannot fail;
//! every outcome is an event, mirroring the callback-driven SDK.

use std::fmt;

use async_trait::async_trait;

use crate::config::AdsConfig;
use crate::domain::AdKind;
use crate::error::{ConfigError, Result};

/// Vendor ad unit identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitId(String);

impl UnitId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UnitId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for UnitId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Google's published test unit ids, used when a real id is not configured
/// and `ads.use_test_units` is on.
#[must_use]
pub const fn test_unit(kind: AdKind) -> &'static str {
    match kind {
        AdKind::Interstitial => "ca-app-pub-3940256099942544/1033173712",
        AdKind::Rewarded => "ca-app-pub-3940256099942544/5224354917",
        AdKind::AppOpen => "ca-app-pub-3940256099942544/9257395921",
        AdKind::Banner => "ca-app-pub-3940256099942544/6300978111",
    }
}

/// Resolve the unit id for a kind: configured id first, then the vendor
/// test id when `use_test_units` allows it.
///
/// # Errors
///
/// Returns a configuration error when the id is empty and test units are
/// disabled. `Config::load` validation normally catches this earlier.
pub fn resolve_unit(config: &AdsConfig, kind: AdKind) -> Result<UnitId> {
    let (configured, field) = match kind {
        AdKind::Interstitial => (&config.interstitial_unit, "ads.interstitial_unit"),
        AdKind::Rewarded => (&config.rewarded_unit, "ads.rewarded_unit"),
        AdKind::AppOpen => (&config.app_open_unit, "ads.app_open_unit"),
        AdKind::Banner => (&config.banner_unit, "ads.banner_unit"),
    };

    if !configured.is_empty() {
        return Ok(UnitId::from(configured.clone()));
    }
    if config.use_test_units {
        return Ok(UnitId::from(test_unit(kind)));
    }
    Err(ConfigError::MissingField { field }.into())
}

/// Lifecycle events reported by a vendor ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdEvent {
    /// The requested ad is ready to present.
    Loaded,
    /// The load attempt failed (no fill, network, etc.).
    LoadFailed { reason: String },
    /// The ad took over the screen.
    Opened,
    /// The ad was dismissed.
    Closed,
    /// The user finished enough of a rewarded ad to earn the reward.
    /// Arrives before [`AdEvent::Closed`] within a presentation.
    EarnedReward { amount: u32, label: String },
}

/// Factory for vendor ad handles.
pub trait VendorSdk: Send + Sync {
    type Ad: VendorAd;

    /// Create the ad handle for one surface. Called once per surface at
    /// session start; the handle is reused across loads.
    fn create(&self, kind: AdKind, unit: UnitId) -> Self::Ad;
}

/// One full-screen vendor ad handle.
#[async_trait]
pub trait VendorAd: Send + 'static {
    /// Ask the vendor to fetch an ad. The outcome arrives as
    /// [`AdEvent::Loaded`] or [`AdEvent::LoadFailed`].
    async fn request_load(&mut self);

    /// Ask the vendor to present the loaded ad. Progress arrives as
    /// [`AdEvent::Opened`], optionally [`AdEvent::EarnedReward`], then
    /// [`AdEvent::Closed`].
    async fn request_show(&mut self);

    /// Next lifecycle event. `None` means the vendor side is gone and the
    /// surface should stop.
    async fn next_event(&mut self) -> Option<AdEvent>;

    /// The unit id this handle was created for.
    fn unit(&self) -> &UnitId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_unit_wins_over_test_unit() {
        let config = AdsConfig {
            interstitial_unit: "ca-app-pub-real/111".into(),
            ..AdsConfig::default()
        };
        let unit = resolve_unit(&config, AdKind::Interstitial).unwrap();
        assert_eq!(unit.as_str(), "ca-app-pub-real/111");
    }

    #[test]
    fn test_empty_unit_falls_back_to_test_unit() {
        let config = AdsConfig::default();
        for kind in [
            AdKind::Interstitial,
            AdKind::Rewarded,
            AdKind::AppOpen,
            AdKind::Banner,
        ] {
            let unit = resolve_unit(&config, kind).unwrap();
            assert_eq!(unit.as_str(), test_unit(kind));
        }
    }

    #[test]
    fn test_empty_unit_errors_without_test_fallback() {
        let config = AdsConfig {
            use_test_units: false,
            ..AdsConfig::default()
        };
        let err = resolve_unit(&config, AdKind::Rewarded).unwrap_err();
        assert!(err.to_string().contains("ads.rewarded_unit"));
    }

    #[test]
    fn test_test_units_are_distinct_per_kind() {
        let units = [
            test_unit(AdKind::Interstitial),
            test_unit(AdKind::Rewarded),
            test_unit(AdKind::AppOpen),
            test_unit(AdKind::Banner),
        ];
        for (i, a) in units.iter().enumerate() {
            for b in units.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
