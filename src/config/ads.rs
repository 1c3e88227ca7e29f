//! Ad runtime configuration.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Ad integration settings.
///
/// Unit ids left empty fall back to the vendor's published test units when
/// `use_test_units` is on; otherwise an empty id fails validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdsConfig {
    /// Master switch for the ad runtime in interactive sessions.
    pub enabled: bool,
    /// Substitute vendor test unit ids for any id left empty.
    pub use_test_units: bool,
    pub interstitial_unit: String,
    pub rewarded_unit: String,
    pub app_open_unit: String,
    pub banner_unit: String,
    /// Delay before the app-open ad is attempted at session start.
    pub app_open_delay_ms: u64,
    /// Minimum spacing between interstitial presentations.
    pub interstitial_interval_ms: u64,
    /// Minimum spacing between rewarded presentations.
    pub rewarded_interval_ms: u64,
    pub retry: RetryConfig,
    pub sim: SimConfig,
}

impl Default for AdsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            use_test_units: true,
            interstitial_unit: String::new(),
            rewarded_unit: String::new(),
            app_open_unit: String::new(),
            banner_unit: String::new(),
            app_open_delay_ms: 3_000,
            interstitial_interval_ms: 60_000,
            rewarded_interval_ms: 30_000,
            retry: RetryConfig::default(),
            sim: SimConfig::default(),
        }
    }
}

impl AdsConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.use_test_units {
            for (unit, field) in [
                (&self.interstitial_unit, "ads.interstitial_unit"),
                (&self.rewarded_unit, "ads.rewarded_unit"),
                (&self.app_open_unit, "ads.app_open_unit"),
                (&self.banner_unit, "ads.banner_unit"),
            ] {
                if unit.is_empty() {
                    return Err(ConfigError::MissingField { field }.into());
                }
            }
        }

        if self.retry.backoff_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "ads.retry.backoff_multiplier",
                reason: "must be at least 1.0".into(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.sim.no_fill_rate) {
            return Err(ConfigError::InvalidValue {
                field: "ads.sim.no_fill_rate",
                reason: "must be between 0.0 and 1.0".into(),
            }
            .into());
        }

        Ok(())
    }
}

/// Reload retry behavior after a failed ad load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Delay before the first retry.
    pub initial_delay_ms: u64,
    /// Upper bound for the backed-off delay.
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Give up after this many consecutive failures; `None` retries forever.
    /// A dormant surface is revived by the next show attempt.
    pub max_attempts: Option<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 30_000,
            max_delay_ms: 300_000,
            backoff_multiplier: 2.0,
            max_attempts: None,
        }
    }
}

/// Simulated vendor behavior for development sessions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated network latency for a load request.
    pub load_delay_ms: u64,
    /// Fraction of load requests that come back as no-fill.
    pub no_fill_rate: f64,
    /// How long a simulated presentation stays open.
    pub show_duration_ms: u64,
    /// Reward granted by simulated rewarded ads.
    pub reward_amount: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 150,
            no_fill_rate: 0.1,
            show_duration_ms: 400,
            reward_amount: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sensible() {
        let config = AdsConfig::default();
        assert!(config.enabled);
        assert!(config.use_test_units);
        assert_eq!(config.app_open_delay_ms, 3_000);
        assert_eq!(config.interstitial_interval_ms, 60_000);
        assert_eq!(config.rewarded_interval_ms, 30_000);
        assert_eq!(config.retry.initial_delay_ms, 30_000);
        assert!(config.retry.max_attempts.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_units_rejected_without_test_fallback() {
        let config = AdsConfig {
            use_test_units: false,
            ..AdsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_units_pass_without_test_fallback() {
        let config = AdsConfig {
            use_test_units: false,
            interstitial_unit: "ca-app-pub-1/1".into(),
            rewarded_unit: "ca-app-pub-1/2".into(),
            app_open_unit: "ca-app-pub-1/3".into(),
            banner_unit: "ca-app-pub-1/4".into(),
            ..AdsConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        let mut config = AdsConfig::default();
        config.retry.backoff_multiplier = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_no_fill_rate_out_of_range_rejected() {
        let mut config = AdsConfig::default();
        config.sim.no_fill_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_config_parses_max_attempts() {
        let config: RetryConfig = toml::from_str(
            r#"
            initial_delay_ms = 100
            max_attempts = 5
        "#,
        )
        .unwrap();
        assert_eq!(config.initial_delay_ms, 100);
        assert_eq!(config.max_attempts, Some(5));
    }
}
