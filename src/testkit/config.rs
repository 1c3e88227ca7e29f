//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.
//! Avoids each test module defining its own slightly-different defaults.

use crate::config::{AdsConfig, RetryConfig, SimConfig};

/// Fast retry config with millisecond delays — no real waiting in tests.
pub fn retry() -> RetryConfig {
    RetryConfig {
        initial_delay_ms: 20,
        max_delay_ms: 100,
        backoff_multiplier: 2.0,
        max_attempts: None,
    }
}

/// Ads config with millisecond-scale intervals and delays.
///
/// Frequency windows are long enough to observe gating within a test but
/// expire within a short sleep. For tests pinning specific timing,
/// override individual fields on the returned struct.
pub fn ads() -> AdsConfig {
    AdsConfig {
        app_open_delay_ms: 10,
        interstitial_interval_ms: 50,
        rewarded_interval_ms: 40,
        retry: retry(),
        sim: SimConfig {
            load_delay_ms: 5,
            no_fill_rate: 0.0,
            show_duration_ms: 10,
            reward_amount: 10,
        },
        ..AdsConfig::default()
    }
}
