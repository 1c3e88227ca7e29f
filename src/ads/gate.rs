//! Ad frequency gate.
//!
//! Tracks when each ad kind was last presented and blocks shows that would
//! land inside the configured minimum interval. Timestamps are monotonic
//! instants, recorded only after a show was actually dispatched to the
//! vendor — gated or not-ready attempts never advance the clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::AdsConfig;
use crate::domain::AdKind;

/// Shared per-kind show throttle.
///
/// Kinds without a configured interval (app-open, banner) are always
/// allowed.
#[derive(Debug, Default)]
pub struct FrequencyGate {
    min_intervals: HashMap<AdKind, Duration>,
    last_shown: Mutex<HashMap<AdKind, Instant>>,
}

impl FrequencyGate {
    /// A gate with no intervals; every kind is allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum interval for one kind.
    #[must_use]
    pub fn with_interval(mut self, kind: AdKind, interval: Duration) -> Self {
        self.min_intervals.insert(kind, interval);
        self
    }

    /// Gate configured from the ads section: interstitial and rewarded
    /// intervals, app-open and banner ungated.
    #[must_use]
    pub fn from_config(config: &AdsConfig) -> Self {
        Self::new()
            .with_interval(
                AdKind::Interstitial,
                Duration::from_millis(config.interstitial_interval_ms),
            )
            .with_interval(
                AdKind::Rewarded,
                Duration::from_millis(config.rewarded_interval_ms),
            )
    }

    /// Whether a show of `kind` is allowed right now.
    #[must_use]
    pub fn can_show(&self, kind: AdKind) -> bool {
        self.can_show_at(kind, Instant::now())
    }

    /// [`can_show`](Self::can_show) against an explicit clock reading.
    #[must_use]
    pub fn can_show_at(&self, kind: AdKind, now: Instant) -> bool {
        let Some(interval) = self.min_intervals.get(&kind) else {
            return true;
        };
        match self.last_shown.lock().get(&kind) {
            None => true,
            Some(last) => now.saturating_duration_since(*last) >= *interval,
        }
    }

    /// Record a confirmed show of `kind`.
    pub fn record_shown(&self, kind: AdKind) {
        self.record_shown_at(kind, Instant::now());
    }

    /// [`record_shown`](Self::record_shown) against an explicit clock
    /// reading. The stamp never moves backwards.
    pub fn record_shown_at(&self, kind: AdKind, now: Instant) {
        let mut last_shown = self.last_shown.lock();
        let stamp = last_shown.entry(kind).or_insert(now);
        if now > *stamp {
            *stamp = now;
        }
    }

    /// Configured minimum interval for a kind, if any.
    #[must_use]
    pub fn min_interval(&self, kind: AdKind) -> Option<Duration> {
        self.min_intervals.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> FrequencyGate {
        FrequencyGate::new()
            .with_interval(AdKind::Interstitial, Duration::from_millis(60_000))
            .with_interval(AdKind::Rewarded, Duration::from_millis(30_000))
    }

    #[test]
    fn test_unrecorded_kind_is_allowed() {
        let gate = gate();
        assert!(gate.can_show(AdKind::Interstitial));
        assert!(gate.can_show(AdKind::Rewarded));
    }

    #[test]
    fn test_blocked_immediately_after_show() {
        let gate = gate();
        gate.record_shown(AdKind::Interstitial);
        assert!(!gate.can_show(AdKind::Interstitial));
        // Other kinds are unaffected
        assert!(gate.can_show(AdKind::Rewarded));
    }

    #[test]
    fn test_exact_interval_boundary() {
        let gate = gate();
        let t0 = Instant::now();
        gate.record_shown_at(AdKind::Interstitial, t0);

        // One millisecond short of the window: still blocked.
        assert!(!gate.can_show_at(AdKind::Interstitial, t0 + Duration::from_millis(59_999)));
        // Exactly at the window: allowed.
        assert!(gate.can_show_at(AdKind::Interstitial, t0 + Duration::from_millis(60_000)));
        assert!(gate.can_show_at(AdKind::Interstitial, t0 + Duration::from_millis(60_001)));
    }

    #[test]
    fn test_rewarded_uses_its_own_interval() {
        let gate = gate();
        let t0 = Instant::now();
        gate.record_shown_at(AdKind::Rewarded, t0);

        assert!(!gate.can_show_at(AdKind::Rewarded, t0 + Duration::from_millis(29_999)));
        assert!(gate.can_show_at(AdKind::Rewarded, t0 + Duration::from_millis(30_000)));
    }

    #[test]
    fn test_ungated_kinds_always_allowed() {
        let gate = gate();
        gate.record_shown(AdKind::AppOpen);
        assert!(gate.can_show(AdKind::AppOpen));
        assert!(gate.can_show(AdKind::Banner));
    }

    #[test]
    fn test_stamp_never_moves_backwards() {
        let gate = gate();
        let t0 = Instant::now();
        let later = t0 + Duration::from_millis(10_000);

        gate.record_shown_at(AdKind::Interstitial, later);
        // An out-of-order record must not rewind the stamp.
        gate.record_shown_at(AdKind::Interstitial, t0);

        assert!(!gate.can_show_at(
            AdKind::Interstitial,
            t0 + Duration::from_millis(60_000)
        ));
        assert!(gate.can_show_at(
            AdKind::Interstitial,
            later + Duration::from_millis(60_000)
        ));
    }

    #[test]
    fn test_repeated_shows_extend_the_window() {
        let gate = gate();
        let t0 = Instant::now();
        gate.record_shown_at(AdKind::Rewarded, t0);
        let t1 = t0 + Duration::from_millis(30_000);
        assert!(gate.can_show_at(AdKind::Rewarded, t1));

        gate.record_shown_at(AdKind::Rewarded, t1);
        assert!(!gate.can_show_at(AdKind::Rewarded, t1 + Duration::from_millis(29_999)));
        assert!(gate.can_show_at(AdKind::Rewarded, t1 + Duration::from_millis(30_000)));
    }

    #[test]
    fn test_from_config_uses_configured_intervals() {
        let config = AdsConfig {
            interstitial_interval_ms: 1_000,
            rewarded_interval_ms: 500,
            ..AdsConfig::default()
        };
        let gate = FrequencyGate::from_config(&config);
        assert_eq!(
            gate.min_interval(AdKind::Interstitial),
            Some(Duration::from_millis(1_000))
        );
        assert_eq!(
            gate.min_interval(AdKind::Rewarded),
            Some(Duration::from_millis(500))
        );
        assert_eq!(gate.min_interval(AdKind::AppOpen), None);
    }
}
