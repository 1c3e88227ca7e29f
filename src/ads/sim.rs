//! Simulated ad vendor.
//!
//! Stands in for the real mobile ads SDK during development sessions:
//! loads resolve after a configurable latency with a configurable no-fill
//! rate, shows open immediately and close after a fixed duration, and
//! rewarded presentations always pay out. Timing and rates come from
//! [`SimConfig`].

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::Instant;

use crate::ads::vendor::{AdEvent, UnitId, VendorAd, VendorSdk};
use crate::config::SimConfig;
use crate::domain::AdKind;

/// Factory for simulated ads.
#[derive(Debug, Clone)]
pub struct SimSdk {
    config: SimConfig,
}

impl SimSdk {
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl VendorSdk for SimSdk {
    type Ad = SimAd;

    fn create(&self, kind: AdKind, unit: UnitId) -> SimAd {
        SimAd {
            kind,
            unit,
            config: self.config.clone(),
            queue: VecDeque::new(),
        }
    }
}

/// One simulated full-screen ad slot.
///
/// Requests queue future events with a due time; `next_event` delivers
/// them once due and pends while the queue is empty.
pub struct SimAd {
    kind: AdKind,
    unit: UnitId,
    config: SimConfig,
    queue: VecDeque<(Instant, AdEvent)>,
}

#[async_trait]
impl VendorAd for SimAd {
    async fn request_load(&mut self) {
        let due = Instant::now() + Duration::from_millis(self.config.load_delay_ms);
        let event = if rand::thread_rng().gen::<f64>() < self.config.no_fill_rate {
            AdEvent::LoadFailed {
                reason: "no fill".into(),
            }
        } else {
            AdEvent::Loaded
        };
        self.queue.push_back((due, event));
    }

    async fn request_show(&mut self) {
        let now = Instant::now();
        let close_at = now + Duration::from_millis(self.config.show_duration_ms);
        self.queue.push_back((now, AdEvent::Opened));
        if self.kind == AdKind::Rewarded {
            self.queue.push_back((
                close_at,
                AdEvent::EarnedReward {
                    amount: self.config.reward_amount,
                    label: "coins".into(),
                },
            ));
        }
        self.queue.push_back((close_at, AdEvent::Closed));
    }

    async fn next_event(&mut self) -> Option<AdEvent> {
        let due = match self.queue.front() {
            Some((due, _)) => *due,
            // Nothing queued until the next load or show request.
            None => std::future::pending().await,
        };
        tokio::time::sleep_until(due).await;
        self.queue.pop_front().map(|(_, event)| event)
    }

    fn unit(&self) -> &UnitId {
        &self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_config(no_fill_rate: f64) -> SimConfig {
        SimConfig {
            load_delay_ms: 5,
            no_fill_rate,
            show_duration_ms: 5,
            reward_amount: 7,
        }
    }

    fn ad(kind: AdKind, no_fill_rate: f64) -> SimAd {
        SimSdk::new(sim_config(no_fill_rate)).create(kind, UnitId::from("sim-unit"))
    }

    #[tokio::test]
    async fn test_load_resolves_after_delay() {
        let mut ad = ad(AdKind::Interstitial, 0.0);
        ad.request_load().await;
        assert_eq!(ad.next_event().await, Some(AdEvent::Loaded));
    }

    #[tokio::test]
    async fn test_full_no_fill_rate_always_fails() {
        let mut ad = ad(AdKind::Interstitial, 1.0);
        ad.request_load().await;
        assert!(matches!(
            ad.next_event().await,
            Some(AdEvent::LoadFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_show_opens_then_closes() {
        let mut ad = ad(AdKind::Interstitial, 0.0);
        ad.request_show().await;
        assert_eq!(ad.next_event().await, Some(AdEvent::Opened));
        assert_eq!(ad.next_event().await, Some(AdEvent::Closed));
    }

    #[tokio::test]
    async fn test_rewarded_show_pays_before_close() {
        let mut ad = ad(AdKind::Rewarded, 0.0);
        ad.request_show().await;
        assert_eq!(ad.next_event().await, Some(AdEvent::Opened));
        assert_eq!(
            ad.next_event().await,
            Some(AdEvent::EarnedReward {
                amount: 7,
                label: "coins".into(),
            })
        );
        assert_eq!(ad.next_event().await, Some(AdEvent::Closed));
    }

    #[tokio::test]
    async fn test_non_rewarded_show_never_pays() {
        let mut ad = ad(AdKind::AppOpen, 0.0);
        ad.request_show().await;
        assert_eq!(ad.next_event().await, Some(AdEvent::Opened));
        assert_eq!(ad.next_event().await, Some(AdEvent::Closed));
        assert!(ad.queue.is_empty());
    }
}
