//! Ad orchestration facade.
//!
//! [`AdManager`] is the single entry point the rest of the app talks to:
//! it owns one surface task per full-screen ad kind, gates shows through
//! the [`FrequencyGate`], and resolves the banner unit for inline
//! placements. Callers never see vendor events or surface states, only
//! whether a show happened and whether a reward was earned.

use std::collections::HashMap;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::ads::gate::FrequencyGate;
use crate::ads::surface::{AdSurface, ShowOutcome, SurfaceCommand};
use crate::ads::vendor::{resolve_unit, UnitId, VendorSdk};
use crate::config::AdsConfig;
use crate::domain::AdKind;
use crate::error::Result;

struct SurfaceHandle {
    cmd_tx: mpsc::Sender<SurfaceCommand>,
    task: Mutex<Option<JoinHandle<()>>>,
}

/// Facade over the full-screen ad surfaces and the frequency gate.
pub struct AdManager {
    gate: FrequencyGate,
    surfaces: HashMap<AdKind, SurfaceHandle>,
    banner_unit: UnitId,
}

impl AdManager {
    /// Resolve ad units, create one vendor ad per full-screen kind and
    /// spawn its surface task. Must be called from within a Tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns an error when an ad unit is neither configured nor
    /// covered by the vendor's test units.
    pub fn new<S: VendorSdk>(sdk: &S, config: &AdsConfig) -> Result<Self> {
        let gate = FrequencyGate::from_config(config);
        let banner_unit = resolve_unit(config, AdKind::Banner)?;

        let mut surfaces = HashMap::new();
        for kind in AdKind::SURFACES {
            let unit = resolve_unit(config, kind)?;
            info!(kind = %kind, unit = %unit, "Starting ad surface");
            let ad = sdk.create(kind, unit);
            let (surface, cmd_tx) = AdSurface::new(kind, ad, config.retry.clone());
            let task = tokio::spawn(surface.run());
            surfaces.insert(
                kind,
                SurfaceHandle {
                    cmd_tx,
                    task: Mutex::new(Some(task)),
                },
            );
        }

        Ok(Self {
            gate,
            surfaces,
            banner_unit,
        })
    }

    /// Show an interstitial if one is loaded and the gate allows it.
    /// Returns whether an ad was actually presented.
    pub async fn show_interstitial(&self) -> bool {
        matches!(
            self.request_show(AdKind::Interstitial).await,
            Some(ShowOutcome::Dispatched { .. })
        )
    }

    /// Show the app-open ad. Not gated; the surface itself refuses while
    /// a presentation is already on screen.
    pub async fn show_app_open(&self) -> bool {
        matches!(
            self.request_show(AdKind::AppOpen).await,
            Some(ShowOutcome::Dispatched { .. })
        )
    }

    /// Show a rewarded ad and wait for the reward decision.
    ///
    /// Returns `true` only when the vendor reported the reward as earned
    /// before the ad closed. A gated or empty surface, an unearned
    /// close and a torn-down surface all come back `false`.
    pub async fn show_rewarded(&self) -> bool {
        match self.request_show(AdKind::Rewarded).await {
            Some(ShowOutcome::Dispatched { reward: Some(rx) }) => rx.await.unwrap_or(false),
            Some(ShowOutcome::Dispatched { reward: None }) => {
                warn!("Rewarded dispatch came back without a reward channel");
                false
            }
            _ => false,
        }
    }

    /// Unit for inline banner placements, resolved at construction.
    #[must_use]
    pub fn banner_unit(&self) -> &UnitId {
        &self.banner_unit
    }

    /// Stop every surface task and wait for them to finish. Pending
    /// reward waiters resolve unearned. Safe to call more than once.
    pub async fn shutdown(&self) {
        for (kind, handle) in &self.surfaces {
            if handle.cmd_tx.send(SurfaceCommand::Shutdown).await.is_err() {
                debug!(kind = %kind, "Surface already stopped");
            }
        }
        for (kind, handle) in &self.surfaces {
            let task = handle.task.lock().take();
            if let Some(task) = task {
                if let Err(err) = task.await {
                    warn!(kind = %kind, error = %err, "Surface task ended abnormally");
                }
            }
        }
    }

    /// Run one show attempt through the gate and the surface. Records
    /// the show against the gate only when the surface dispatched it.
    async fn request_show(&self, kind: AdKind) -> Option<ShowOutcome> {
        if !self.gate.can_show(kind) {
            debug!(kind = %kind, "Show suppressed by frequency gate");
            return None;
        }
        let handle = self.surfaces.get(&kind)?;

        let (ack_tx, ack_rx) = oneshot::channel();
        if handle
            .cmd_tx
            .send(SurfaceCommand::TryShow { ack: ack_tx })
            .await
            .is_err()
        {
            warn!(kind = %kind, "Show requested on a stopped surface");
            return None;
        }
        match ack_rx.await {
            Ok(outcome) => {
                if matches!(outcome, ShowOutcome::Dispatched { .. }) {
                    self.gate.record_shown(kind);
                }
                Some(outcome)
            }
            Err(_) => {
                warn!(kind = %kind, "Surface stopped before answering a show request");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ads::vendor::test_unit;
    use crate::testkit::ChannelSdk;

    fn manager() -> (AdManager, crate::testkit::ChannelHandles) {
        let (sdk, handles) = ChannelSdk::new();
        let manager = AdManager::new(&sdk, &AdsConfig::default()).expect("manager construction");
        (manager, handles)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(25)).await;
    }

    #[tokio::test]
    async fn test_banner_unit_resolved_at_construction() {
        let (manager, _handles) = manager();
        assert_eq!(manager.banner_unit().as_str(), test_unit(AdKind::Banner));
        manager.shutdown().await;
    }

    #[tokio::test]
    async fn test_missing_unit_fails_construction() {
        let (sdk, _handles) = ChannelSdk::new();
        let config = AdsConfig {
            use_test_units: false,
            ..AdsConfig::default()
        };
        assert!(AdManager::new(&sdk, &config).is_err());
    }

    #[tokio::test]
    async fn test_show_before_any_load_is_not_presented() {
        let (manager, handles) = manager();

        assert!(!manager.show_interstitial().await);
        // The attempt nudged the loader but nothing was recorded against
        // the gate, so a later attempt is not throttled.
        assert!(manager.gate.can_show(AdKind::Interstitial));
        assert_eq!(handles.interstitial.load_requests(), 1);
        assert_eq!(handles.interstitial.show_requests(), 0);

        manager.shutdown().await;
    }

    #[tokio::test]
    async fn test_loaded_ad_is_presented_and_gated() {
        let (manager, handles) = manager();
        handles.interstitial.emit(crate::ads::AdEvent::Loaded).await;
        settle().await;

        assert!(manager.show_interstitial().await);
        assert_eq!(handles.interstitial.show_requests(), 1);

        // Within the 60s window the gate refuses without consulting the
        // surface.
        assert!(!manager.show_interstitial().await);
        assert_eq!(handles.interstitial.show_requests(), 1);

        manager.shutdown().await;
    }

    #[tokio::test]
    async fn test_app_open_is_not_gated() {
        let (manager, handles) = manager();
        handles.app_open.emit(crate::ads::AdEvent::Loaded).await;
        settle().await;

        assert!(manager.show_app_open().await);
        handles.app_open.emit(crate::ads::AdEvent::Closed).await;
        handles.app_open.emit(crate::ads::AdEvent::Loaded).await;
        settle().await;

        // No interval applies; back-to-back shows are allowed.
        assert!(manager.show_app_open().await);
        assert_eq!(handles.app_open.show_requests(), 2);

        manager.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let (manager, _handles) = manager();
        manager.shutdown().await;
        manager.shutdown().await;
        assert!(!manager.show_interstitial().await);
    }
}
