//! Full-screen ad surface state machine.
//!
//! One [`AdSurface`] owns a single vendor ad slot (interstitial, rewarded,
//! or app-open) and runs as its own task. It keeps an ad loaded ahead of
//! demand, dispatches shows against the loaded ad, and reloads after every
//! close. Load failures back off through [`RetryState`]; show attempts
//! against an empty surface nudge the loader instead of presenting
//! anything.

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::ads::retry::RetryState;
use crate::ads::vendor::{AdEvent, VendorAd};
use crate::config::RetryConfig;
use crate::domain::AdKind;

const COMMAND_BUFFER: usize = 16;

/// Where a surface is in its load/show cycle.
///
/// A surface holds at most one vendor ad, so the states are mutually
/// exclusive: there is never a loaded ad while a load is in flight, and a
/// showing ad is no longer available for another show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No ad held and no load in flight.
    Idle,
    /// A load was requested and its outcome has not arrived yet.
    Loading,
    /// A loaded ad is waiting to be shown.
    Ready,
    /// The vendor is presenting the ad; it resolves with `Closed`.
    Showing,
}

/// Control messages accepted by a running surface.
#[derive(Debug)]
pub enum SurfaceCommand {
    /// Present the loaded ad if there is one.
    TryShow {
        /// Resolved once the surface decided what to do with the request.
        ack: oneshot::Sender<ShowOutcome>,
    },
    /// Stop the surface task. A pending reward resolves unearned.
    Shutdown,
}

/// What a surface did with a show request.
#[derive(Debug)]
pub enum ShowOutcome {
    /// No ad was ready; nothing was presented. A load was nudged instead.
    NotReady,
    /// The ad was handed to the vendor for presentation.
    Dispatched {
        /// Resolves with whether the reward was earned once the ad closes.
        /// `None` for kinds that do not pay a reward.
        reward: Option<oneshot::Receiver<bool>>,
    },
}

/// Reward bookkeeping for one rewarded presentation.
///
/// The earned flag is flipped by the vendor's reward event and delivered
/// exactly once when the ad closes. Dropping the cycle without resolving
/// it closes the channel, which waiters read as unearned.
#[derive(Debug)]
struct RewardCycle {
    earned: bool,
    tx: oneshot::Sender<bool>,
}

impl RewardCycle {
    fn new(tx: oneshot::Sender<bool>) -> Self {
        Self { earned: false, tx }
    }

    fn resolve(self) {
        let _ = self.tx.send(self.earned);
    }
}

/// State machine driving one ad slot against the vendor.
pub struct AdSurface<A: VendorAd> {
    kind: AdKind,
    ad: A,
    state: SurfaceState,
    retry: RetryState,
    retry_at: Option<Instant>,
    reward: Option<RewardCycle>,
    cmd_rx: mpsc::Receiver<SurfaceCommand>,
}

impl<A: VendorAd> AdSurface<A> {
    /// Build a surface and the command handle used to drive it.
    #[must_use]
    pub fn new(kind: AdKind, ad: A, retry: RetryConfig) -> (Self, mpsc::Sender<SurfaceCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let surface = Self {
            kind,
            ad,
            state: SurfaceState::Idle,
            retry: RetryState::new(retry),
            retry_at: None,
            reward: None,
            cmd_rx,
        };
        (surface, cmd_tx)
    }

    /// Drive the surface until shutdown or vendor death.
    ///
    /// Starts a load immediately, then reacts to commands, vendor events
    /// and the retry timer. Consumes the surface; run it on its own task.
    pub async fn run(mut self) {
        self.begin_load().await;
        loop {
            let retry_at = self.retry_at;
            tokio::select! {
                cmd = self.cmd_rx.recv() => match cmd {
                    Some(SurfaceCommand::TryShow { ack }) => self.handle_try_show(ack).await,
                    Some(SurfaceCommand::Shutdown) | None => {
                        debug!(kind = %self.kind, "Surface shutting down");
                        break;
                    }
                },
                event = self.ad.next_event() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => {
                        warn!(kind = %self.kind, "Vendor event stream ended; stopping surface");
                        break;
                    }
                },
                () = retry_timer(retry_at), if retry_at.is_some() => {
                    self.retry_at = None;
                    debug!(kind = %self.kind, "Retry timer fired");
                    self.begin_load().await;
                }
            }
        }
        // Dropping self here drops any pending reward cycle, which the
        // waiting receiver observes as unearned.
    }

    /// Request a vendor load if the surface is idle.
    ///
    /// A no-op in every other state, so callers can nudge freely without
    /// stacking requests. Cancels a scheduled retry.
    async fn begin_load(&mut self) {
        if self.state != SurfaceState::Idle {
            return;
        }
        self.state = SurfaceState::Loading;
        self.retry_at = None;
        debug!(kind = %self.kind, unit = %self.ad.unit(), "Requesting ad load");
        self.ad.request_load().await;
    }

    /// A show attempt against a surface with no ready ad. Replies
    /// `NotReady` and kicks the loader; a dormant surface gets a fresh
    /// retry budget since the attempt signals renewed demand.
    async fn nudge_load(&mut self) {
        if self.state == SurfaceState::Idle && self.retry_at.is_none() {
            self.retry.reset();
        }
        self.begin_load().await;
    }

    async fn handle_try_show(&mut self, ack: oneshot::Sender<ShowOutcome>) {
        if self.state != SurfaceState::Ready {
            debug!(kind = %self.kind, state = ?self.state, "Show requested but no ad is ready");
            let _ = ack.send(ShowOutcome::NotReady);
            self.nudge_load().await;
            return;
        }

        // The loaded ad is consumed by the show; it is no longer
        // available even if the vendor never confirms the open.
        self.state = SurfaceState::Showing;
        let reward = if self.kind == AdKind::Rewarded {
            let (tx, rx) = oneshot::channel();
            self.reward = Some(RewardCycle::new(tx));
            Some(rx)
        } else {
            None
        };
        info!(kind = %self.kind, unit = %self.ad.unit(), "Showing ad");
        self.ad.request_show().await;
        let _ = ack.send(ShowOutcome::Dispatched { reward });
    }

    async fn handle_event(&mut self, event: AdEvent) {
        match event {
            AdEvent::Loaded => {
                if self.state != SurfaceState::Loading {
                    debug!(kind = %self.kind, state = ?self.state, "Ignoring load event outside an active load");
                    return;
                }
                self.retry.reset();
                self.state = SurfaceState::Ready;
                info!(kind = %self.kind, "Ad loaded");
            }
            AdEvent::LoadFailed { reason } => {
                if self.state != SurfaceState::Loading {
                    debug!(kind = %self.kind, state = ?self.state, "Ignoring load failure outside an active load");
                    return;
                }
                self.state = SurfaceState::Idle;
                match self.retry.record_failure() {
                    Some(delay) => {
                        warn!(
                            kind = %self.kind,
                            failures = self.retry.failures(),
                            delay_ms = delay.as_millis() as u64,
                            reason = %reason,
                            "Ad load failed; retry scheduled"
                        );
                        self.retry_at = Some(Instant::now() + delay);
                    }
                    None => {
                        warn!(
                            kind = %self.kind,
                            failures = self.retry.failures(),
                            reason = %reason,
                            "Ad load failed; retry budget exhausted"
                        );
                    }
                }
            }
            AdEvent::Opened => {
                debug!(kind = %self.kind, "Ad opened");
            }
            AdEvent::Closed => {
                if self.state != SurfaceState::Showing {
                    debug!(kind = %self.kind, state = ?self.state, "Ignoring close without an active show");
                    return;
                }
                if let Some(cycle) = self.reward.take() {
                    cycle.resolve();
                }
                info!(kind = %self.kind, "Ad closed; reloading");
                self.state = SurfaceState::Idle;
                self.begin_load().await;
            }
            AdEvent::EarnedReward { amount, label } => match self.reward.as_mut() {
                Some(cycle) => {
                    cycle.earned = true;
                    info!(kind = %self.kind, amount, label = %label, "Reward earned");
                }
                None => {
                    debug!(
                        kind = %self.kind,
                        amount,
                        label = %label,
                        "Reward event without an active show; dropped"
                    );
                }
            },
        }
    }
}

async fn retry_timer(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
