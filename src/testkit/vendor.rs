//! Mock [`VendorAd`] implementations for testing.
//!
//! Two mock ad types for different testing needs:
//!
//! - [`ScriptedAd`] — Pre-loaded event queue consumed in order.
//!   Best for: surface state-machine tests driving events by hand.
//!
//! - [`ChannelAd`] — Channel-backed ad with an external control handle.
//!   Best for: manager and lifecycle tests needing precise, on-demand
//!   event delivery while the surface task runs.
//!
//! [`ChannelSdk`] bundles one [`ChannelAd`] per full-screen kind so a
//! whole [`AdManager`](crate::ads::AdManager) can be driven from outside.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ads::vendor::{AdEvent, UnitId, VendorAd, VendorSdk};
use crate::domain::AdKind;

// ---------------------------------------------------------------------------
// ScriptedAd
// ---------------------------------------------------------------------------

/// A mock ad with a fixed event queue.
///
/// Each call to `next_event()` pops the next entry. A `None` entry ends
/// the event stream (vendor death); an empty queue blocks forever, so a
/// surface under test stays responsive to commands instead of tearing
/// down.
pub struct ScriptedAd {
    unit: UnitId,
    events: VecDeque<Option<AdEvent>>,
    load_requests: AtomicU32,
    show_requests: AtomicU32,
}

impl ScriptedAd {
    pub fn new() -> Self {
        Self {
            unit: UnitId::from("test-unit"),
            events: VecDeque::new(),
            load_requests: AtomicU32::new(0),
            show_requests: AtomicU32::new(0),
        }
    }

    pub fn with_events(events: impl IntoIterator<Item = Option<AdEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::new()
        }
    }

    pub fn load_requests(&self) -> u32 {
        self.load_requests.load(Ordering::SeqCst)
    }

    pub fn show_requests(&self) -> u32 {
        self.show_requests.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedAd {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VendorAd for ScriptedAd {
    async fn request_load(&mut self) {
        self.load_requests.fetch_add(1, Ordering::SeqCst);
    }

    async fn request_show(&mut self) {
        self.show_requests.fetch_add(1, Ordering::SeqCst);
    }

    async fn next_event(&mut self) -> Option<AdEvent> {
        match self.events.pop_front() {
            Some(entry) => entry,
            // Queue exhausted: stay quiet rather than ending the stream.
            None => std::future::pending().await,
        }
    }

    fn unit(&self) -> &UnitId {
        &self.unit
    }
}

// ---------------------------------------------------------------------------
// ChannelAd
// ---------------------------------------------------------------------------

/// A mock ad controlled externally via a [`ChannelAdHandle`].
///
/// Events are pushed through the handle and read by the surface via
/// `next_event()`. Load/show request counters are shared with the handle
/// so tests can assert on them while the surface owns the ad.
pub struct ChannelAd {
    unit: UnitId,
    events: tokio::sync::mpsc::Receiver<Option<AdEvent>>,
    load_requests: Arc<AtomicU32>,
    show_requests: Arc<AtomicU32>,
}

/// Control handle for a [`ChannelAd`].
pub struct ChannelAdHandle {
    events: tokio::sync::mpsc::Sender<Option<AdEvent>>,
    load_requests: Arc<AtomicU32>,
    show_requests: Arc<AtomicU32>,
}

impl ChannelAdHandle {
    /// Deliver one lifecycle event to the ad.
    pub async fn emit(&self, event: AdEvent) {
        let _ = self.events.send(Some(event)).await;
    }

    /// End the event stream (causes `next_event` to return `None`).
    pub async fn end_stream(&self) {
        let _ = self.events.send(None).await;
    }

    /// How many times `request_load()` was called.
    pub fn load_requests(&self) -> u32 {
        self.load_requests.load(Ordering::SeqCst)
    }

    /// How many times `request_show()` was called.
    pub fn show_requests(&self) -> u32 {
        self.show_requests.load(Ordering::SeqCst)
    }
}

/// Create a [`ChannelAd`] and its control [`ChannelAdHandle`].
pub fn channel_ad(buffer: usize) -> (ChannelAd, ChannelAdHandle) {
    let (tx, rx) = tokio::sync::mpsc::channel(buffer);
    let loads = Arc::new(AtomicU32::new(0));
    let shows = Arc::new(AtomicU32::new(0));
    (
        ChannelAd {
            unit: UnitId::from("test-unit"),
            events: rx,
            load_requests: loads.clone(),
            show_requests: shows.clone(),
        },
        ChannelAdHandle {
            events: tx,
            load_requests: loads,
            show_requests: shows,
        },
    )
}

#[async_trait]
impl VendorAd for ChannelAd {
    async fn request_load(&mut self) {
        self.load_requests.fetch_add(1, Ordering::SeqCst);
    }

    async fn request_show(&mut self) {
        self.show_requests.fetch_add(1, Ordering::SeqCst);
    }

    async fn next_event(&mut self) -> Option<AdEvent> {
        match self.events.recv().await {
            Some(Some(event)) => Some(event),
            Some(None) | None => None,
        }
    }

    fn unit(&self) -> &UnitId {
        &self.unit
    }
}

// ---------------------------------------------------------------------------
// ChannelSdk
// ---------------------------------------------------------------------------

/// Control handles for the three full-screen surfaces a
/// [`ChannelSdk`]-backed manager runs.
pub struct ChannelHandles {
    pub interstitial: ChannelAdHandle,
    pub rewarded: ChannelAdHandle,
    pub app_open: ChannelAdHandle,
}

/// A [`VendorSdk`] that hands out pre-built [`ChannelAd`]s.
///
/// `create()` consumes the slot for the requested kind; creating the same
/// kind twice is a test bug and panics.
pub struct ChannelSdk {
    slots: Mutex<HashMap<AdKind, ChannelAd>>,
}

impl ChannelSdk {
    /// Build an SDK with one ad per full-screen kind plus the handles to
    /// drive them.
    pub fn new() -> (Self, ChannelHandles) {
        let mut slots = HashMap::new();
        let mut handles = Vec::new();
        for kind in AdKind::SURFACES {
            let (ad, handle) = channel_ad(32);
            slots.insert(kind, ad);
            handles.push(handle);
        }
        let mut handles = handles.into_iter();
        let handles = ChannelHandles {
            interstitial: handles.next().unwrap(),
            rewarded: handles.next().unwrap(),
            app_open: handles.next().unwrap(),
        };
        (
            Self {
                slots: Mutex::new(slots),
            },
            handles,
        )
    }
}

impl VendorSdk for ChannelSdk {
    type Ad = ChannelAd;

    fn create(&self, kind: AdKind, unit: UnitId) -> ChannelAd {
        let mut ad = self
            .slots
            .lock()
            .unwrap()
            .remove(&kind)
            .unwrap_or_else(|| panic!("no channel ad slot for {kind}"));
        ad.unit = unit;
        ad
    }
}
