//! Ad lifecycle runtime.
//!
//! Everything between the app and the ad vendor lives here. Each
//! full-screen ad kind gets an [`AdSurface`] task that keeps an ad loaded
//! and retries failed loads with backoff; the [`FrequencyGate`] throttles
//! how often the throwaway kinds may interrupt the user; [`AdManager`]
//! fronts both for the rest of the app. The vendor itself sits behind the
//! [`VendorSdk`]/[`VendorAd`] traits, with [`SimSdk`] as the built-in
//! stand-in.

pub mod gate;
pub mod manager;
pub mod retry;
pub mod sim;
pub mod surface;
pub mod vendor;

pub use gate::FrequencyGate;
pub use manager::AdManager;
pub use retry::RetryState;
pub use sim::{SimAd, SimSdk};
pub use surface::{AdSurface, ShowOutcome, SurfaceCommand, SurfaceState};
pub use vendor::{resolve_unit, AdEvent, UnitId, VendorAd, VendorSdk};
