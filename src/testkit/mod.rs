//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`vendor`] — Mock [`VendorAd`](crate::ads::VendorAd) implementations:
//!   `ScriptedAd`, `ChannelAd`, plus the surface-per-kind `ChannelSdk`.
//! - [`backend`] — `MockBackend`, an in-memory [`Backend`](crate::api::Backend).
//! - [`store`] — `MemoryStore`, an in-memory [`SavedNameStore`](crate::store::SavedNameStore).
//! - [`config`] — Canonical test configurations (retry, ads).

pub mod backend;
pub mod config;
pub mod store;
pub mod vendor;

pub use backend::MockBackend;
pub use store::MemoryStore;
pub use vendor::{channel_ad, ChannelAd, ChannelAdHandle, ChannelHandles, ChannelSdk, ScriptedAd};
