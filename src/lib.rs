//! Spinel - business-name generation client with an ad-lifecycle runtime.
//!
//! This crate is the terminal front end for the Spinel name-generation
//! backend: it generates business names, checks domain availability,
//! designs logos and keeps a saved-name collection, while an embedded
//! ad runtime drives interstitial, rewarded and app-open placements
//! through the same load/show lifecycle the mobile clients use.
//!
//! # Architecture
//!
//! Screens own the user-facing flows and talk to the backend through
//! the [`api::Backend`] trait; saved names go through
//! [`store::SavedNameStore`] so the collection can live either in the
//! local document or on the backend. Ads run as one actor task per
//! surface behind [`ads::AdManager`], with a frequency gate deciding
//! which show requests reach a surface at all.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with env overrides
//! - [`domain`] - Core types: languages, generation kinds, saved names, ad surfaces
//! - [`error`] - Error types for the crate
//! - [`api`] - Backend HTTP client and wire types
//! - [`store`] - Saved names and preferences, local or backend-hosted
//! - [`screen`] - Home, saved-names, domain-check and logo flows
//! - [`ads`] - Ad surface actors, frequency gate and manager
//! - [`app`] - The interactive session
//! - [`cli`] - Command definitions and one-shot handlers
//!
//! # Example
//!
//! ```no_run
//! use spinel::api::{BackendClient, GenerateNamesRequest};
//! use spinel::config::BackendConfig;
//! use spinel::domain::{GenerationKind, Language};
//!
//! let client = BackendClient::from_config(&BackendConfig::default()).unwrap();
//! let request = GenerateNamesRequest::new(GenerationKind::Ai, Language::En);
//! ```

pub mod ads;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod screen;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
