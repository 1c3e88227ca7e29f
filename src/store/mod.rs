//! Saved-name persistence.
//!
//! The app keeps one active store behind the [`SavedNameStore`] trait:
//! the on-device JSON document by default, or the backend's collection
//! when remote sync is enabled. The UI language preference is device
//! state and always lives on [`LocalStore`] directly, whichever store
//! holds the names.

pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::domain::SavedName;
use crate::error::Result;

pub use local::LocalStore;
pub use remote::BackendSavedNames;

/// Where saved names live.
///
/// Implementations must be thread-safe; screens share one instance
/// behind an `Arc`.
///
/// # Errors
///
/// Methods fail with store errors for the local document and with API
/// errors for the remote collection. A missing id surfaces as
/// [`StoreError::NotFound`](crate::error::StoreError::NotFound) in both.
#[async_trait]
pub trait SavedNameStore: Send + Sync {
    /// Every saved name, in storage order. Callers sort for display with
    /// [`SavedName::display_order`].
    async fn list(&self) -> Result<Vec<SavedName>>;

    /// Persist a new name under a category and return the stored record.
    async fn save(&self, name: &str, category: &str) -> Result<SavedName>;

    /// Remove a saved name by id.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Flip a saved name's favorite flag and return the new value.
    async fn toggle_favorite(&self, id: &str) -> Result<bool>;
}
