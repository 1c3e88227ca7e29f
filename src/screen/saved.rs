//! Saved-names screen.

use std::sync::Arc;

use tracing::debug;

use crate::domain::SavedName;
use crate::error::Result;
use crate::store::SavedNameStore;

/// List, remove and favorite saved names.
pub struct SavedScreen {
    store: Arc<dyn SavedNameStore>,
}

impl SavedScreen {
    #[must_use]
    pub fn new(store: Arc<dyn SavedNameStore>) -> Self {
        Self { store }
    }

    /// Names in display order: favorites first, then newest first.
    ///
    /// # Errors
    ///
    /// Store failures propagate.
    pub async fn list(&self) -> Result<Vec<SavedName>> {
        let mut names = self.store.list().await?;
        names.sort_by(SavedName::display_order);
        Ok(names)
    }

    /// Remove a saved name by id.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error for unknown ids.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.store.remove(id).await?;
        debug!(id, "Removed saved name");
        Ok(())
    }

    /// Flip a name's favorite flag; returns the new value.
    ///
    /// # Errors
    ///
    /// Fails with a not-found error for unknown ids.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.store.toggle_favorite(id).await
    }
}
