//! In-memory [`SavedNameStore`] for screen tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::SavedName;
use crate::error::{Result, StoreError};
use crate::store::SavedNameStore;

/// A saved-name store with no disk behind it.
///
/// Matches [`LocalStore`](crate::store::LocalStore) semantics, including
/// [`StoreError::NotFound`] for unknown ids.
pub struct MemoryStore {
    names: Mutex<Vec<SavedName>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(Vec::new()),
        }
    }

    /// Start pre-populated, for tests exercising ordering or removal.
    pub fn with_names(names: Vec<SavedName>) -> Self {
        Self {
            names: Mutex::new(names),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SavedNameStore for MemoryStore {
    async fn list(&self) -> Result<Vec<SavedName>> {
        Ok(self.names.lock().unwrap().clone())
    }

    async fn save(&self, name: &str, category: &str) -> Result<SavedName> {
        let record = SavedName::new(name, category);
        self.names.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut names = self.names.lock().unwrap();
        match names.iter().position(|record| record.id == id) {
            Some(index) => {
                names.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }.into()),
        }
    }

    async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        let mut names = self.names.lock().unwrap();
        match names.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.is_favorite = !record.is_favorite;
                Ok(record.is_favorite)
            }
            None => Err(StoreError::NotFound { id: id.to_string() }.into()),
        }
    }
}
