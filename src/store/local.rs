//! On-device store document.
//!
//! A single JSON file holds everything the app persists locally: the
//! saved names and the UI language choice. Writes go through a temp file
//! and an atomic rename so a crash mid-write never truncates the
//! document; a document that no longer parses surfaces as an error
//! instead of being silently replaced.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StoreConfig;
use crate::domain::{Language, SavedName};
use crate::error::{Result, StoreError};
use crate::store::SavedNameStore;

/// On-disk document shape.
///
/// Older builds stored the language under `language`; current builds
/// read `appLanguage` first and keep writing both keys so a downgrade
/// still sees the choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Document {
    #[serde(rename = "savedNames", default)]
    saved_names: Vec<SavedName>,
    #[serde(rename = "appLanguage", default, skip_serializing_if = "Option::is_none")]
    app_language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
}

/// File-backed saved-name store and language preference.
///
/// Cheap to clone; clones share the same in-memory document and file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    document: Arc<Mutex<Document>>,
}

impl LocalStore {
    /// Open the store at `path`, loading the document if the file exists.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or holds a document that does
    /// not parse. A corrupt document is left on disk untouched.
    pub fn open(path: PathBuf) -> Result<Self> {
        let document = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No store document yet; starting empty");
                Document::default()
            }
            Err(e) => return Err(StoreError::Read(e).into()),
        };
        Ok(Self {
            path,
            document: Arc::new(Mutex::new(document)),
        })
    }

    /// Open the store at the configured location.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`LocalStore::open`].
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::open(config.store_file())
    }

    /// The stored UI language, when one was ever chosen.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        let document = self.document.lock();
        document.app_language.or(document.language)
    }

    /// Persist the UI language under both the current and the legacy key.
    ///
    /// # Errors
    ///
    /// Fails when the document cannot be written.
    pub fn set_language(&self, language: Language) -> Result<()> {
        self.mutate(|document| {
            document.app_language = Some(language);
            document.language = Some(language);
            Ok(())
        })
    }

    /// Apply a change to the document and commit it to disk. The
    /// in-memory document only advances when the write succeeded.
    fn mutate<T>(&self, apply: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut document = self.document.lock();
        let mut updated = document.clone();
        let value = apply(&mut updated)?;
        self.persist(&updated)?;
        *document = updated;
        Ok(value)
    }

    /// Write the document via a temp file and an atomic rename.
    fn persist(&self, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(StoreError::Write)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Write(e)
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

#[async_trait]
impl SavedNameStore for LocalStore {
    async fn list(&self) -> Result<Vec<SavedName>> {
        Ok(self.document.lock().saved_names.clone())
    }

    async fn save(&self, name: &str, category: &str) -> Result<SavedName> {
        let record = SavedName::new(name, category);
        let stored = record.clone();
        self.mutate(move |document| {
            document.saved_names.push(record);
            Ok(())
        })?;
        debug!(name = %stored.name, category = %stored.category, "Saved name locally");
        Ok(stored)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.mutate(|document| {
            let before = document.saved_names.len();
            document.saved_names.retain(|record| record.id != id);
            if document.saved_names.len() == before {
                return Err(StoreError::NotFound { id: id.to_string() }.into());
            }
            Ok(())
        })
    }

    async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.mutate(|document| {
            let record = document
                .saved_names
                .iter_mut()
                .find(|record| record.id == id)
                .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
            record.is_favorite = !record.is_favorite;
            Ok(record.is_favorite)
        })
    }
}
