//! Home screen: the generation form and its results.

use std::sync::Arc;

use tracing::{debug, info};

use crate::ads::AdManager;
use crate::api::{Backend, GenerateNamesRequest};
use crate::domain::{GenerationKind, SavedName};
use crate::error::Result;
use crate::store::SavedNameStore;

/// The batch currently on screen, kept so `save` knows which category
/// each name belongs to.
struct Batch {
    kind: GenerationKind,
    names: Vec<String>,
}

/// Generation form handling and the result list.
pub struct HomeScreen {
    backend: Arc<dyn Backend>,
    store: Arc<dyn SavedNameStore>,
    ads: Option<Arc<AdManager>>,
    batch: Option<Batch>,
}

impl HomeScreen {
    #[must_use]
    pub fn new(
        backend: Arc<dyn Backend>,
        store: Arc<dyn SavedNameStore>,
        ads: Option<Arc<AdManager>>,
    ) -> Self {
        Self {
            backend,
            store,
            ads,
            batch: None,
        }
    }

    /// Run one generation and keep the batch for saving.
    ///
    /// A successful generation is also an interstitial moment; the
    /// attempt outcome is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Backend failures propagate; the previous batch stays on screen.
    pub async fn generate(&mut self, request: &GenerateNamesRequest) -> Result<&[String]> {
        let generated = self.backend.generate_names(request).await?;
        info!(
            count = generated.names.len(),
            kind = %generated.kind,
            language = %generated.language,
            "Generated names"
        );
        self.batch = Some(Batch {
            kind: request.kind,
            names: generated.names,
        });

        if let Some(ads) = &self.ads {
            let shown = ads.show_interstitial().await;
            debug!(shown, "Post-generation interstitial attempt");
        }

        Ok(self.results())
    }

    /// The names from the latest successful generation.
    #[must_use]
    pub fn results(&self) -> &[String] {
        self.batch.as_ref().map_or(&[], |batch| &batch.names)
    }

    /// Save result `index` under the kind that generated it. Returns
    /// `Ok(None)` when the index points past the current batch.
    ///
    /// # Errors
    ///
    /// Store failures propagate.
    pub async fn save(&self, index: usize) -> Result<Option<SavedName>> {
        let Some(batch) = &self.batch else {
            return Ok(None);
        };
        let Some(name) = batch.names.get(index) else {
            return Ok(None);
        };
        let record = self.store.save(name, batch.kind.wire_name()).await?;
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use crate::error::{ApiError, Error};
    use crate::testkit::{MemoryStore, MockBackend};

    fn screen() -> (Arc<MockBackend>, Arc<MemoryStore>, HomeScreen) {
        let backend = Arc::new(MockBackend::new());
        let store = Arc::new(MemoryStore::new());
        let screen = HomeScreen::new(backend.clone(), store.clone(), None);
        (backend, store, screen)
    }

    fn request(kind: GenerationKind) -> GenerateNamesRequest {
        GenerateNamesRequest::new(kind, Language::Ar)
    }

    #[tokio::test]
    async fn test_generate_populates_results() {
        let (backend, _store, mut screen) = screen();
        backend.script_names(vec!["تقنية المستقبل".into(), "الحلول الذكية".into()]);

        let names = screen.generate(&request(GenerationKind::Ai)).await.unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(screen.results().len(), 2);
    }

    #[tokio::test]
    async fn test_generate_failure_keeps_previous_batch() {
        let (backend, _store, mut screen) = screen();
        backend.script_names(vec!["Keeper".into()]);
        screen
            .generate(&request(GenerationKind::Compound))
            .await
            .unwrap();

        backend.fail_next(ApiError::Backend {
            status: 500,
            detail: "generator unavailable".to_string(),
        });
        let err = screen
            .generate(&request(GenerationKind::Compound))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Backend { .. })));
        assert_eq!(screen.results(), ["Keeper"]);
    }

    #[tokio::test]
    async fn test_save_uses_generation_kind_as_category() {
        let (backend, store, mut screen) = screen();
        backend.script_names(vec!["Nova Labs".into()]);
        screen
            .generate(&request(GenerationKind::SmartRandom))
            .await
            .unwrap();

        let record = screen.save(0).await.unwrap().unwrap();
        assert_eq!(record.name, "Nova Labs");
        assert_eq!(record.category, "smart_random");

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, record.id);
    }

    #[tokio::test]
    async fn test_save_out_of_range_is_none() {
        let (backend, store, mut screen) = screen();

        // Nothing generated yet.
        assert!(screen.save(0).await.unwrap().is_none());

        backend.script_names(vec!["Only One".into()]);
        screen
            .generate(&request(GenerationKind::Sector))
            .await
            .unwrap();
        assert!(screen.save(5).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }
}
