//! Backend-hosted saved names.
//!
//! Adapter that keeps the saved-name collection on the backend instead
//! of the local document. Backend 404s for unknown ids are mapped to the
//! store's own not-found error so callers handle both stores the same
//! way.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::Backend;
use crate::domain::SavedName;
use crate::error::{ApiError, Error, Result, StoreError};
use crate::store::SavedNameStore;

/// [`SavedNameStore`] over the backend's saved-name endpoints.
pub struct BackendSavedNames {
    backend: Arc<dyn Backend>,
}

impl BackendSavedNames {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }
}

fn map_not_found(err: Error, id: &str) -> Error {
    match err {
        Error::Api(ApiError::Backend { status: 404, .. }) => {
            StoreError::NotFound { id: id.to_string() }.into()
        }
        other => other,
    }
}

#[async_trait]
impl SavedNameStore for BackendSavedNames {
    async fn list(&self) -> Result<Vec<SavedName>> {
        self.backend.saved_names().await
    }

    async fn save(&self, name: &str, category: &str) -> Result<SavedName> {
        self.backend.save_name(name, category).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.backend
            .delete_saved_name(id)
            .await
            .map_err(|e| map_not_found(e, id))
    }

    async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.backend
            .toggle_favorite(id)
            .await
            .map_err(|e| map_not_found(e, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MockBackend;

    fn remote() -> (Arc<MockBackend>, BackendSavedNames) {
        let backend = Arc::new(MockBackend::new());
        let store = BackendSavedNames::new(backend.clone());
        (backend, store)
    }

    #[tokio::test]
    async fn test_save_and_list_round_trip() {
        let (_backend, store) = remote();

        let record = store.save("تقنية المستقبل", "ai").await.unwrap();
        let names = store.list().await.unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].id, record.id);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_maps_to_not_found() {
        let (_backend, store) = remote();

        let err = store.remove("missing-id").await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_toggle_favorite_round_trips_state() {
        let (_backend, store) = remote();

        let record = store.save("Star", "ai").await.unwrap();
        assert!(store.toggle_favorite(&record.id).await.unwrap());
        assert!(!store.toggle_favorite(&record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_other_api_errors_pass_through() {
        let (backend, store) = remote();
        backend.fail_next(ApiError::Backend {
            status: 500,
            detail: "database unavailable".to_string(),
        });

        let err = store.list().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Backend { status: 500, .. })
        ));
    }
}
