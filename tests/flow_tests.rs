//! Cross-module flows: screens over the mock backend and real stores.
//!
//! These wire the same pieces the interactive session does, minus the
//! prompts, and check that data survives the whole path from a
//! generation batch to the on-disk document.

use std::sync::Arc;

use spinel::api::{GenerateNamesRequest, LogoImage, LogoImageResult, LogoRequest};
use spinel::domain::{GenerationKind, Language};
use spinel::error::{Error, StoreError};
use spinel::screen::{HomeScreen, LogoScreen, SavedScreen};
use spinel::store::{BackendSavedNames, LocalStore, SavedNameStore};
use spinel::testkit::MockBackend;

#[tokio::test]
async fn test_generate_save_list_favorite_persists() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.json");

    let backend = Arc::new(MockBackend::new());
    backend.script_names(vec![
        "نوفا".to_string(),
        "Vertex".to_string(),
        "Lumen".to_string(),
    ]);
    let store = Arc::new(LocalStore::open(path.clone()).expect("open store"));

    let mut home = HomeScreen::new(backend, store.clone(), None);
    let request = GenerateNamesRequest::new(GenerationKind::Ai, Language::Ar);
    let names = home.generate(&request).await.expect("generation");
    assert_eq!(names, ["نوفا", "Vertex", "Lumen"]);

    let record = home
        .save(1)
        .await
        .expect("save")
        .expect("index inside batch");
    assert_eq!(record.name, "Vertex");
    assert_eq!(record.category, "ai");

    let saved = SavedScreen::new(store.clone());
    let listed = saved.list().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert!(saved.toggle_favorite(&record.id).await.expect("toggle"));

    // The document on disk has it all, not just the in-memory store.
    let reopened = LocalStore::open(path).expect("reopen store");
    let persisted = reopened.list().await.expect("list reopened");
    assert_eq!(persisted[0].name, "Vertex");
    assert!(persisted[0].is_favorite);
}

#[tokio::test]
async fn test_save_out_of_batch_is_a_noop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = Arc::new(MockBackend::new());
    backend.script_names(vec!["Solo".to_string()]);
    let store = Arc::new(LocalStore::open(dir.path().join("store.json")).expect("open store"));

    let mut home = HomeScreen::new(backend, store.clone(), None);
    let request = GenerateNamesRequest::new(GenerationKind::Compound, Language::En);
    home.generate(&request).await.expect("generation");

    assert!(home.save(5).await.expect("save").is_none());
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_backend_hosted_saved_names_map_missing_ids() {
    let backend = Arc::new(MockBackend::new());
    let store = BackendSavedNames::new(backend.clone());

    let record = store.save("Orbit", "manual").await.expect("save");
    assert_eq!(store.list().await.expect("list").len(), 1);

    let err = store.remove("no-such-id").await.unwrap_err();
    assert!(matches!(err, Error::Store(StoreError::NotFound { .. })));

    store.remove(&record.id).await.expect("remove");
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_logo_image_failure_surfaces_fallback_text() {
    let backend = Arc::new(MockBackend::new());
    backend.script_logo_image(LogoImage {
        company_name: "Orbit".to_string(),
        style: "modern".to_string(),
        colors: vec!["blue".to_string()],
        result: LogoImageResult {
            success: false,
            image_url: None,
            image_base64: None,
            prompt: None,
            error: Some("image model unavailable".to_string()),
            fallback_description: Some("A minimalist orbit mark".to_string()),
        },
    });

    let screen = LogoScreen::new(backend);
    let image = screen
        .render_image(&LogoRequest::new("Orbit"))
        .await
        .expect("render call itself succeeds");

    assert!(!image.result.success);
    assert_eq!(
        image.result.fallback_description.as_deref(),
        Some("A minimalist orbit mark")
    );
    assert!(image.result.decoded_image().expect("decode").is_none());
}
