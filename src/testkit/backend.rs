//! Mock [`Backend`] implementation for testing.
//!
//! [`MockBackend`] answers every endpoint without a network. Generation,
//! domain and logo responses come from scripted queues (with plausible
//! synthesized fallbacks when a queue is empty); the saved-name endpoints
//! are a real in-memory collection with the backend's 404 behavior, so
//! store adapters can be tested against honest error shapes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    Backend, DomainCheck, DomainCheckRow, GenerateNamesRequest, GeneratedNames, LogoDescription,
    LogoImage, LogoImageResult, LogoRequest, DEFAULT_NAME_COUNT,
};
use crate::domain::SavedName;
use crate::error::{ApiError, Error, Result};

/// In-memory stand-in for the name-generation backend.
pub struct MockBackend {
    names: Mutex<VecDeque<Vec<String>>>,
    domain_checks: Mutex<VecDeque<DomainCheck>>,
    logos: Mutex<VecDeque<LogoDescription>>,
    logo_images: Mutex<VecDeque<LogoImage>>,
    saved: Mutex<Vec<SavedName>>,
    next_error: Mutex<Option<Error>>,
    last_domain_query: Mutex<Option<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(VecDeque::new()),
            domain_checks: Mutex::new(VecDeque::new()),
            logos: Mutex::new(VecDeque::new()),
            logo_images: Mutex::new(VecDeque::new()),
            saved: Mutex::new(Vec::new()),
            next_error: Mutex::new(None),
            last_domain_query: Mutex::new(None),
        }
    }

    /// Queue one generation response. The request's kind and language are
    /// echoed back, as the real backend does.
    pub fn script_names(&self, names: Vec<String>) {
        self.names.lock().unwrap().push_back(names);
    }

    /// Queue one domain-check response.
    pub fn script_domain_check(&self, check: DomainCheck) {
        self.domain_checks.lock().unwrap().push_back(check);
    }

    /// Queue one logo description response.
    pub fn script_logo(&self, logo: LogoDescription) {
        self.logos.lock().unwrap().push_back(logo);
    }

    /// Queue one logo image response.
    pub fn script_logo_image(&self, image: LogoImage) {
        self.logo_images.lock().unwrap().push_back(image);
    }

    /// Fail the next call to any endpoint with this error, once.
    pub fn fail_next(&self, err: impl Into<Error>) {
        *self.next_error.lock().unwrap() = Some(err.into());
    }

    /// The name passed to the most recent `check_domain` call.
    pub fn last_domain_query(&self) -> Option<String> {
        self.last_domain_query.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<()> {
        match self.next_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    // Shape matches the live backend's 404 on the saved-name routes.
    fn not_found() -> Error {
        ApiError::Backend {
            status: 404,
            detail: "Name not found".to_string(),
        }
        .into()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn generate_names(&self, request: &GenerateNamesRequest) -> Result<GeneratedNames> {
        self.take_failure()?;
        let names = self.names.lock().unwrap().pop_front().unwrap_or_else(|| {
            (1..=DEFAULT_NAME_COUNT)
                .map(|i| format!("Mock Name {i}"))
                .collect()
        });
        Ok(GeneratedNames {
            names,
            kind: request.kind,
            language: request.language,
        })
    }

    async fn check_domain(&self, name: &str) -> Result<DomainCheck> {
        self.take_failure()?;
        *self.last_domain_query.lock().unwrap() = Some(name.to_string());
        let check = self.domain_checks.lock().unwrap().pop_front();
        Ok(check.unwrap_or_else(|| {
            let stem: String = name
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            DomainCheck {
                domain_name: stem.clone(),
                results: vec![DomainCheckRow {
                    domain: format!("{stem}.com"),
                    available: true,
                    price: Some("10-15 USD/year".to_string()),
                }],
            }
        }))
    }

    async fn generate_logo(&self, request: &LogoRequest) -> Result<LogoDescription> {
        self.take_failure()?;
        let logo = self.logos.lock().unwrap().pop_front();
        Ok(logo.unwrap_or_else(|| LogoDescription {
            company_name: request.company_name.clone(),
            logo_description: format!("A {} wordmark for {}", request.style, request.company_name),
            preview_url: None,
            download_formats: vec!["PNG".into(), "SVG".into(), "JPG".into(), "AI".into()],
        }))
    }

    async fn generate_logo_image(&self, request: &LogoRequest) -> Result<LogoImage> {
        self.take_failure()?;
        let image = self.logo_images.lock().unwrap().pop_front();
        Ok(image.unwrap_or_else(|| LogoImage {
            company_name: request.company_name.clone(),
            style: request.style.clone(),
            colors: request.colors.clone(),
            result: LogoImageResult {
                success: true,
                image_url: None,
                // A 1x1 PNG, enough for decode paths.
                image_base64: Some(
                    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==".to_string(),
                ),
                prompt: Some(format!("logo for {}", request.company_name)),
                error: None,
                fallback_description: None,
            },
        }))
    }

    async fn save_name(&self, name: &str, category: &str) -> Result<SavedName> {
        self.take_failure()?;
        let record = SavedName::new(name, category);
        self.saved.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn saved_names(&self) -> Result<Vec<SavedName>> {
        self.take_failure()?;
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn delete_saved_name(&self, id: &str) -> Result<()> {
        self.take_failure()?;
        let mut saved = self.saved.lock().unwrap();
        match saved.iter().position(|record| record.id == id) {
            Some(index) => {
                saved.remove(index);
                Ok(())
            }
            None => Err(Self::not_found()),
        }
    }

    async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        self.take_failure()?;
        let mut saved = self.saved.lock().unwrap();
        match saved.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.is_favorite = !record.is_favorite;
                Ok(record.is_favorite)
            }
            None => Err(Self::not_found()),
        }
    }

    async fn ping(&self) -> Result<String> {
        self.take_failure()?;
        Ok("Spinel Name Generator API".to_string())
    }
}
