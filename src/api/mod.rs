//! Backend API surface.
//!
//! The name-generation backend is consumed through the [`Backend`] trait
//! so screens and the CLI never depend on a concrete HTTP client. The
//! request and response types here mirror the backend's JSON bodies;
//! [`client::BackendClient`] is the real implementation.

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{GenerationKind, Language, SavedName};
use crate::error::{ApiError, Result};

pub use client::BackendClient;

/// How many names one generation request asks for by default.
pub const DEFAULT_NAME_COUNT: u32 = 5;

/// Criteria for one name-generation request.
///
/// Only the fields relevant to the chosen kind need to be filled in; the
/// backend ignores the rest. Optional fields are omitted from the wire
/// body entirely when unset.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateNamesRequest {
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    pub language: Language,
    /// Business sector, required by the backend for sector generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Target name length for length-based generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Brand personality for personality generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    /// City or region for geographic generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Seed keywords for AI and abbreviated generation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub count: u32,
}

impl GenerateNamesRequest {
    /// A request with the default count and no optional criteria.
    #[must_use]
    pub fn new(kind: GenerationKind, language: Language) -> Self {
        Self {
            kind,
            language,
            sector: None,
            length: None,
            personality: None,
            location: None,
            keywords: Vec::new(),
            count: DEFAULT_NAME_COUNT,
        }
    }
}

/// One batch of generated names, echoing the requested criteria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedNames {
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    pub language: Language,
}

/// Availability report for one name across the checked TLDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCheck {
    /// The cleaned-up name the backend actually checked.
    pub domain_name: String,
    pub results: Vec<DomainCheckRow>,
}

/// One TLD's verdict within a domain check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCheckRow {
    pub domain: String,
    pub available: bool,
    /// Indicative yearly price; absent for taken domains.
    pub price: Option<String>,
}

/// Input for both logo endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LogoRequest {
    pub company_name: String,
    pub style: String,
    pub colors: Vec<String>,
}

impl LogoRequest {
    /// A request with the backend's default style and palette.
    #[must_use]
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            style: "modern".to_string(),
            colors: vec!["blue".to_string(), "white".to_string()],
        }
    }
}

/// Text description of a logo concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoDescription {
    pub company_name: String,
    pub logo_description: String,
    pub preview_url: Option<String>,
    pub download_formats: Vec<String>,
}

impl LogoDescription {
    /// The structured design fields, when the model honored the JSON
    /// format request.
    ///
    /// The description is asked for as JSON but often arrives wrapped in
    /// prose. This tries the whole body first, then the outermost brace
    /// pair, and gives up to plain text otherwise.
    #[must_use]
    pub fn structured(&self) -> Option<serde_json::Value> {
        embedded_json(&self.logo_description)
    }
}

/// Rendered logo image response.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoImage {
    pub company_name: String,
    pub style: String,
    pub colors: Vec<String>,
    pub result: LogoImageResult,
}

/// Outcome of the image generation itself. On failure the backend still
/// answers 200 with `success: false` and a textual fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoImageResult {
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Inline image as a `data:image/png;base64,` URL.
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub fallback_description: Option<String>,
}

impl LogoImageResult {
    /// Decode the inline image bytes, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when an inline image is present but its base64
    /// payload does not decode.
    pub fn decoded_image(&self) -> Result<Option<Vec<u8>>> {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let Some(data_url) = self.image_base64.as_deref() else {
            return Ok(None);
        };
        // Strip the data-URL header; tolerate a bare base64 payload.
        let payload = data_url.rsplit_once(',').map_or(data_url, |(_, p)| p);
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| ApiError::Shape(format!("inline logo image is not valid base64: {e}")))?;
        Ok(Some(bytes))
    }
}

/// Client for the name-generation backend.
///
/// Implementations must be thread-safe; screens share one instance
/// behind an `Arc`.
///
/// # Errors
///
/// Every method can fail with a transport error or, when the backend
/// answered with a non-success status, with the backend's own `detail`
/// message attached.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Generate a batch of business names.
    async fn generate_names(&self, request: &GenerateNamesRequest) -> Result<GeneratedNames>;

    /// Check domain availability for a name across common TLDs.
    async fn check_domain(&self, name: &str) -> Result<DomainCheck>;

    /// Produce a textual logo concept.
    async fn generate_logo(&self, request: &LogoRequest) -> Result<LogoDescription>;

    /// Render an actual logo image.
    async fn generate_logo_image(&self, request: &LogoRequest) -> Result<LogoImage>;

    /// Persist a name on the backend.
    async fn save_name(&self, name: &str, category: &str) -> Result<SavedName>;

    /// All names saved on the backend.
    async fn saved_names(&self) -> Result<Vec<SavedName>>;

    /// Delete a saved name by id.
    async fn delete_saved_name(&self, id: &str) -> Result<()>;

    /// Flip the favorite flag of a saved name; returns the new state.
    async fn toggle_favorite(&self, id: &str) -> Result<bool>;

    /// Reachability probe; returns the backend's greeting line.
    async fn ping(&self) -> Result<String>;
}

/// Parse JSON that may be buried inside prose.
fn embedded_json(text: &str) -> Option<serde_json::Value> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        if value.is_object() {
            return Some(value);
        }
    }
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end])
        .ok()
        .filter(serde_json::Value::is_object)
}
