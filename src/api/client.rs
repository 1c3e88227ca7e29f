//! HTTP implementation of the [`Backend`] trait.
//!
//! Thin reqwest wrapper over the backend's `/api` routes. Non-success
//! responses are turned into [`ApiError::Backend`] carrying the status
//! and the FastAPI `detail` message when one is present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{
    Backend, DomainCheck, GenerateNamesRequest, GeneratedNames, LogoDescription, LogoImage,
    LogoRequest,
};
use crate::config::BackendConfig;
use crate::domain::SavedName;
use crate::error::{ApiError, Error, Result};

/// Reqwest-backed client for the name-generation backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    /// Validated base URL without a trailing slash.
    base_url: String,
}

impl BackendClient {
    /// Build a client against `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        if let Err(e) = Url::parse(base_url) {
            return Err(ApiError::BaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            }
            .into());
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the backend config section.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`BackendClient::new`].
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn generate_names(&self, request: &GenerateNamesRequest) -> Result<GeneratedNames> {
        self.post_json("/api/generate-names", request).await
    }

    async fn check_domain(&self, name: &str) -> Result<DomainCheck> {
        self.post_json("/api/check-domain", &DomainCheckBody { name })
            .await
    }

    async fn generate_logo(&self, request: &LogoRequest) -> Result<LogoDescription> {
        self.post_json("/api/generate-logo", request).await
    }

    async fn generate_logo_image(&self, request: &LogoRequest) -> Result<LogoImage> {
        self.post_json("/api/generate-logo-image", request).await
    }

    async fn save_name(&self, name: &str, category: &str) -> Result<SavedName> {
        self.post_json("/api/save-name", &SaveNameBody { name, category })
            .await
    }

    async fn saved_names(&self) -> Result<Vec<SavedName>> {
        self.get_json("/api/saved-names").await
    }

    async fn delete_saved_name(&self, id: &str) -> Result<()> {
        let path = format!("/api/saved-names/{id}");
        let response = self.client.delete(self.endpoint(&path)).send().await?;
        let _: MessageBody = decode(response).await?;
        Ok(())
    }

    async fn toggle_favorite(&self, id: &str) -> Result<bool> {
        let path = format!("/api/saved-names/{id}/favorite");
        let response = self.client.put(self.endpoint(&path)).send().await?;
        let body: FavoriteBody = decode(response).await?;
        Ok(body.is_favorite)
    }

    async fn ping(&self) -> Result<String> {
        let body: MessageBody = self.get_json("/api/").await?;
        Ok(body.message)
    }
}

/// Read a success body as `T`, or turn an error status into
/// [`ApiError::Backend`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(backend_error(status, response).await);
    }
    Ok(response.json::<T>().await?)
}

async fn backend_error(status: StatusCode, response: Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.detail,
        Err(_) if body.is_empty() => status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string(),
        Err(_) => body,
    };
    ApiError::Backend {
        status: status.as_u16(),
        detail,
    }
    .into()
}

#[derive(Serialize)]
struct DomainCheckBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SaveNameBody<'a> {
    name: &'a str,
    category: &'a str,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct FavoriteBody {
    #[allow(dead_code)]
    message: String,
    is_favorite: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_base_url() {
        let err = BackendClient::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::BaseUrl { .. })));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client =
            BackendClient::new("https://api.spinel.app/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint("/api/generate-names"),
            "https://api.spinel.app/api/generate-names"
        );
    }

    #[test]
    fn test_endpoint_preserves_sub_path() {
        let client = BackendClient::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint("/api/saved-names/abc/favorite"),
            "http://localhost:8000/api/saved-names/abc/favorite"
        );
    }

    #[test]
    fn test_save_body_serialization() {
        let body = SaveNameBody {
            name: "تقنية المستقبل",
            category: "ai",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "تقنية المستقبل");
        assert_eq!(json["category"], "ai");
    }

    #[test]
    fn test_favorite_body_deserialization() {
        let json = r#"{"message": "Favorite status updated", "is_favorite": true}"#;
        let body: FavoriteBody = serde_json::from_str(json).unwrap();
        assert!(body.is_favorite);
    }

    #[test]
    fn test_error_body_parses_fastapi_detail() {
        let json = r#"{"detail": "Name not found"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.detail, "Name not found");
    }

    #[test]
    fn test_client_is_cloneable_for_sharing() {
        let a = BackendClient::new("https://api.spinel.app", Duration::from_secs(5)).unwrap();
        let b = a.clone();
        assert_eq!(a.base_url, b.base_url);
    }
}
