//! Logo-generator screen.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{Backend, LogoDescription, LogoImage, LogoRequest};
use crate::error::Result;

/// Logo concepts and rendered logo images.
pub struct LogoScreen {
    backend: Arc<dyn Backend>,
}

impl LogoScreen {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Ask for a textual logo concept. Whether the description carries a
    /// parseable design object is up to the model; use
    /// [`LogoDescription::structured`] and fall back to the raw text.
    ///
    /// # Errors
    ///
    /// Backend failures propagate.
    pub async fn describe(&self, request: &LogoRequest) -> Result<LogoDescription> {
        let description = self.backend.generate_logo(request).await?;
        info!(
            company = %description.company_name,
            structured = description.structured().is_some(),
            "Generated logo description"
        );
        Ok(description)
    }

    /// Render an actual logo image. The call succeeds even when image
    /// generation failed upstream; check `result.success` and the
    /// fallback description.
    ///
    /// # Errors
    ///
    /// Backend failures propagate.
    pub async fn render_image(&self, request: &LogoRequest) -> Result<LogoImage> {
        let image = self.backend.generate_logo_image(request).await?;
        if image.result.success {
            info!(company = %image.company_name, "Rendered logo image");
        } else {
            warn!(
                company = %image.company_name,
                error = image.result.error.as_deref().unwrap_or("unknown"),
                "Logo image generation fell back to a description"
            );
        }
        Ok(image)
    }
}
