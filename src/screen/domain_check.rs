//! Domain-check screen.

use std::sync::Arc;

use tracing::info;

use crate::api::{Backend, DomainCheck};
use crate::error::Result;

/// Domain availability lookups for a candidate name.
pub struct DomainCheckScreen {
    backend: Arc<dyn Backend>,
}

impl DomainCheckScreen {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Check availability of `name` across the backend's TLD list.
    /// The backend strips company words and transliterates Arabic, so
    /// the returned `domain_name` may differ from the input.
    ///
    /// # Errors
    ///
    /// Backend failures propagate.
    pub async fn check(&self, name: &str) -> Result<DomainCheck> {
        let check = self.backend.check_domain(name.trim()).await?;
        info!(
            input = name,
            checked = %check.domain_name,
            tlds = check.results.len(),
            "Checked domain availability"
        );
        Ok(check)
    }
}
