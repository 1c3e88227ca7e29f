//! Async wrappers over `dialoguer` prompts.
//!
//! Prompts block on terminal input, so each one runs on the blocking
//! thread pool. A failed prompt (closed terminal, interrupted input)
//! is fatal to the session; everything else in the session degrades.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{Error, Result};

/// Pick one of `items`; returns the chosen index.
pub async fn select(title: &str, items: &[String]) -> Result<usize> {
    let title = title.to_string();
    let items = items.to_vec();
    blocking(move || {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .items(&items)
            .default(0)
            .interact()
    })
    .await
}

/// Free-text input; empty input is accepted and returned as-is.
pub async fn input(title: &str) -> Result<String> {
    let title = title.to_string();
    blocking(move || {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .allow_empty(true)
            .interact_text()
    })
    .await
    .map(|raw: String| raw.trim().to_string())
}

/// Yes/no question, defaulting to yes.
pub async fn confirm(title: &str) -> Result<bool> {
    let title = title.to_string();
    blocking(move || {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .default(true)
            .interact()
    })
    .await
}

async fn blocking<T: Send + 'static>(
    prompt: impl FnOnce() -> dialoguer::Result<T> + Send + 'static,
) -> Result<T> {
    match tokio::task::spawn_blocking(prompt).await {
        Ok(outcome) => outcome.map_err(Error::from),
        Err(join) => Err(Error::Io(std::io::Error::other(join))),
    }
}
