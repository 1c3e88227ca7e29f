//! Handler for the `generate` command.
//!
//! One-shot name generation without the interactive session. The
//! language defaults to the stored preference so scripted runs match
//! what the app would produce.

use crate::api::{Backend, BackendClient, GenerateNamesRequest};
use crate::cli::{output, Cli, GenerateArgs};
use crate::config::Config;
use crate::domain::Language;
use crate::error::Result;
use crate::store::LocalStore;

/// Execute the generate command.
pub async fn execute(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let language = match args.language {
        Some(language) => language,
        None => stored_language(&config),
    };

    let mut request = GenerateNamesRequest::new(args.kind, language);
    if let Some(count) = args.count {
        request.count = count;
    }
    request.sector = args.sector.clone();
    request.length = args.length;
    request.personality = args.personality.clone();
    request.location = args.location.clone();
    if let Some(keywords) = &args.keywords {
        request.keywords = split_keywords(keywords);
    }

    let backend = BackendClient::from_config(&config.backend)?;
    let spinner = output::spinner(&format!("Generating {} names", request.count));
    match backend.generate_names(&request).await {
        Ok(generated) => {
            output::spinner_success(&spinner, &format!("{} names", generated.names.len()));
            if output::is_json() {
                output::json_output(serde_json::to_value(&generated)?);
            } else {
                for (index, name) in generated.names.iter().enumerate() {
                    output::field(&format!("{}.", index + 1), name);
                }
            }
            Ok(())
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Generation failed");
            Err(err)
        }
    }
}

/// Language when `--language` was not given: the stored preference if
/// the local document has one, Arabic otherwise.
fn stored_language(config: &Config) -> Language {
    LocalStore::from_config(&config.store)
        .ok()
        .and_then(|store| store.language())
        .unwrap_or_default()
}

/// Split a keyword list on commas, accepting both the ASCII and the
/// Arabic comma.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split([',', '،'])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
