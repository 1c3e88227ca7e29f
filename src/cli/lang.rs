//! Handler for the `lang` command.

use crate::cli::{output, Cli, LangArgs};
use crate::config::Config;
use crate::domain::Language;
use crate::error::Result;
use crate::store::LocalStore;

/// Show or set the interface language.
pub fn execute(cli: &Cli, args: &LangArgs) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let store = LocalStore::from_config(&config.store)?;

    match args.language {
        Some(language) => {
            store.set_language(language)?;
            output::success(&format!("Language set to {language}"));
        }
        None => match store.language() {
            Some(language) => output::field("Language", language),
            None => {
                output::field("Language", Language::default());
                output::note("default; set one with `spinel lang en`");
            }
        },
    }

    Ok(())
}
