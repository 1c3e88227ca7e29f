//! Saved-name management from the command line.
//!
//! `saved list` renders the collection as a table; `add`, `rm` and `fav`
//! mutate it. Names live in the local document unless the config routes
//! the collection to the backend.

use std::sync::Arc;

use tabled::{Table, Tabled};

use crate::api::BackendClient;
use crate::cli::{output, Cli, SavedCommand};
use crate::config::Config;
use crate::domain::SavedName;
use crate::error::Result;
use crate::store::{BackendSavedNames, LocalStore, SavedNameStore};

#[derive(Tabled)]
struct SavedRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Fav")]
    favorite: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Id")]
    id: String,
}

/// Render saved names as an aligned table.
///
/// Shared with the interactive session so both surfaces show the same
/// columns. Callers sort first; this renders in the order given.
pub fn saved_table(names: &[SavedName]) -> String {
    let rows = names.iter().enumerate().map(|(index, record)| SavedRow {
        index: (index + 1).to_string(),
        name: record.name.clone(),
        category: record.category.clone(),
        favorite: if record.is_favorite {
            "★".to_string()
        } else {
            String::new()
        },
        saved: record.timestamp.format("%Y-%m-%d").to_string(),
        id: record.id.clone(),
    });
    Table::new(rows).to_string()
}

/// Execute a `saved` subcommand.
pub async fn execute(cli: &Cli, command: &SavedCommand) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let store = open_store(&config)?;

    match command {
        SavedCommand::List => {
            let mut names = store.list().await?;
            names.sort_by(SavedName::display_order);

            if output::is_json() {
                output::json_output(serde_json::to_value(&names)?);
            } else if names.is_empty() {
                output::note("No saved names yet");
            } else {
                output::lines(&saved_table(&names));
                println!();
                println!(
                    "  Remove with {}",
                    output::highlight("spinel saved rm <id>")
                );
            }
        }
        SavedCommand::Add(args) => {
            let record = store.save(&args.name, &args.category).await?;
            output::success(&format!("Saved {} ({})", record.name, record.id));
        }
        SavedCommand::Rm(args) => {
            store.remove(&args.id).await?;
            output::success("Removed");
        }
        SavedCommand::Fav(args) => {
            let favorite = store.toggle_favorite(&args.id).await?;
            if favorite {
                output::success("Marked favorite");
            } else {
                output::success("Favorite cleared");
            }
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> Result<Arc<dyn SavedNameStore>> {
    if config.store.remote_saved_names {
        let backend = BackendClient::from_config(&config.backend)?;
        Ok(Arc::new(BackendSavedNames::new(Arc::new(backend))))
    } else {
        Ok(Arc::new(LocalStore::from_config(&config.store)?))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(name: &str, favorite: bool) -> SavedName {
        SavedName {
            id: format!("id-{name}"),
            name: name.to_string(),
            category: "test".to_string(),
            timestamp: Utc::now(),
            is_favorite: favorite,
        }
    }

    #[test]
    fn test_saved_table_includes_all_columns() {
        let table = saved_table(&[record("Aurora", true), record("Borealis", false)]);

        assert!(table.contains("Name"));
        assert!(table.contains("Category"));
        assert!(table.contains("Aurora"));
        assert!(table.contains("★"));
        assert!(table.contains("id-Borealis"));
    }

    #[test]
    fn test_saved_table_empty_input_is_header_only() {
        let table = saved_table(&[]);

        assert!(table.contains("Name"));
        assert!(!table.contains("★"));
    }
}
