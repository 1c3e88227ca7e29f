//! Handlers for the `check` subcommands.
//!
//! `check config` validates the configuration without touching the
//! network; `check backend` pings the API root.

use crate::api::{Backend, BackendClient};
use crate::cli::{output, Cli};
use crate::config::Config;
use crate::error::Result;

/// Validate the configuration and print a summary.
pub fn config(cli: &Cli) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));

    let path = &cli.config;
    let config = Config::load_or_default(path)?;
    if path.exists() {
        output::success(&format!("Configuration at {} is valid", path.display()));
    } else {
        output::note(&format!(
            "No file at {}; built-in defaults in effect",
            path.display()
        ));
    }

    output::field("Backend", &config.backend.api_url);
    output::field("Store", config.store.store_file().display());
    output::field(
        "Saved names",
        if config.store.remote_saved_names {
            "backend"
        } else {
            "local"
        },
    );
    output::field(
        "Ads",
        if config.ads.enabled {
            "enabled"
        } else {
            "disabled"
        },
    );

    if output::verbosity() > 0 {
        output::field("Timeout", format!("{}s", config.backend.timeout_secs));
        output::field("Test units", config.ads.use_test_units);
        output::field("Banner unit", &config.ads.banner_unit);
        output::field("Log level", &config.logging.level);
    }

    Ok(())
}

/// Ping the backend API root.
pub async fn backend(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let backend = BackendClient::from_config(&config.backend)?;

    let spinner = output::spinner(&format!("Probing {}", config.backend.api_url));
    match backend.ping().await {
        Ok(message) => {
            output::spinner_success(&spinner, &message);
            Ok(())
        }
        Err(err) => {
            output::spinner_fail(&spinner, "Backend unreachable");
            Err(err)
        }
    }
}
