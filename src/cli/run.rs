//! Handler for the `run` command.

use tracing::info;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Execute the run command: the interactive session.
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();

    info!(
        backend = %config.backend.api_url,
        ads = config.ads.enabled,
        "spinel starting"
    );

    App::run(config).await?;

    info!("spinel stopped");
    Ok(())
}
