//! Handler for the `domain` command.

use tabled::{Table, Tabled};

use crate::api::{Backend, BackendClient};
use crate::cli::{output, Cli, DomainArgs};
use crate::config::Config;
use crate::error::Result;

#[derive(Tabled)]
struct DomainRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Price")]
    price: String,
}

/// Execute the domain command.
pub async fn execute(cli: &Cli, args: &DomainArgs) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let backend = BackendClient::from_config(&config.backend)?;

    let name = args.name.trim();
    let spinner = output::spinner(&format!("Checking domains for {name}"));
    let check = match backend.check_domain(name).await {
        Ok(check) => check,
        Err(err) => {
            output::spinner_fail(&spinner, "Domain check failed");
            return Err(err);
        }
    };
    output::spinner_success(&spinner, &check.domain_name);

    if output::is_json() {
        output::json_output(serde_json::to_value(&check)?);
        return Ok(());
    }

    if check.results.is_empty() {
        output::note("No domain results");
        return Ok(());
    }

    let rows = check.results.iter().map(|row| DomainRow {
        domain: row.domain.clone(),
        status: if row.available { "available" } else { "taken" }.to_string(),
        price: row.price.clone().unwrap_or_else(|| "-".to_string()),
    });
    output::lines(&Table::new(rows).to_string());

    Ok(())
}
