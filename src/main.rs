use clap::Parser;

use spinel::cli::output::{self, OutputConfig};
use spinel::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Run => cli::run::execute(&cli).await,
        Commands::Generate(args) => cli::generate::execute(&cli, args).await,
        Commands::Saved(command) => cli::saved::execute(&cli, command).await,
        Commands::Domain(args) => cli::domain::execute(&cli, args).await,
        Commands::Logo(args) => cli::logo::execute(&cli, args).await,
        Commands::Lang(args) => cli::lang::execute(&cli, args),
        Commands::Check(command) => match command {
            CheckCommand::Config => cli::check::config(&cli),
            CheckCommand::Backend => cli::check::backend(&cli).await,
        },
    };

    if let Err(err) = result {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
