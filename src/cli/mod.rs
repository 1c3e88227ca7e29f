//! Command-line interface definitions.
//!
//! Every screen is reachable as a one-shot subcommand for scripting;
//! `spinel run` opens the interactive session, which is the only mode
//! with the ad runtime live.

pub mod check;
pub mod domain;
pub mod generate;
pub mod lang;
pub mod logo;
pub mod output;
pub mod paths;
pub mod run;
pub mod saved;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{GenerationKind, Language};

/// Spinel - business name generation toolkit.
#[derive(Parser, Debug)]
#[command(name = "spinel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the spinel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive session (menus, ads live)
    Run,

    /// Generate business names
    Generate(GenerateArgs),

    /// Manage saved names
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Check domain availability for a name
    Domain(DomainArgs),

    /// Generate a logo concept, optionally rendering an image
    Logo(LogoArgs),

    /// Show or set the app language
    Lang(LangArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `spinel saved`.
#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved names, favorites first
    List,
    /// Save a name
    Add(SavedAddArgs),
    /// Remove a saved name by id
    Rm(SavedIdArg),
    /// Toggle a saved name's favorite flag by id
    Fav(SavedIdArg),
}

/// Subcommands for `spinel check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config,
    /// Probe the backend API
    Backend,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Generation strategy (ai, sector, abbreviated, compound,
    /// smart_random, geographic, length_based, personality)
    #[arg(default_value = "smart_random")]
    pub kind: GenerationKind,

    /// Name language (ar, en); defaults to the stored preference
    #[arg(short, long)]
    pub language: Option<Language>,

    /// How many names to generate
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Business sector (sector strategy)
    #[arg(long)]
    pub sector: Option<String>,

    /// Comma-separated seed keywords (ai and abbreviated strategies)
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Target name length (length_based strategy)
    #[arg(long)]
    pub length: Option<u32>,

    /// Brand personality (personality strategy)
    #[arg(long)]
    pub personality: Option<String>,

    /// City or region (geographic strategy)
    #[arg(long)]
    pub location: Option<String>,
}

/// Arguments for `saved add`.
#[derive(Parser, Debug)]
pub struct SavedAddArgs {
    /// The name to save
    pub name: String,

    /// Category to file it under
    #[arg(short = 'c', long, default_value = "manual")]
    pub category: String,
}

/// Shared argument for saved-name commands addressing one record.
#[derive(Parser, Debug)]
pub struct SavedIdArg {
    /// Id of the saved name
    pub id: String,
}

/// Arguments for the `domain` subcommand.
#[derive(Parser, Debug)]
pub struct DomainArgs {
    /// The name to check
    pub name: String,
}

/// Arguments for the `logo` subcommand.
#[derive(Parser, Debug)]
pub struct LogoArgs {
    /// Company name the logo is for
    pub company_name: String,

    /// Visual style passed to the generator
    #[arg(long, default_value = "modern")]
    pub style: String,

    /// Comma-separated color palette
    #[arg(long, default_value = "blue,white")]
    pub colors: String,

    /// Render an actual image instead of only the concept
    #[arg(long)]
    pub image: bool,

    /// Where to write the rendered image (defaults next to the cwd,
    /// named after the company)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `lang` subcommand.
#[derive(Parser, Debug)]
pub struct LangArgs {
    /// New language (ar, en); prints the current one when omitted
    pub language: Option<Language>,
}
