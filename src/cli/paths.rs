//! Path defaults for the CLI.
//!
//! All data lives under `~/.spinel/`:
//! - `~/.spinel/config.toml` - main configuration
//! - `~/.spinel/store.json` - saved names and language preference

use std::path::PathBuf;

use crate::config::default_home;

/// Returns the default config file path (`~/.spinel/config.toml`).
pub fn default_config() -> PathBuf {
    default_home().join("config.toml")
}
