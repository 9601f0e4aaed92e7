//! Configuration CLI commands.
//!
//! Provides `config list` and `config path` for inspecting the settings
//! the resolver runs with.

use clap::Subcommand;

use packlayer::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    println!("[paths]");
    println!("  game_data_dir = {}", display_path(&config.paths.game_data_dir));
    println!("  user_data_dir = {}", display_path(&config.paths.user_data_dir));
    println!();
    println!("[packages]");
    println!("  default_package = {}", config.default_package());

    Ok(())
}

fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

fn display_path(path: &Option<std::path::PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "(not set)".to_string(),
    }
}
