//! Package listing CLI commands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::commands::build_manager;
use crate::error::CliError;

/// Packages subcommands.
#[derive(Debug, Subcommand)]
pub enum PackagesCommands {
    /// List installed packages
    List {
        /// Include hidden packages
        #[arg(long)]
        all: bool,

        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,

        /// Game data directory (overrides config)
        #[arg(long)]
        game_dir: Option<PathBuf>,

        /// User data directory (overrides config)
        #[arg(long)]
        user_dir: Option<PathBuf>,
    },

    /// Show one package and its search path
    Info {
        /// Package name
        name: String,

        /// Game data directory (overrides config)
        #[arg(long)]
        game_dir: Option<PathBuf>,

        /// User data directory (overrides config)
        #[arg(long)]
        user_dir: Option<PathBuf>,
    },
}

/// Run a packages subcommand.
pub fn run(command: PackagesCommands) -> Result<(), CliError> {
    match command {
        PackagesCommands::List {
            all,
            json,
            game_dir,
            user_dir,
        } => run_list(all, json, game_dir, user_dir),
        PackagesCommands::Info {
            name,
            game_dir,
            user_dir,
        } => run_info(&name, game_dir, user_dir),
    }
}

fn run_list(
    all: bool,
    json: bool,
    game_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let manager = build_manager(game_dir, user_dir)?;
    let packages: Vec<_> = manager
        .packages()
        .filter(|package| all || !package.hidden)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    if packages.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    for package in packages {
        if package.description.is_empty() {
            println!("{}", package.name);
        } else {
            println!("{}  {}", package.name, package.description);
        }
    }

    Ok(())
}

fn run_info(
    name: &str,
    game_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut manager = build_manager(game_dir, user_dir)?;
    manager.set_current_package(name)?;

    let package = manager
        .package(name)
        .ok_or_else(|| CliError::NotFound(format!("package '{}'", name)))?;

    println!("Name:         {}", package.name);
    println!("Description:  {}", package.description);
    println!("Hidden:       {}", package.hidden);
    println!("Dependencies: {}", package.dependencies.join(", "));
    println!("Game data:    {}", package.game_data_dir.display());
    println!("User data:    {}", package.user_data_dir.display());
    println!();
    println!("Search path:");
    for entry in manager.search_path() {
        println!("  {}", entry.package);
        println!("    user: {}", entry.user_dir.display());
        println!("    game: {}", entry.game_dir.display());
    }

    Ok(())
}
