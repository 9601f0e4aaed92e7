//! Resource resolution CLI command.

use std::path::PathBuf;

use clap::Args;

use packlayer::ResourceCategory;

use crate::commands::build_manager;
use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Resource category (pixmap, sound, music, script)
    pub category: String,

    /// Logical resource name, e.g. "tiles/grass" or "tiles/grass.png"
    pub name: String,

    /// Resolve within this package's dependency closure instead of the
    /// default package
    #[arg(long)]
    pub package: Option<String>,

    /// Also print the package-relative form of the resolved path
    #[arg(long)]
    pub relative: bool,

    /// Game data directory (overrides config)
    #[arg(long)]
    pub game_dir: Option<PathBuf>,

    /// User data directory (overrides config)
    #[arg(long)]
    pub user_dir: Option<PathBuf>,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let category: ResourceCategory = args
        .category
        .parse()
        .map_err(|err: packlayer::UnknownCategory| CliError::Config(err.to_string()))?;

    let mut manager = build_manager(args.game_dir, args.user_dir)?;
    if let Some(package) = &args.package {
        manager.set_current_package(package)?;
    }

    let path = manager
        .resource_path(category, &args.name, &[])
        .ok_or_else(|| CliError::NotFound(format!("{} '{}'", category, args.name)))?;

    println!("{}", path.display());

    if args.relative {
        let relative = manager
            .relative_resource_path(category, &path)
            .map_err(|err| CliError::Config(err.to_string()))?;
        println!("{}", relative.display());
    }

    Ok(())
}
