//! CLI subcommands.

pub mod config;
pub mod packages;
pub mod resolve;

use std::path::PathBuf;

use packlayer::{ConfigFile, PackageManager};
use tracing::debug;

use crate::error::CliError;

/// Build a package manager from CLI overrides and the configuration file.
///
/// The game data directory must come from `--game-dir` or the config file;
/// there is no sensible guess. The user data directory falls back to the
/// platform default.
pub fn build_manager(
    game_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
) -> Result<PackageManager, CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    let game_dir = game_dir
        .or_else(|| config.paths.game_data_dir.clone())
        .ok_or_else(|| {
            CliError::Config(
                "No game data directory. Use --game-dir or set game_data_dir in the \
                 config.ini [paths] section."
                    .to_string(),
            )
        })?;
    let user_dir = user_dir.unwrap_or_else(|| config.user_data_dir());

    debug!(
        "resolving against game data {} and user data {}",
        game_dir.display(),
        user_dir.display()
    );

    Ok(PackageManager::with_default(
        game_dir,
        user_dir,
        config.default_package(),
    ))
}
