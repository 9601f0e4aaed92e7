//! Configuration file handling.
//!
//! PackLayer reads an INI configuration file from the platform config
//! directory (`config.ini` under `dirs::config_dir()/packlayer`):
//!
//! ```ini
//! [paths]
//! game_data_dir = /usr/share/mygame
//! user_data_dir = /home/player/.local/share/packlayer
//!
//! [packages]
//! default_package = base
//! ```
//!
//! `game_data_dir` has no portable default and stays unset until
//! configured; front ends report a configuration error rather than guess.
//! `user_data_dir` defaults to a `packlayer` directory under the platform
//! data directory.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::manager::DEFAULT_PACKAGE;

/// Errors loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Read(#[from] ini::Error),

    #[error("failed to write configuration: {0}")]
    Write(#[from] std::io::Error),
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("packlayer")
        .join("config.ini")
}

/// Default user data directory when none is configured.
pub fn default_user_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("packlayer")
}

/// Loaded configuration settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub paths: PathsConfig,
    pub packages: PackagesConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// Root of the read-only shipped game data tree.
    pub game_data_dir: Option<PathBuf>,

    /// Root of the writable user data tree.
    pub user_data_dir: Option<PathBuf>,
}

/// `[packages]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagesConfig {
    /// Package selected when none has been chosen explicitly.
    pub default_package: Option<String>,
}

impl ConfigFile {
    /// Load the configuration from the default location. A missing file
    /// yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("paths")) {
            config.paths.game_data_dir = section.get("game_data_dir").map(PathBuf::from);
            config.paths.user_data_dir = section.get("user_data_dir").map(PathBuf::from);
        }
        if let Some(section) = ini.section(Some("packages")) {
            config.packages.default_package = section.get("default_package").map(str::to_string);
        }

        Ok(config)
    }

    /// Save the configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        {
            let mut section = ini.with_section(Some("paths"));
            if let Some(dir) = &self.paths.game_data_dir {
                section.set("game_data_dir", dir.display().to_string());
            }
            if let Some(dir) = &self.paths.user_data_dir {
                section.set("user_data_dir", dir.display().to_string());
            }
        }
        if let Some(default) = &self.packages.default_package {
            ini.with_section(Some("packages"))
                .set("default_package", default.clone());
        }

        ini.write_to_file(path)?;
        Ok(())
    }

    /// Effective user data directory: the configured one or the platform
    /// default.
    pub fn user_data_dir(&self) -> PathBuf {
        self.paths
            .user_data_dir
            .clone()
            .unwrap_or_else(default_user_data_dir)
    }

    /// Effective default package name.
    pub fn default_package(&self) -> &str {
        self.packages
            .default_package
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE)
    }
}
