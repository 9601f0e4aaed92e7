//! Package manager facade.
//!
//! [`PackageManager`] ties registry, search path and resource lookup
//! together: it owns the discovered packages, the current package
//! selection and the cached search path, and exposes the per-category
//! queries a game engine calls into.
//!
//! The manager is an explicitly constructed value. The application's
//! composition root builds one and passes it by reference; there is no
//! process-wide instance. Construction scans immediately, so every manager
//! method operates on a populated registry.
//!
//! Two groups of accessors reflect two kinds of content:
//!
//! - *Inheritable* resources (pixmaps, sounds, music, scripts) resolve
//!   across the whole dependency closure of the current package.
//! - *Per-package* content (levels, worlds, campaigns, savegames,
//!   screenshots, the image cache) belongs to the current package alone
//!   and is never inherited from dependencies.

mod error;

pub use error::ManagerError;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::ConfigFile;
use crate::package::{PackageInfo, PackageRegistry};
use crate::resource::{
    find_resource, find_resource_with_extensions, relativize, RelativizeError, ResourceCategory,
};
use crate::search::{build_search_path, SearchPath};

/// Package selected when the caller has not chosen one.
pub const DEFAULT_PACKAGE: &str = "base";

/// Per-package content subdirectories.
const LEVELS_SUBDIR: &str = "levels";
const WORLDS_SUBDIR: &str = "worlds";
const CAMPAIGNS_SUBDIR: &str = "campaigns";
const SAVEGAMES_SUBDIR: &str = "savegames";
const SCREENSHOTS_SUBDIR: &str = "screenshots";
const IMGCACHE_SUBDIR: &str = "imgcache";

/// User subdirectories created on demand by [`PackageManager::init_user_paths`].
const USER_SUBDIRS: [&str; 6] = [
    LEVELS_SUBDIR,
    WORLDS_SUBDIR,
    CAMPAIGNS_SUBDIR,
    SAVEGAMES_SUBDIR,
    SCREENSHOTS_SUBDIR,
    IMGCACHE_SUBDIR,
];

/// Owns the package registry, the current selection and the cached search
/// path.
#[derive(Debug)]
pub struct PackageManager {
    game_data_dir: PathBuf,
    user_data_dir: PathBuf,
    default_package: String,
    registry: PackageRegistry,
    current: String,
    search_path: SearchPath,
}

impl PackageManager {
    /// Create a manager over the two data roots, scanning immediately and
    /// selecting [`DEFAULT_PACKAGE`].
    pub fn new(game_data_dir: impl Into<PathBuf>, user_data_dir: impl Into<PathBuf>) -> Self {
        Self::with_default(game_data_dir, user_data_dir, DEFAULT_PACKAGE)
    }

    /// Create a manager with an explicit default package, for engines
    /// whose base package is named differently.
    pub fn with_default(
        game_data_dir: impl Into<PathBuf>,
        user_data_dir: impl Into<PathBuf>,
        default_package: impl Into<String>,
    ) -> Self {
        let default_package = default_package.into();
        let mut manager = Self {
            game_data_dir: game_data_dir.into(),
            user_data_dir: user_data_dir.into(),
            current: default_package.clone(),
            default_package,
            registry: PackageRegistry::new(),
            search_path: SearchPath::default(),
        };
        manager.rescan();
        manager
    }

    /// Create a manager from loaded configuration.
    ///
    /// Fails with [`ManagerError::Config`] when no game data directory is
    /// configured; the user data directory falls back to the platform
    /// default.
    pub fn from_config(config: &ConfigFile) -> Result<Self, ManagerError> {
        let game_data_dir = config.paths.game_data_dir.clone().ok_or_else(|| {
            ManagerError::Config(
                "game_data_dir is not set; add it to the config.ini [paths] section".to_string(),
            )
        })?;

        Ok(Self::with_default(
            game_data_dir,
            config.user_data_dir(),
            config.default_package(),
        ))
    }

    /// Rescan the data roots, replacing the registry and rebuilding the
    /// search path. The current selection is kept when it still names a
    /// known package and falls back to the default package otherwise.
    pub fn rescan(&mut self) {
        self.registry = PackageRegistry::scan(&self.game_data_dir, &self.user_data_dir);
        self.rebuild_search_path();
    }

    /// The discovered packages.
    pub fn registry(&self) -> &PackageRegistry {
        &self.registry
    }

    /// All known packages, including hidden ones, sorted by name.
    pub fn packages(&self) -> impl Iterator<Item = &PackageInfo> {
        self.registry.list()
    }

    /// Look up one package by name.
    pub fn package(&self, name: &str) -> Option<&PackageInfo> {
        self.registry.get(name)
    }

    /// Name of the current package.
    ///
    /// This is the selected name as given; when it no longer matches a
    /// known package, resolution transparently falls back to the default
    /// package.
    pub fn current_package(&self) -> &str {
        &self.current
    }

    /// Select the current package and recompute the search path.
    ///
    /// Unknown names are an error and leave the selection unchanged.
    pub fn set_current_package(&mut self, name: &str) -> Result<(), ManagerError> {
        if !self.registry.contains(name) {
            return Err(ManagerError::UnknownPackage(name.to_string()));
        }
        self.current = name.to_string();
        self.rebuild_search_path();
        info!("current package set to '{}'", self.current);
        Ok(())
    }

    /// The cached search path for the current selection.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// User directory at `pos` in the search path, `None` past the end.
    pub fn user_data_path(&self, pos: usize) -> Option<&Path> {
        self.search_path.user_dir(pos)
    }

    /// Game directory at `pos` in the search path, `None` past the end.
    pub fn game_data_path(&self, pos: usize) -> Option<&Path> {
        self.search_path.game_dir(pos)
    }

    /* Inheritable resources: resolved over the whole dependency closure. */

    /// Resolve a resource of any category with extra extension candidates.
    pub fn resource_path(
        &self,
        category: ResourceCategory,
        name: &str,
        extra_extensions: &[&str],
    ) -> Option<PathBuf> {
        find_resource(&self.search_path, category, name, extra_extensions)
    }

    /// Resolve a pixmap, preferring its `.settings` metadata sidecar over
    /// the image itself.
    pub fn pixmap_path(&self, name: &str) -> Option<PathBuf> {
        find_resource_with_extensions(
            &self.search_path,
            ResourceCategory::Pixmap,
            name,
            &["settings", "png"],
        )
    }

    /// Resolve a pixmap image, ignoring `.settings` sidecars.
    pub fn pixmap_image_path(&self, name: &str) -> Option<PathBuf> {
        find_resource(&self.search_path, ResourceCategory::Pixmap, name, &[])
    }

    /// Resolve a sound effect.
    pub fn sound_path(&self, name: &str) -> Option<PathBuf> {
        find_resource(&self.search_path, ResourceCategory::Sound, name, &[])
    }

    /// Resolve a music track.
    pub fn music_path(&self, name: &str) -> Option<PathBuf> {
        find_resource(&self.search_path, ResourceCategory::Music, name, &[])
    }

    /// Resolve a script within the dependency closure of `package`.
    ///
    /// Scripts name the package they belong to, which need not be the
    /// current one; the closure is computed on the fly in that case. An
    /// unknown package falls back to the current search path.
    pub fn script_path(&self, package: &str, script: &str) -> Option<PathBuf> {
        if self.registry.contains(package) {
            let path = build_search_path(&self.registry, package);
            find_resource(&path, ResourceCategory::Script, script, &[])
        } else {
            warn!(
                "script lookup for unknown package '{}', using current search path",
                package
            );
            find_resource(&self.search_path, ResourceCategory::Script, script, &[])
        }
    }

    /* Inverse resolution, for persisting portable references. */

    /// Strip the search-path prefix from a resolved path of any category.
    pub fn relative_resource_path(
        &self,
        category: ResourceCategory,
        absolute: &Path,
    ) -> Result<PathBuf, RelativizeError> {
        relativize(&self.search_path, absolute, category)
    }

    /// Package-relative form of a resolved pixmap path.
    pub fn relative_pixmap_path(&self, absolute: &Path) -> Result<PathBuf, RelativizeError> {
        self.relative_resource_path(ResourceCategory::Pixmap, absolute)
    }

    /// Package-relative form of a resolved sound path.
    pub fn relative_sound_path(&self, absolute: &Path) -> Result<PathBuf, RelativizeError> {
        self.relative_resource_path(ResourceCategory::Sound, absolute)
    }

    /// Package-relative form of a resolved music path.
    pub fn relative_music_path(&self, absolute: &Path) -> Result<PathBuf, RelativizeError> {
        self.relative_resource_path(ResourceCategory::Music, absolute)
    }

    /* Per-package content: current package only, never inherited. */

    /// Writable levels directory of the current package.
    pub fn user_level_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(LEVELS_SUBDIR)
    }

    /// Shipped levels directory of the current package.
    pub fn game_level_dir(&self) -> Option<PathBuf> {
        self.current_game_subdir(LEVELS_SUBDIR)
    }

    /// Writable worlds directory of the current package.
    pub fn user_world_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(WORLDS_SUBDIR)
    }

    /// Shipped worlds directory of the current package.
    pub fn game_world_dir(&self) -> Option<PathBuf> {
        self.current_game_subdir(WORLDS_SUBDIR)
    }

    /// Writable campaigns directory of the current package.
    pub fn user_campaign_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(CAMPAIGNS_SUBDIR)
    }

    /// Shipped campaigns directory of the current package.
    pub fn game_campaign_dir(&self) -> Option<PathBuf> {
        self.current_game_subdir(CAMPAIGNS_SUBDIR)
    }

    /// Savegame directory of the current package. Saves are user data
    /// only; packages never ship them.
    pub fn user_savegame_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(SAVEGAMES_SUBDIR)
    }

    /// Screenshot directory of the current package.
    pub fn user_screenshot_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(SCREENSHOTS_SUBDIR)
    }

    /// Image cache directory of the current package.
    pub fn user_imgcache_dir(&self) -> Option<PathBuf> {
        self.current_user_subdir(IMGCACHE_SUBDIR)
    }

    /// Create the current package's writable tree.
    ///
    /// The user data tree is created lazily; nothing else assumes it
    /// exists. A manager with an empty registry has nowhere to create and
    /// succeeds trivially.
    pub fn init_user_paths(&self) -> Result<(), ManagerError> {
        let Some(package) = self.current_info() else {
            return Ok(());
        };
        for subdir in USER_SUBDIRS {
            std::fs::create_dir_all(package.user_data_dir.join(subdir))?;
        }
        Ok(())
    }

    /// The package resolution starts from: the current one when known,
    /// the default package otherwise.
    fn current_info(&self) -> Option<&PackageInfo> {
        self.registry
            .get(&self.current)
            .or_else(|| self.registry.get(&self.default_package))
    }

    fn current_user_subdir(&self, subdir: &str) -> Option<PathBuf> {
        self.current_info()
            .map(|package| package.user_data_dir.join(subdir))
    }

    fn current_game_subdir(&self, subdir: &str) -> Option<PathBuf> {
        self.current_info()
            .map(|package| package.game_data_dir.join(subdir))
    }

    fn rebuild_search_path(&mut self) {
        let start = if self.registry.contains(&self.current) {
            self.current.as_str()
        } else {
            if self.current != self.default_package {
                warn!(
                    "current package '{}' is not in the registry, falling back to '{}'",
                    self.current, self.default_package
                );
            }
            self.default_package.as_str()
        };
        self.search_path = build_search_path(&self.registry, start);
    }
}
