//! Package discovery over the shipped and user data trees.
//!
//! Packages live under a `packages/` subdirectory of both data roots:
//! `<game_data_dir>/packages/<name>/` for shipped content and
//! `<user_data_dir>/packages/<name>/` for user overrides and user-installed
//! packages. One scan pass over both trees builds the whole registry; a
//! rescan replaces it atomically from the caller's point of view.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use super::descriptor::{load_descriptor, DescriptorError};
use super::PackageInfo;

/// Subdirectory of each data root that holds package directories.
pub const PACKAGES_SUBDIR: &str = "packages";

/// All packages discovered by the last scan, keyed by name.
///
/// Listing order is stable: packages are kept sorted by name.
#[derive(Debug, Clone, Default)]
pub struct PackageRegistry {
    packages: BTreeMap<String, PackageInfo>,
}

impl PackageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan both data roots for packages.
    ///
    /// Enumerates the immediate subdirectories of `<game_data_dir>/packages`
    /// and `<user_data_dir>/packages` that carry a package descriptor.
    /// Shipped descriptors are authoritative: the user tree only contributes
    /// metadata for names absent from the game tree (user-installed
    /// packages). Directories without a descriptor are skipped silently;
    /// malformed descriptors are skipped with a warning. A missing root
    /// contributes nothing and is not an error.
    pub fn scan(game_data_dir: &Path, user_data_dir: &Path) -> Self {
        let game_root = game_data_dir.join(PACKAGES_SUBDIR);
        let user_root = user_data_dir.join(PACKAGES_SUBDIR);

        let mut packages = BTreeMap::new();
        scan_tree(&game_root, &user_root, &game_root, &mut packages);
        scan_tree(&game_root, &user_root, &user_root, &mut packages);

        debug!("package scan complete: {} package(s)", packages.len());
        Self { packages }
    }

    /// Look up a package by name.
    pub fn get(&self, name: &str) -> Option<&PackageInfo> {
        self.packages.get(name)
    }

    /// Whether a package with this name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// All known packages, including hidden ones, sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &PackageInfo> {
        self.packages.values()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Insert a record directly. Used by tests to build registries without
    /// touching the filesystem.
    pub fn insert(&mut self, info: PackageInfo) {
        self.packages.insert(info.name.clone(), info);
    }
}

/// Scan one `packages/` tree, adding records for names not already present.
fn scan_tree(
    game_root: &Path,
    user_root: &Path,
    scan_root: &Path,
    packages: &mut BTreeMap<String, PackageInfo>,
) {
    let entries = match std::fs::read_dir(scan_root) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    let mut dirs: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    dirs.sort_by_key(|entry| entry.file_name());

    for entry in dirs {
        let dir_name = entry.file_name().to_string_lossy().to_string();

        // Skip hidden folders
        if dir_name.starts_with('.') {
            continue;
        }

        let descriptor = match load_descriptor(&entry.path()) {
            Ok(descriptor) => descriptor,
            Err(DescriptorError::NotFound(_)) => continue,
            Err(err) => {
                warn!("skipping package directory {}: {}", dir_name, err);
                continue;
            }
        };

        let info = descriptor.into_info(
            &dir_name,
            game_root.join(&dir_name),
            user_root.join(&dir_name),
        );

        if packages.contains_key(&info.name) {
            debug!(
                "package '{}' already registered, ignoring {}",
                info.name,
                entry.path().display()
            );
            continue;
        }
        packages.insert(info.name.clone(), info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_package(root: &Path, name: &str, descriptor: &str) {
        let dir = root.join(PACKAGES_SUBDIR).join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(super::super::DESCRIPTOR_FILE), descriptor).unwrap();
    }

    #[test]
    fn test_scan_missing_roots() {
        let registry =
            PackageRegistry::scan(Path::new("/nonexistent/game"), Path::new("/nonexistent/user"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_scan_finds_shipped_packages() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\ndescription = Base game\n");
        create_package(game.path(), "forest", "[package]\ndependencies = base\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 2);
        let base = registry.get("base").unwrap();
        assert_eq!(base.description, "Base game");
        assert_eq!(
            base.game_data_dir,
            game.path().join(PACKAGES_SUBDIR).join("base")
        );
        assert_eq!(
            base.user_data_dir,
            user.path().join(PACKAGES_SUBDIR).join("base")
        );
        assert_eq!(registry.get("forest").unwrap().dependencies, ["base"]);
    }

    #[test]
    fn test_scan_finds_user_installed_packages() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\n");
        create_package(user.path(), "community", "[package]\ndependencies = base\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 2);
        let community = registry.get("community").unwrap();
        assert_eq!(
            community.game_data_dir,
            game.path().join(PACKAGES_SUBDIR).join("community")
        );
        assert_eq!(
            community.user_data_dir,
            user.path().join(PACKAGES_SUBDIR).join("community")
        );
    }

    #[test]
    fn test_scan_shipped_descriptor_wins() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\ndescription = shipped\n");
        create_package(user.path(), "base", "[package]\ndescription = user copy\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("base").unwrap().description, "shipped");
    }

    #[test]
    fn test_scan_skips_directories_without_descriptor() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\n");
        std::fs::create_dir_all(game.path().join(PACKAGES_SUBDIR).join("not_a_package")).unwrap();

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("not_a_package"));
    }

    #[test]
    fn test_scan_skips_malformed_descriptor() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\n");
        create_package(game.path(), "broken", "[package\nname = broken\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_scan_skips_hidden_folders() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "base", "[package]\n");
        create_package(game.path(), ".staging", "[package]\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_scan_records_hidden_flag() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "internal", "[package]\nhidden = true\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        // Hidden packages stay in the registry; only listings filter them.
        assert!(registry.get("internal").unwrap().hidden);
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "zeta", "[package]\n");
        create_package(game.path(), "alpha", "[package]\n");
        create_package(game.path(), "mid", "[package]\n");

        let registry = PackageRegistry::scan(game.path(), user.path());
        let names: Vec<_> = registry.list().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_descriptor_name_overrides_directory_name() {
        let game = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        create_package(game.path(), "forest_v2", "[package]\nname = forest\n");

        let registry = PackageRegistry::scan(game.path(), user.path());

        assert!(registry.contains("forest"));
        assert!(!registry.contains("forest_v2"));
        // Directories still point at the actual folder on disk.
        assert_eq!(
            registry.get("forest").unwrap().game_data_dir,
            game.path().join(PACKAGES_SUBDIR).join("forest_v2")
        );
    }
}
