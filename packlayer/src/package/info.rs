//! Core package metadata type.
//!
//! [`PackageInfo`] is the registry's record for one discovered package. It is
//! immutable after the scan; a rescan replaces records wholesale rather than
//! mutating them in place.

use std::path::PathBuf;

use serde::Serialize;

/// Metadata for one installed package.
///
/// The `name` is the registry key and the identifier other packages use in
/// their dependency lists. The two directories are the package's asset
/// roots: `game_data_dir` holds shipped, read-only content and
/// `user_data_dir` holds user overrides and saved data. Neither directory is
/// required to exist; resource lookups simply skip missing ones.
///
/// # Example
///
/// ```
/// use packlayer::PackageInfo;
///
/// let pkg = PackageInfo::new("forest", "/game/packages/forest", "/user/packages/forest")
///     .with_description("Forest tileset and levels")
///     .with_dependencies(vec!["base".to_string()]);
///
/// assert_eq!(pkg.name, "forest");
/// assert!(!pkg.hidden);
/// assert_eq!(pkg.dependencies, ["base"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Unique package name, the registry key.
    pub name: String,

    /// Display text; has no effect on resolution.
    pub description: String,

    /// Hidden packages are omitted from user-facing listings but still
    /// participate in dependency traversal.
    pub hidden: bool,

    /// Ordered dependency names. Order declares override priority; names
    /// not present in the registry are tolerated and skipped at resolution
    /// time, as are dependency cycles.
    pub dependencies: Vec<String>,

    /// Read-only root containing this package's shipped assets.
    pub game_data_dir: PathBuf,

    /// Writable root containing user overrides and saves. Created on
    /// demand; need not pre-exist.
    pub user_data_dir: PathBuf,
}

impl PackageInfo {
    /// Create a package record with empty description, no dependencies and
    /// the hidden flag cleared.
    pub fn new(
        name: impl Into<String>,
        game_data_dir: impl Into<PathBuf>,
        user_data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            hidden: false,
            dependencies: Vec::new(),
            game_data_dir: game_data_dir.into(),
            user_data_dir: user_data_dir.into(),
        }
    }

    /// Set the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the hidden flag (builder pattern).
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the dependency list (builder pattern).
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info_new_defaults() {
        let pkg = PackageInfo::new("base", "/game/packages/base", "/user/packages/base");

        assert_eq!(pkg.name, "base");
        assert_eq!(pkg.description, "");
        assert!(!pkg.hidden);
        assert!(pkg.dependencies.is_empty());
        assert_eq!(pkg.game_data_dir, PathBuf::from("/game/packages/base"));
        assert_eq!(pkg.user_data_dir, PathBuf::from("/user/packages/base"));
    }

    #[test]
    fn test_package_info_builders() {
        let pkg = PackageInfo::new("mod", "/g", "/u")
            .with_description("A mod")
            .with_hidden(true)
            .with_dependencies(vec!["base".to_string(), "extras".to_string()]);

        assert_eq!(pkg.description, "A mod");
        assert!(pkg.hidden);
        assert_eq!(pkg.dependencies, ["base", "extras"]);
    }

    #[test]
    fn test_package_info_dependency_order_preserved() {
        let pkg = PackageInfo::new("mod", "/g", "/u")
            .with_dependencies(vec!["z".to_string(), "a".to_string(), "m".to_string()]);

        assert_eq!(pkg.dependencies, ["z", "a", "m"]);
    }
}
