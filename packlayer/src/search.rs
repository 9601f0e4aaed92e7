//! Dependency-ordered search path construction.
//!
//! The *search path* is the ordered list of `(user_dir, game_dir)` pairs a
//! resource lookup walks, one entry per package, most-specific-first. It is
//! derived state: [`build_search_path`] is a pure function from a registry
//! and a starting package name, and the manager recomputes it whenever the
//! current package changes or the registry is rescanned.
//!
//! Ordering follows pre-order depth-first traversal of the dependency
//! graph: a package's own entry is appended *before* its dependencies are
//! visited, so its files always shadow theirs. A visited set keyed by name
//! makes diamond dependencies and accidental cycles safe; unknown dependency
//! names contribute nothing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::package::PackageRegistry;

/// One search path entry: a package's two asset roots.
///
/// Within an entry the user directory has precedence over the game
/// directory, giving user overrides priority over shipped content of the
/// same package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    /// Name of the package this entry belongs to.
    pub package: String,

    /// Writable user override root.
    pub user_dir: PathBuf,

    /// Read-only shipped asset root.
    pub game_dir: PathBuf,
}

/// Ordered, duplicate-free list of [`SearchEntry`] values.
///
/// Invariants: no package name appears twice, and the starting package's
/// entry (when it exists in the registry) is always first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<SearchEntry>,
}

impl SearchPath {
    /// The entries in precedence order.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Iterate entries in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// User directory of the entry at `pos`, or `None` past the end.
    ///
    /// Positional access supports callers that enumerate the path rather
    /// than resolve against it.
    pub fn user_dir(&self, pos: usize) -> Option<&Path> {
        self.entries.get(pos).map(|entry| entry.user_dir.as_path())
    }

    /// Game directory of the entry at `pos`, or `None` past the end.
    pub fn game_dir(&self, pos: usize) -> Option<&Path> {
        self.entries.get(pos).map(|entry| entry.game_dir.as_path())
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a SearchEntry;
    type IntoIter = std::slice::Iter<'a, SearchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build the search path for `start` over `registry`.
///
/// Never fails: cycles are broken by the visited set, duplicate
/// dependencies collapse to their first visit, and names missing from the
/// registry are skipped. The result may therefore be shorter than the
/// dependency lists suggest, down to empty when `start` itself is unknown.
pub fn build_search_path(registry: &PackageRegistry, start: &str) -> SearchPath {
    let mut visited = HashSet::new();
    let mut entries = Vec::new();
    visit(registry, start, &mut visited, &mut entries);
    SearchPath { entries }
}

fn visit(
    registry: &PackageRegistry,
    name: &str,
    visited: &mut HashSet<String>,
    entries: &mut Vec<SearchEntry>,
) {
    if !visited.insert(name.to_string()) {
        return;
    }

    let Some(package) = registry.get(name) else {
        debug!("dependency '{}' is not in the registry, skipping", name);
        return;
    };

    // The package itself outranks everything it depends on.
    entries.push(SearchEntry {
        package: package.name.clone(),
        user_dir: package.user_data_dir.clone(),
        game_dir: package.game_data_dir.clone(),
    });

    for dependency in &package.dependencies {
        visit(registry, dependency, visited, entries);
    }
}
