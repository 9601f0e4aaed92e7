//! Forward resolution: logical resource name to file on disk.

use std::path::{Path, PathBuf};

use super::ResourceCategory;
use crate::search::SearchPath;

/// Find the first existing file for a logical resource name.
///
/// Walks the search path in precedence order; within each entry the user
/// directory is probed before the game directory, so user overrides shadow
/// shipped content of the same package. Within a directory the name is
/// tried as given first (names that already carry an extension resolve
/// exactly), then with each candidate extension appended: the category's
/// defaults followed by `extra_extensions`.
///
/// Returns `None` when the whole path is exhausted. Callers substitute a
/// built-in default or surface a user-visible message; a missing resource
/// is never a crash.
pub fn find_resource(
    search_path: &SearchPath,
    category: ResourceCategory,
    name: &str,
    extra_extensions: &[&str],
) -> Option<PathBuf> {
    let mut candidates: Vec<&str> = Vec::with_capacity(
        category.default_extensions().len() + extra_extensions.len(),
    );
    candidates.extend(category.default_extensions());
    candidates.extend(extra_extensions);
    find_resource_with_extensions(search_path, category, name, &candidates)
}

/// Like [`find_resource`], but with an explicit candidate extension list
/// replacing the category defaults.
///
/// Used where the caller controls precedence between extensions, e.g. a
/// pixmap lookup that prefers the `.settings` metadata sidecar over the
/// image itself.
pub fn find_resource_with_extensions(
    search_path: &SearchPath,
    category: ResourceCategory,
    name: &str,
    extensions: &[&str],
) -> Option<PathBuf> {
    for entry in search_path {
        for dir in [&entry.user_dir, &entry.game_dir] {
            let base = dir.join(category.subdir());
            if let Some(hit) = probe(&base, name, extensions) {
                return Some(hit);
            }
        }
    }
    None
}

/// Probe one category directory for a name.
fn probe(base: &Path, name: &str, extensions: &[&str]) -> Option<PathBuf> {
    if Path::new(name).extension().is_some() {
        let direct = base.join(name);
        if direct.is_file() {
            return Some(direct);
        }
    }

    for extension in extensions {
        let candidate = base.join(format!("{}.{}", name, extension));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}
