//! Inverse resolution: absolute path back to a package-relative reference.
//!
//! Save data must not embed absolute paths; they break the moment the game
//! or the user data moves. Relativization recovers the logical,
//! package-relative form of a resolved path by stripping the matching
//! search-path directory prefix. It is purely lexical: the same canonical
//! search path used for forward resolution is consulted, and nothing is
//! read from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ResourceCategory;
use crate::search::SearchPath;

/// Error relativizing a path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelativizeError {
    /// No search path directory is a prefix of the given path: it does not
    /// belong to any known package's resource tree. Callers must treat this
    /// as a definite failure, not truncate or guess.
    #[error("path {path} does not belong to any known package's {category} tree")]
    NotInSearchPath {
        path: PathBuf,
        category: ResourceCategory,
    },
}

/// Strip the search-path prefix from an absolute resolved path.
///
/// Walks entries in search-path order, user directory before game
/// directory, and returns the remainder after the first matching
/// `<dir>/<category subdir>/` prefix. The first-match rule keeps the
/// tie-break consistent with override precedence when several directories
/// could match.
pub fn relativize(
    search_path: &SearchPath,
    absolute: &Path,
    category: ResourceCategory,
) -> Result<PathBuf, RelativizeError> {
    for entry in search_path {
        for dir in [&entry.user_dir, &entry.game_dir] {
            let root = dir.join(category.subdir());
            if let Ok(relative) = absolute.strip_prefix(&root) {
                return Ok(relative.to_path_buf());
            }
        }
    }

    Err(RelativizeError::NotInSearchPath {
        path: absolute.to_path_buf(),
        category,
    })
}
