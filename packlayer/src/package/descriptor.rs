//! Package descriptor loading.
//!
//! A directory is a package when it carries a `package.ini` descriptor:
//!
//! ```ini
//! [package]
//! name = forest
//! description = Forest tileset and levels
//! hidden = false
//! dependencies = base, extras
//! ```
//!
//! Every key is optional; `name` defaults to the directory name when absent.
//! A directory without a readable descriptor is simply not a package, which
//! the registry scan treats as normal rather than as an error.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::PackageInfo;

/// Descriptor filename looked for in every candidate package directory.
pub const DESCRIPTOR_FILE: &str = "package.ini";

/// Errors that can occur while loading a package descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The directory has no descriptor file; it is not a package.
    #[error("no package descriptor in {0}")]
    NotFound(PathBuf),

    /// The descriptor file exists but could not be read or parsed.
    #[error("malformed package descriptor {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    /// The descriptor file parses but lacks the `[package]` section.
    #[error("package descriptor {0} has no [package] section")]
    MissingSection(PathBuf),
}

/// Parsed descriptor contents, before the registry attaches directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    /// Declared package name; the directory name is used when absent.
    pub name: Option<String>,
    pub description: String,
    pub hidden: bool,
    /// Dependency names in declared order.
    pub dependencies: Vec<String>,
}

impl Descriptor {
    /// Attach directories and resolve the name fallback, producing the
    /// registry record.
    pub fn into_info(
        self,
        fallback_name: &str,
        game_data_dir: PathBuf,
        user_data_dir: PathBuf,
    ) -> PackageInfo {
        PackageInfo {
            name: self.name.unwrap_or_else(|| fallback_name.to_string()),
            description: self.description,
            hidden: self.hidden,
            dependencies: self.dependencies,
            game_data_dir,
            user_data_dir,
        }
    }
}

/// Load the descriptor from a package directory.
///
/// Returns [`DescriptorError::NotFound`] when the directory has no
/// `package.ini`; callers scanning for packages treat that case as "not a
/// package" rather than as a failure.
pub fn load_descriptor(dir: &Path) -> Result<Descriptor, DescriptorError> {
    let path = dir.join(DESCRIPTOR_FILE);
    if !path.is_file() {
        return Err(DescriptorError::NotFound(dir.to_path_buf()));
    }

    let ini = Ini::load_from_file(&path).map_err(|source| DescriptorError::Malformed {
        path: path.clone(),
        source,
    })?;

    let section = ini
        .section(Some("package"))
        .ok_or_else(|| DescriptorError::MissingSection(path.clone()))?;

    Ok(Descriptor {
        name: section.get("name").map(|s| s.trim().to_string()),
        description: section.get("description").unwrap_or("").trim().to_string(),
        hidden: section.get("hidden").map(parse_flag).unwrap_or(false),
        dependencies: section
            .get("dependencies")
            .map(parse_dependency_list)
            .unwrap_or_default(),
    })
}

/// Parse a boolean descriptor value. Unrecognized values read as false.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    )
}

/// Parse the comma-separated, ordered dependency list.
fn parse_dependency_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
