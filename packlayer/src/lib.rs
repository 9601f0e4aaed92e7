//! PackLayer - layered game data packages
//!
//! This library resolves game assets and scripts through a layered,
//! dependency-ordered package overlay. Installed packages declare ordered
//! dependencies on other packages; one package is selected as *current*, and
//! resource lookups walk the current package, its transitive dependencies,
//! and both a read-only game-data tree and a writable user-data tree with
//! well-defined precedence.
//!
//! # Architecture
//!
//! ```text
//! PackageRegistry ──► build_search_path ──► SearchPath ──► find_resource
//!  (one scan pass)     (dependency DFS)    (cached by      relativize
//!                                           PackageManager)
//! ```
//!
//! [`PackageManager`] ties the pieces together: it owns the registry, the
//! current package selection, and the cached search path, and exposes the
//! per-category convenience queries a game engine calls into.

pub mod config;
pub mod manager;
pub mod package;
pub mod resource;
pub mod search;

pub use config::{config_file_path, ConfigError, ConfigFile};
pub use manager::{ManagerError, PackageManager, DEFAULT_PACKAGE};
pub use package::{DescriptorError, PackageInfo, PackageRegistry};
pub use resource::{
    find_resource, relativize, RelativizeError, ResourceCategory, UnknownCategory,
};
pub use search::{build_search_path, SearchEntry, SearchPath};

/// Crate version string, as reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
