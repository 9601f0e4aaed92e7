//! Package metadata and discovery.
//!
//! A *package* is a named, self-contained bundle of game data with declared
//! dependencies on other packages. Each package exists in up to two places on
//! disk: a read-only shipped tree under the game data directory and a
//! writable override tree under the user data directory.
//!
//! The module consists of:
//!
//! - [`PackageInfo`]: immutable package metadata (name, description, hidden
//!   flag, ordered dependency list, the two data directories)
//! - Descriptor loading: parses the `package.ini` file that marks a
//!   directory as a package
//! - [`PackageRegistry`]: all packages discovered by one scan pass over the
//!   shipped and user package roots

mod descriptor;
mod info;
mod registry;

pub use descriptor::{load_descriptor, Descriptor, DescriptorError, DESCRIPTOR_FILE};
pub use info::PackageInfo;
pub use registry::{PackageRegistry, PACKAGES_SUBDIR};
