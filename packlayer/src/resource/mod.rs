//! Resource lookup over a search path.
//!
//! This module is the single source of truth for resource naming: which
//! subdirectory each category lives in, which file extensions it uses, and
//! how logical names map to files. Forward resolution
//! ([`find_resource`]) walks a [`crate::SearchPath`] and returns the first
//! existing file; inverse resolution ([`relativize`]) strips a known
//! directory prefix from an absolute path so references stay portable
//! across installs.

mod category;
mod locator;
mod relative;

pub use category::{ResourceCategory, UnknownCategory};
pub use locator::{find_resource, find_resource_with_extensions};
pub use relative::{relativize, RelativizeError};
