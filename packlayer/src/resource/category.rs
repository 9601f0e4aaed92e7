//! Resource categories shared across the dependency closure.
//!
//! These are the categories a package inherits from its dependencies:
//! pixmaps, sounds, music and scripts. Per-package content such as levels,
//! worlds and campaigns is not a category here; the manager resolves those
//! against the current package only.

use std::fmt;

use thiserror::Error;

/// A resource category: fixes the package subdirectory and the default
/// extension candidates for lookups.
///
/// # Example
///
/// ```
/// use packlayer::ResourceCategory;
///
/// assert_eq!(ResourceCategory::Pixmap.subdir(), "pixmaps");
/// assert_eq!(ResourceCategory::Sound.default_extensions(), ["ogg", "wav"]);
/// assert_eq!("music".parse::<ResourceCategory>().unwrap(), ResourceCategory::Music);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// Images, plus their optional `.settings` metadata sidecars.
    Pixmap,
    /// Sound effects.
    Sound,
    /// Background music.
    Music,
    /// Scripts handed to the scripting runtime.
    Script,
}

impl ResourceCategory {
    /// Package subdirectory this category's files live in.
    pub fn subdir(&self) -> &'static str {
        match self {
            ResourceCategory::Pixmap => "pixmaps",
            ResourceCategory::Sound => "sounds",
            ResourceCategory::Music => "music",
            ResourceCategory::Script => "scripting",
        }
    }

    /// Default extension candidates, tried in order.
    pub fn default_extensions(&self) -> &'static [&'static str] {
        match self {
            ResourceCategory::Pixmap => &["png"],
            ResourceCategory::Sound => &["ogg", "wav"],
            ResourceCategory::Music => &["ogg"],
            ResourceCategory::Script => &["lua"],
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceCategory::Pixmap => "pixmap",
            ResourceCategory::Sound => "sound",
            ResourceCategory::Music => "music",
            ResourceCategory::Script => "script",
        };
        write!(f, "{}", name)
    }
}

/// Error parsing a category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resource category '{0}', expected pixmap, sound, music or script")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pixmap" => Ok(ResourceCategory::Pixmap),
            "sound" => Ok(ResourceCategory::Sound),
            "music" => Ok(ResourceCategory::Music),
            "script" => Ok(ResourceCategory::Script),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
