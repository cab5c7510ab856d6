//! Typed error variants for the cliout-style crate.
//!
//! Rendering never fails; these errors only come out of the strict parsing
//! entry points (`Color::from_str`, theme files) so callers reading user input
//! can report what was wrong instead of silently falling back.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing colors or loading theme files.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The string is not a 6-digit hex color, a known color name, or `ansi(N)`.
    #[error("invalid color '{0}': expected #RRGGBB, RRGGBB, ansi(N), or a color name")]
    InvalidColor(String),

    /// The theme file could not be read.
    #[error("failed to read theme file '{}': {source}", path.display())]
    Io {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid TOML or has a bad field value.
    #[error("invalid theme definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The theme could not be encoded as TOML.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
}
