//! Environment-driven configuration for [`Output`](crate::Output).
//!
//! The environment is read once, when an output is constructed, into an
//! [`OutputConfig`] snapshot. Building the snapshot from an arbitrary lookup
//! keeps construction testable without touching the process environment.

use crate::Theme;

/// Theme name, matched case-insensitively against the built-in themes.
pub const ENV_THEME: &str = "CLI_THEME";
/// Prefix override; an empty value hides the prefix.
pub const ENV_PREFIX: &str = "CLI_PREFIX";
/// Presence (any value) permanently disables color. See <https://no-color.org/>.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Prefix glyph used when `CLI_PREFIX` is not set.
pub const DEFAULT_PREFIX: &str = "»";

/// Snapshot of the environment signals an output is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Raw value of `CLI_THEME`, if set.
    pub theme: Option<String>,
    /// Raw value of `CLI_PREFIX`, if set (possibly empty).
    pub prefix: Option<String>,
    /// Whether `NO_COLOR` was present.
    pub no_color: bool,
}

impl OutputConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned());
        Self::from_lookup(var)
    }

    /// Build a snapshot from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            theme: lookup(ENV_THEME),
            prefix: lookup(ENV_PREFIX),
            no_color: lookup(ENV_NO_COLOR).is_some(),
        }
    }

    /// The theme named by `CLI_THEME`, or the Default theme when the variable
    /// is unset, empty, or names no built-in theme.
    pub fn resolve_theme(&self) -> Theme {
        match self.theme.as_deref() {
            Some(name) if !name.is_empty() => Theme::by_name(name).unwrap_or_else(|| {
                log::debug!("{ENV_THEME}={name:?} matches no built-in theme, using Default");
                Theme::default()
            }),
            _ => Theme::default(),
        }
    }

    /// The prefix to render, or `None` when `CLI_PREFIX` is set but empty.
    pub fn resolve_prefix(&self) -> Option<String> {
        match self.prefix.as_deref() {
            None => Some(DEFAULT_PREFIX.to_string()),
            Some("") => None,
            Some(prefix) => Some(prefix.to_string()),
        }
    }
}
