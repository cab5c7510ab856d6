//! Message severity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a message, and the threshold an [`Output`](crate::Output)
/// filters against.
///
/// Levels are totally ordered: `TRACE < DEBUG < INFO < WARN < ERROR < SILENT`.
/// `SILENT` is only meaningful as a threshold; it suppresses every message.
///
/// The raw value is kept open so that a level built with [`Level::from_raw`]
/// outside the defined range still has well-defined behavior: it is named
/// `"unknown"` and rendered with the theme's info color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(u8);

impl Level {
    /// Most verbose level, for detailed tracing.
    pub const TRACE: Level = Level(0);
    /// Debug messages.
    pub const DEBUG: Level = Level(1);
    /// Informational messages; the default threshold.
    pub const INFO: Level = Level(2);
    /// Warnings.
    pub const WARN: Level = Level(3);
    /// Errors.
    pub const ERROR: Level = Level(4);
    /// Suppresses all output when used as a threshold.
    pub const SILENT: Level = Level(5);

    /// The six defined levels in ascending order.
    pub const ALL: [Level; 6] = [
        Level::TRACE,
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::SILENT,
    ];

    /// Build a level from its raw ordinal. Values above `SILENT` are allowed.
    pub const fn from_raw(raw: u8) -> Self {
        Level(raw)
    }

    pub const fn as_raw(self) -> u8 {
        self.0
    }

    /// Lowercase name, or `"unknown"` for values outside the defined range.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
            Level::SILENT => "silent",
            _ => "unknown",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level '{0}': expected one of trace, debug, info, warn, error, silent")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" | "warning" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            "silent" => Ok(Level::SILENT),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::TRACE,
            log::Level::Debug => Level::DEBUG,
            log::Level::Info => Level::INFO,
            log::Level::Warn => Level::WARN,
            log::Level::Error => Level::ERROR,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => log::LevelFilter::Trace,
            Level::DEBUG => log::LevelFilter::Debug,
            Level::INFO => log::LevelFilter::Info,
            Level::WARN => log::LevelFilter::Warn,
            Level::ERROR => log::LevelFilter::Error,
            _ => log::LevelFilter::Off,
        }
    }
}
