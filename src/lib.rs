//! Leveled, themeable console output for command-line programs.
//!
//! ```no_run
//! use cliout::{Color, Level, Output, Theme};
//!
//! let mut out = Output::new();
//! out.set_level(Level::DEBUG);
//! out.set_theme(Theme::dracula());
//! out.info("fetching index");
//! out.success("done");
//!
//! let file = out.colorize("config.toml", Color::CYAN);
//! out.warnf(format_args!("{file} is missing a [build] table"));
//! ```
//!
//! The free functions and `cli_*!` macros forward to one lazily created
//! process-wide [`Output`] (see [`shared`]).

/// Crate version, for `--version` output and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod level;
pub mod log_bridge;
pub mod output;
pub mod shared;

pub use cliout_style::{Color, StyleError, Theme, theme_by_name, theme_names, themes};
pub use config::{DEFAULT_PREFIX, OutputConfig};
pub use level::{Level, ParseLevelError};
pub use log_bridge::LogBridge;
pub use output::{ExitHook, FATAL_EXIT_CODE, Output, Sink};
pub use shared::{
    clear_prefix, colorize, debug, debugf, error, errorf, fatal, fatalf, info, infof,
    set_color_enabled, set_exit_hook, set_level, set_message_color, set_prefix, set_prefix_color,
    set_theme, set_writer, shared, success, successf, trace, tracef, warn, warnf,
};
