//! Styling primitives for the cliout console formatter.
//!
//! This crate holds the pure data side of cliout:
//!
//! - [`Color`]: unset, 16-color ANSI, or 24-bit true color
//! - [`Theme`]: a named palette for the prefix and each message category
//! - The built-in theme registry ([`themes`], [`theme_by_name`])
//! - TOML theme files

pub mod color;
pub mod error;
pub mod themes;

pub use color::Color;
pub use error::StyleError;
pub use themes::{Theme, theme_by_name, theme_names, themes};
