//! Renderable terminal colors.
//!
//! A [`Color`] is either unset, one of the sixteen standard ANSI slots, or a
//! 24-bit true color. Applying a color wraps text in the matching SGR escape
//! sequence followed by a reset; unset colors and disabled output leave the
//! text untouched.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

const RESET: &str = "\x1b[0m";

/// A color that can be applied to terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// No color; text passes through unmodified.
    #[default]
    Unset,
    /// SGR foreground code (30-37 normal, 90-97 bright).
    Ansi(u8),
    /// 24-bit true color.
    Rgb { r: u8, g: u8, b: u8 },
}

/// Named ANSI slots in SGR order, used for parsing and display.
const NAMED: [(&str, Color); 16] = [
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("yellow", Color::YELLOW),
    ("blue", Color::BLUE),
    ("magenta", Color::MAGENTA),
    ("cyan", Color::CYAN),
    ("white", Color::WHITE),
    ("bright_black", Color::BRIGHT_BLACK),
    ("bright_red", Color::BRIGHT_RED),
    ("bright_green", Color::BRIGHT_GREEN),
    ("bright_yellow", Color::BRIGHT_YELLOW),
    ("bright_blue", Color::BRIGHT_BLUE),
    ("bright_magenta", Color::BRIGHT_MAGENTA),
    ("bright_cyan", Color::BRIGHT_CYAN),
    ("bright_white", Color::BRIGHT_WHITE),
];

impl Color {
    pub const DEFAULT: Color = Color::Unset;

    pub const BLACK: Color = Color::Ansi(30);
    pub const RED: Color = Color::Ansi(31);
    pub const GREEN: Color = Color::Ansi(32);
    pub const YELLOW: Color = Color::Ansi(33);
    pub const BLUE: Color = Color::Ansi(34);
    pub const MAGENTA: Color = Color::Ansi(35);
    pub const CYAN: Color = Color::Ansi(36);
    pub const WHITE: Color = Color::Ansi(37);

    pub const BRIGHT_BLACK: Color = Color::Ansi(90);
    pub const BRIGHT_RED: Color = Color::Ansi(91);
    pub const BRIGHT_GREEN: Color = Color::Ansi(92);
    pub const BRIGHT_YELLOW: Color = Color::Ansi(93);
    pub const BRIGHT_BLUE: Color = Color::Ansi(94);
    pub const BRIGHT_MAGENTA: Color = Color::Ansi(95);
    pub const BRIGHT_CYAN: Color = Color::Ansi(96);
    pub const BRIGHT_WHITE: Color = Color::Ansi(97);

    /// True color from red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// True color from a hex string such as `"#FF5733"` or `"ff5733"`.
    ///
    /// Anything that is not exactly six hex digits (after an optional `#`)
    /// yields [`Color::DEFAULT`]. Use `str::parse` when the caller needs to
    /// know that the input was rejected.
    pub fn hex(hex: &str) -> Self {
        parse_hex(hex).unwrap_or_default()
    }

    /// Returns true for the unset color.
    ///
    /// `Ansi(0)` is the zero sentinel and counts as unset too; true-color
    /// black is a real color.
    pub const fn is_default(&self) -> bool {
        matches!(self, Color::Unset | Color::Ansi(0))
    }

    /// Wrap `text` in this color's escape sequence.
    ///
    /// Returns the text unchanged when `color_enabled` is false or the color
    /// is unset.
    pub fn apply<'a>(&self, text: &'a str, color_enabled: bool) -> Cow<'a, str> {
        if !color_enabled || self.is_default() {
            return Cow::Borrowed(text);
        }
        match *self {
            Color::Rgb { r, g, b } => Cow::Owned(format!("\x1b[38;2;{r};{g};{b}m{text}{RESET}")),
            Color::Ansi(code) => Cow::Owned(format!("\x1b[{code}m{text}{RESET}")),
            Color::Unset => Cow::Borrowed(text),
        }
    }

    /// Shorthand for `apply(text, true)`.
    pub fn paint(&self, text: &str) -> String {
        self.apply(text, true).into_owned()
    }

    /// Name of a standard ANSI color, if this is one.
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Color {
    type Err = StyleError;

    /// Strict parser: hex, a color name, `ansi(N)`, or `default`/`none`/empty
    /// for unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        match lower.as_str() {
            "" | "default" | "none" => return Ok(Color::Unset),
            _ => {}
        }
        if let Some((_, color)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        if let Some(code) = lower
            .strip_prefix("ansi(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return code
                .trim()
                .parse::<u8>()
                .map(Color::Ansi)
                .map_err(|_| StyleError::InvalidColor(s.to_string()));
        }
        parse_hex(trimmed).ok_or_else(|| StyleError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            _ if self.is_default() => f.write_str("default"),
            Color::Ansi(code) => match self.name() {
                Some(name) => f.write_str(name),
                None => write!(f, "ansi({code})"),
            },
            Color::Unset => f.write_str("default"),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
