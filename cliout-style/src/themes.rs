//! Color themes for console output.
//!
//! A [`Theme`] bundles a prefix color with one color per message category.
//! The built-in palettes are plain data; [`themes`] returns a fresh copy of
//! all of them and [`theme_by_name`] looks one up case-insensitively.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::StyleError;

/// Colors used for the prefix and each message category.
///
/// Unset fields render uncolored. Theme files may omit any color key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub prefix: Color,
    #[serde(default)]
    pub info: Color,
    #[serde(default)]
    pub debug: Color,
    #[serde(default)]
    pub trace: Color,
    #[serde(default)]
    pub warn: Color,
    #[serde(default)]
    pub error: Color,
    #[serde(default)]
    pub success: Color,
}

impl Theme {
    /// Standard 16-color ANSI palette; safe on any terminal.
    pub fn default_theme() -> Self {
        Self {
            name: "Default".to_string(),
            prefix: Color::CYAN,
            info: Color::DEFAULT,
            debug: Color::BRIGHT_BLACK,
            trace: Color::BRIGHT_BLACK,
            warn: Color::YELLOW,
            error: Color::RED,
            success: Color::GREEN,
        }
    }

    /// Ayu theme
    pub fn ayu() -> Self {
        Self {
            name: "Ayu".to_string(),
            prefix: Color::rgb(255, 143, 64),
            info: Color::rgb(230, 225, 207),
            debug: Color::rgb(92, 103, 115),
            trace: Color::rgb(92, 103, 115),
            warn: Color::rgb(255, 180, 84),
            error: Color::rgb(255, 51, 51),
            success: Color::rgb(184, 204, 82),
        }
    }

    /// Ayu Light theme
    pub fn ayu_light() -> Self {
        Self {
            name: "Ayu Light".to_string(),
            prefix: Color::rgb(255, 106, 0),
            info: Color::rgb(87, 95, 102),
            debug: Color::rgb(171, 176, 182),
            trace: Color::rgb(171, 176, 182),
            warn: Color::rgb(242, 174, 73),
            error: Color::rgb(245, 24, 24),
            success: Color::rgb(134, 179, 0),
        }
    }

    /// Ayu Mirage theme
    pub fn ayu_mirage() -> Self {
        Self {
            name: "Ayu Mirage".to_string(),
            prefix: Color::rgb(255, 173, 102),
            info: Color::rgb(204, 202, 194),
            debug: Color::rgb(184, 207, 230),
            trace: Color::rgb(184, 207, 230),
            warn: Color::rgb(255, 209, 115),
            error: Color::rgb(242, 135, 121),
            success: Color::rgb(213, 255, 128),
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            name: "Dracula".to_string(),
            prefix: Color::rgb(189, 147, 249),
            info: Color::rgb(248, 248, 242),
            debug: Color::rgb(98, 114, 164),
            trace: Color::rgb(98, 114, 164),
            warn: Color::rgb(241, 250, 140),
            error: Color::rgb(255, 85, 85),
            success: Color::rgb(80, 250, 123),
        }
    }

    /// One Dark theme
    pub fn one_dark() -> Self {
        Self {
            name: "One Dark".to_string(),
            prefix: Color::rgb(97, 175, 239),
            info: Color::rgb(171, 178, 191),
            debug: Color::rgb(92, 99, 112),
            trace: Color::rgb(92, 99, 112),
            warn: Color::rgb(229, 192, 123),
            error: Color::rgb(224, 108, 117),
            success: Color::rgb(152, 195, 121),
        }
    }

    /// Solarized Dark theme
    pub fn solarized_dark() -> Self {
        Self {
            name: "Solarized Dark".to_string(),
            prefix: Color::rgb(38, 139, 210),
            info: Color::rgb(131, 148, 150),
            debug: Color::rgb(88, 110, 117),
            trace: Color::rgb(88, 110, 117),
            warn: Color::rgb(181, 137, 0),
            error: Color::rgb(220, 50, 47),
            success: Color::rgb(133, 153, 0),
        }
    }

    /// Solarized Light theme
    pub fn solarized_light() -> Self {
        Self {
            name: "Solarized Light".to_string(),
            prefix: Color::rgb(38, 139, 210),
            info: Color::rgb(101, 123, 131),
            debug: Color::rgb(147, 161, 161),
            trace: Color::rgb(147, 161, 161),
            warn: Color::rgb(181, 137, 0),
            error: Color::rgb(220, 50, 47),
            success: Color::rgb(133, 153, 0),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            prefix: Color::rgb(136, 192, 208),
            info: Color::rgb(216, 222, 233),
            debug: Color::rgb(97, 110, 136),
            trace: Color::rgb(97, 110, 136),
            warn: Color::rgb(235, 203, 139),
            error: Color::rgb(191, 97, 106),
            success: Color::rgb(163, 190, 140),
        }
    }

    /// Gruvbox Dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            prefix: Color::rgb(131, 165, 152),
            info: Color::rgb(235, 219, 178),
            debug: Color::rgb(146, 131, 116),
            trace: Color::rgb(146, 131, 116),
            warn: Color::rgb(250, 189, 47),
            error: Color::rgb(251, 73, 52),
            success: Color::rgb(184, 187, 38),
        }
    }

    /// Gruvbox Light theme
    pub fn gruvbox_light() -> Self {
        Self {
            name: "Gruvbox Light".to_string(),
            prefix: Color::rgb(66, 123, 88),
            info: Color::rgb(60, 56, 54),
            debug: Color::rgb(146, 131, 116),
            trace: Color::rgb(146, 131, 116),
            warn: Color::rgb(181, 118, 20),
            error: Color::rgb(157, 0, 6),
            success: Color::rgb(121, 116, 14),
        }
    }

    /// Monokai theme
    pub fn monokai() -> Self {
        Self {
            name: "Monokai".to_string(),
            prefix: Color::rgb(102, 217, 239),
            info: Color::rgb(248, 248, 242),
            debug: Color::rgb(117, 113, 94),
            trace: Color::rgb(117, 113, 94),
            warn: Color::rgb(230, 219, 116),
            error: Color::rgb(249, 38, 114),
            success: Color::rgb(166, 226, 46),
        }
    }

    /// Monokai Pro theme
    pub fn monokai_pro() -> Self {
        Self {
            name: "Monokai Pro".to_string(),
            prefix: Color::rgb(120, 220, 232),
            info: Color::rgb(252, 252, 250),
            debug: Color::rgb(114, 112, 114),
            trace: Color::rgb(91, 89, 92),
            warn: Color::rgb(255, 216, 102),
            error: Color::rgb(255, 97, 136),
            success: Color::rgb(169, 220, 118),
        }
    }

    /// Monokai Pro Classic theme
    pub fn monokai_pro_classic() -> Self {
        Self {
            name: "Monokai Pro Classic".to_string(),
            prefix: Color::rgb(102, 217, 239),
            info: Color::rgb(253, 255, 241),
            debug: Color::rgb(110, 112, 102),
            trace: Color::rgb(87, 88, 79),
            warn: Color::rgb(230, 219, 116),
            error: Color::rgb(249, 38, 114),
            success: Color::rgb(166, 226, 46),
        }
    }

    /// Monokai Pro Machine theme
    pub fn monokai_pro_machine() -> Self {
        Self {
            name: "Monokai Pro Machine".to_string(),
            prefix: Color::rgb(124, 213, 241),
            info: Color::rgb(242, 255, 252),
            debug: Color::rgb(107, 118, 120),
            trace: Color::rgb(84, 95, 98),
            warn: Color::rgb(255, 237, 114),
            error: Color::rgb(255, 109, 126),
            success: Color::rgb(162, 229, 123),
        }
    }

    /// Monokai Pro Octagon theme
    pub fn monokai_pro_octagon() -> Self {
        Self {
            name: "Monokai Pro Octagon".to_string(),
            prefix: Color::rgb(156, 209, 187),
            info: Color::rgb(234, 242, 241),
            debug: Color::rgb(105, 109, 119),
            trace: Color::rgb(83, 87, 99),
            warn: Color::rgb(255, 215, 109),
            error: Color::rgb(255, 101, 122),
            success: Color::rgb(186, 215, 97),
        }
    }

    /// Monokai Pro Ristretto theme
    pub fn monokai_pro_ristretto() -> Self {
        Self {
            name: "Monokai Pro Ristretto".to_string(),
            prefix: Color::rgb(133, 218, 204),
            info: Color::rgb(255, 241, 243),
            debug: Color::rgb(114, 105, 106),
            trace: Color::rgb(91, 83, 83),
            warn: Color::rgb(249, 204, 108),
            error: Color::rgb(253, 104, 131),
            success: Color::rgb(173, 218, 120),
        }
    }

    /// Monokai Pro Spectrum theme
    pub fn monokai_pro_spectrum() -> Self {
        Self {
            name: "Monokai Pro Spectrum".to_string(),
            prefix: Color::rgb(90, 212, 230),
            info: Color::rgb(247, 241, 255),
            debug: Color::rgb(105, 103, 108),
            trace: Color::rgb(82, 80, 83),
            warn: Color::rgb(252, 229, 102),
            error: Color::rgb(252, 97, 141),
            success: Color::rgb(123, 216, 143),
        }
    }

    /// Monokai Pro Light theme
    pub fn monokai_pro_light() -> Self {
        Self {
            name: "Monokai Pro Light".to_string(),
            prefix: Color::rgb(28, 140, 168),
            info: Color::rgb(41, 36, 42),
            debug: Color::rgb(165, 159, 160),
            trace: Color::rgb(191, 185, 186),
            warn: Color::rgb(204, 122, 10),
            error: Color::rgb(225, 71, 117),
            success: Color::rgb(38, 157, 105),
        }
    }

    /// Material Dark theme
    pub fn material_dark() -> Self {
        Self {
            name: "Material Dark".to_string(),
            prefix: Color::rgb(130, 170, 255),
            info: Color::rgb(238, 255, 255),
            debug: Color::rgb(84, 110, 122),
            trace: Color::rgb(84, 110, 122),
            warn: Color::rgb(255, 203, 107),
            error: Color::rgb(255, 83, 112),
            success: Color::rgb(195, 232, 141),
        }
    }

    /// Material Light theme
    pub fn material_light() -> Self {
        Self {
            name: "Material Light".to_string(),
            prefix: Color::rgb(97, 130, 184),
            info: Color::rgb(144, 164, 174),
            debug: Color::rgb(144, 164, 174),
            trace: Color::rgb(204, 215, 218),
            warn: Color::rgb(255, 182, 44),
            error: Color::rgb(229, 57, 53),
            success: Color::rgb(145, 184, 89),
        }
    }

    /// Palenight theme
    pub fn palenight() -> Self {
        Self {
            name: "Palenight".to_string(),
            prefix: Color::rgb(130, 170, 255),
            info: Color::rgb(166, 172, 205),
            debug: Color::rgb(103, 110, 149),
            trace: Color::rgb(103, 110, 149),
            warn: Color::rgb(255, 203, 107),
            error: Color::rgb(255, 83, 112),
            success: Color::rgb(195, 232, 141),
        }
    }

    /// Catppuccino Frappe theme
    pub fn catppuccino_frappe() -> Self {
        Self {
            name: "Catppuccino Frappe".to_string(),
            prefix: Color::rgb(140, 170, 238),
            info: Color::rgb(198, 208, 245),
            debug: Color::rgb(115, 121, 148),
            trace: Color::rgb(98, 104, 128),
            warn: Color::rgb(229, 200, 144),
            error: Color::rgb(231, 130, 132),
            success: Color::rgb(166, 209, 137),
        }
    }

    /// Catppuccino Latte theme
    pub fn catppuccino_latte() -> Self {
        Self {
            name: "Catppuccino Latte".to_string(),
            prefix: Color::rgb(30, 102, 245),
            info: Color::rgb(76, 79, 105),
            debug: Color::rgb(156, 160, 176),
            trace: Color::rgb(172, 176, 190),
            warn: Color::rgb(223, 142, 29),
            error: Color::rgb(210, 15, 57),
            success: Color::rgb(64, 160, 43),
        }
    }

    /// Catppuccino Macchiato theme
    pub fn catppuccino_macchiato() -> Self {
        Self {
            name: "Catppuccino Macchiato".to_string(),
            prefix: Color::rgb(138, 173, 244),
            info: Color::rgb(202, 211, 245),
            debug: Color::rgb(110, 115, 141),
            trace: Color::rgb(91, 96, 120),
            warn: Color::rgb(238, 212, 159),
            error: Color::rgb(237, 135, 150),
            success: Color::rgb(166, 218, 149),
        }
    }

    /// Catppuccino Mocha theme
    pub fn catppuccino_mocha() -> Self {
        Self {
            name: "Catppuccino Mocha".to_string(),
            prefix: Color::rgb(137, 180, 250),
            info: Color::rgb(205, 214, 244),
            debug: Color::rgb(108, 112, 134),
            trace: Color::rgb(88, 91, 112),
            warn: Color::rgb(249, 226, 175),
            error: Color::rgb(243, 139, 168),
            success: Color::rgb(166, 227, 161),
        }
    }

    /// Rose Pine theme
    pub fn rose_pine() -> Self {
        Self {
            name: "Rose Pine".to_string(),
            prefix: Color::rgb(196, 167, 231),
            info: Color::rgb(224, 222, 244),
            debug: Color::rgb(110, 106, 134),
            trace: Color::rgb(110, 106, 134),
            warn: Color::rgb(246, 193, 119),
            error: Color::rgb(235, 111, 146),
            success: Color::rgb(49, 116, 143),
        }
    }

    /// Rose Pine Dawn theme
    pub fn rose_pine_dawn() -> Self {
        Self {
            name: "Rose Pine Dawn".to_string(),
            prefix: Color::rgb(144, 122, 169),
            info: Color::rgb(87, 82, 121),
            debug: Color::rgb(152, 147, 165),
            trace: Color::rgb(152, 147, 165),
            warn: Color::rgb(234, 157, 52),
            error: Color::rgb(180, 99, 122),
            success: Color::rgb(40, 105, 131),
        }
    }

    /// Rose Pine Moon theme
    pub fn rose_pine_moon() -> Self {
        Self {
            name: "Rose Pine Moon".to_string(),
            prefix: Color::rgb(196, 167, 231),
            info: Color::rgb(224, 222, 244),
            debug: Color::rgb(110, 106, 134),
            trace: Color::rgb(110, 106, 134),
            warn: Color::rgb(246, 193, 119),
            error: Color::rgb(235, 111, 146),
            success: Color::rgb(62, 143, 176),
        }
    }

    /// Tokyo Night Storm theme
    pub fn tokyo_night_storm() -> Self {
        Self {
            name: "Tokyo Night Storm".to_string(),
            prefix: Color::rgb(122, 162, 247),
            info: Color::rgb(192, 202, 245),
            debug: Color::rgb(86, 95, 137),
            trace: Color::rgb(86, 95, 137),
            warn: Color::rgb(224, 175, 104),
            error: Color::rgb(247, 118, 142),
            success: Color::rgb(158, 206, 106),
        }
    }

    /// Tokyo Night Day theme
    pub fn tokyo_night_day() -> Self {
        Self {
            name: "Tokyo Night Day".to_string(),
            prefix: Color::rgb(46, 125, 233),
            info: Color::rgb(55, 96, 191),
            debug: Color::rgb(132, 140, 181),
            trace: Color::rgb(132, 140, 181),
            warn: Color::rgb(140, 108, 62),
            error: Color::rgb(245, 42, 101),
            success: Color::rgb(88, 117, 57),
        }
    }

    /// Tokyo Night Night theme
    pub fn tokyo_night_night() -> Self {
        Self {
            name: "Tokyo Night Night".to_string(),
            prefix: Color::rgb(122, 162, 247),
            info: Color::rgb(169, 177, 214),
            debug: Color::rgb(86, 95, 137),
            trace: Color::rgb(86, 95, 137),
            warn: Color::rgb(224, 175, 104),
            error: Color::rgb(247, 118, 142),
            success: Color::rgb(158, 206, 106),
        }
    }

    /// Get a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        theme_by_name(name)
    }

    /// Parse a theme definition from TOML.
    ///
    /// ```toml
    /// name = "Ocean"
    /// prefix = "#61AFEF"
    /// error = "bright_red"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a theme definition from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        log::debug!("loaded theme '{}' from {}", theme.name, path.display());
        Ok(theme)
    }

    /// Encode this theme in the format accepted by [`Theme::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string(self)?)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// All built-in themes, in display order.
///
/// Each call builds a new `Vec`, so callers are free to modify the result.
pub fn themes() -> Vec<Theme> {
    vec![
        Theme::default_theme(),
        Theme::ayu(),
        Theme::ayu_light(),
        Theme::ayu_mirage(),
        Theme::dracula(),
        Theme::one_dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::nord(),
        Theme::gruvbox_dark(),
        Theme::gruvbox_light(),
        Theme::monokai(),
        Theme::monokai_pro(),
        Theme::monokai_pro_classic(),
        Theme::monokai_pro_machine(),
        Theme::monokai_pro_octagon(),
        Theme::monokai_pro_ristretto(),
        Theme::monokai_pro_spectrum(),
        Theme::monokai_pro_light(),
        Theme::material_dark(),
        Theme::material_light(),
        Theme::palenight(),
        Theme::catppuccino_frappe(),
        Theme::catppuccino_latte(),
        Theme::catppuccino_macchiato(),
        Theme::catppuccino_mocha(),
        Theme::rose_pine(),
        Theme::rose_pine_dawn(),
        Theme::rose_pine_moon(),
        Theme::tokyo_night_storm(),
        Theme::tokyo_night_day(),
        Theme::tokyo_night_night(),
    ]
}

/// Names of the built-in themes, in the same order as [`themes`].
pub fn theme_names() -> Vec<&'static str> {
    vec![
        "Default",
        "Ayu",
        "Ayu Light",
        "Ayu Mirage",
        "Dracula",
        "One Dark",
        "Solarized Dark",
        "Solarized Light",
        "Nord",
        "Gruvbox Dark",
        "Gruvbox Light",
        "Monokai",
        "Monokai Pro",
        "Monokai Pro Classic",
        "Monokai Pro Machine",
        "Monokai Pro Octagon",
        "Monokai Pro Ristretto",
        "Monokai Pro Spectrum",
        "Monokai Pro Light",
        "Material Dark",
        "Material Light",
        "Palenight",
        "Catppuccino Frappe",
        "Catppuccino Latte",
        "Catppuccino Macchiato",
        "Catppuccino Mocha",
        "Rose Pine",
        "Rose Pine Dawn",
        "Rose Pine Moon",
        "Tokyo Night Storm",
        "Tokyo Night Day",
        "Tokyo Night Night",
    ]
}

/// Look up a built-in theme by exact name, ignoring ASCII case.
///
/// Returns `None` when no theme matches.
pub fn theme_by_name(name: &str) -> Option<Theme> {
    themes()
        .into_iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_themes_have_unique_names() {
        let all = themes();
        assert_eq!(all.len(), 32);

        let mut seen = HashSet::new();
        for theme in &all {
            assert!(!theme.name.is_empty(), "theme with empty name");
            assert!(seen.insert(theme.name.clone()), "duplicate theme name {}", theme.name);
        }
    }

    #[test]
    fn test_all_themes_define_error_and_success() {
        for theme in themes() {
            assert!(!theme.error.is_default(), "{} has no error color", theme.name);
            assert!(!theme.success.is_default(), "{} has no success color", theme.name);
        }
    }

    #[test]
    fn test_theme_names_match_registry() {
        let names: Vec<String> = themes().into_iter().map(|t| t.name).collect();
        assert_eq!(names, theme_names());
    }

    #[test]
    fn test_themes_returns_fresh_copy() {
        let mut first = themes();
        let second = themes();
        first[0].name = "Mutated".to_string();
        first.truncate(1);

        assert_eq!(second[0].name, "Default");
        assert_eq!(second.len(), 32);
        assert_eq!(themes()[0].name, "Default");
    }

    #[test]
    fn test_theme_by_name_case_insensitive() {
        let expected = theme_by_name("Dracula").expect("Dracula is built in");
        for name in ["dracula", "DRACULA", "DrAcUlA"] {
            assert_eq!(theme_by_name(name), Some(expected.clone()));
        }
        assert_eq!(
            theme_by_name("tokyo night storm").map(|t| t.name),
            Some("Tokyo Night Storm".to_string())
        );
    }

    #[test]
    fn test_theme_by_name_not_found() {
        assert!(theme_by_name("nonexistent").is_none());
        assert!(theme_by_name("").is_none());
        assert!(Theme::by_name("tokyo-night-storm").is_none());
    }

    #[test]
    fn test_default_theme_palette() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Default");
        assert_eq!(theme.prefix, Color::CYAN);
        assert!(theme.info.is_default());
        assert_eq!(theme.debug, Color::BRIGHT_BLACK);
        assert_eq!(theme.warn, Color::YELLOW);
        assert_eq!(theme.error, Color::RED);
        assert_eq!(theme.success, Color::GREEN);
    }

    #[test]
    fn test_dracula_palette() {
        let theme = Theme::dracula();
        assert_eq!(theme.prefix, Color::hex("BD93F9"));
        assert_eq!(theme.error, Color::hex("FF5555"));
        assert_eq!(theme.success, Color::hex("50FA7B"));
    }

    #[test]
    fn test_from_toml_partial() {
        let theme = Theme::from_toml_str(
            r##"
name = "Ocean"
prefix = "#61AFEF"
error = "bright_red"
"##,
        )
        .expect("parse theme");

        assert_eq!(theme.name, "Ocean");
        assert_eq!(theme.prefix, Color::rgb(97, 175, 239));
        assert_eq!(theme.error, Color::BRIGHT_RED);
        assert!(theme.info.is_default());
        assert!(theme.success.is_default());
    }

    #[test]
    fn test_from_toml_rejects_bad_color() {
        let err = Theme::from_toml_str("name = \"Bad\"\nwarn = \"#12\"\n").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn test_toml_round_trip_preserves_palette() {
        let theme = Theme::gruvbox_dark();
        let encoded = theme.to_toml_string().expect("serialize");
        assert_eq!(Theme::from_toml_str(&encoded).expect("parse"), theme);
    }

    #[test]
    fn test_toml_round_trip_with_numbered_ansi_color() {
        let theme = Theme {
            info: Color::Ansi(40),
            ..Theme::default()
        };
        let encoded = theme.to_toml_string().expect("serialize");
        assert!(encoded.contains("info = \"ansi(40)\""), "got {encoded}");
        assert_eq!(Theme::from_toml_str(&encoded).expect("parse"), theme);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mine.toml");
        std::fs::write(&path, "name = \"Mine\"\nsuccess = \"green\"\n").expect("write");

        let theme = Theme::load(&path).expect("load");
        assert_eq!(theme.name, "Mine");
        assert_eq!(theme.success, Color::GREEN);

        let missing = Theme::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, StyleError::Io { .. }));
    }
}
