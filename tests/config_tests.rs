//! Construction of `Output` from environment snapshots.

mod common;

use cliout::config::{ENV_NO_COLOR, ENV_PREFIX, ENV_THEME};
use cliout::{Level, Output, Theme};
use common::{SharedBuffer, env};

fn build(vars: &[(&str, &str)], is_terminal: bool) -> (Output, SharedBuffer) {
    let buf = SharedBuffer::default();
    let out = Output::with_config(env(vars), buf.clone(), is_terminal);
    (out, buf)
}

#[test]
fn test_defaults_without_environment() {
    let (out, _) = build(&[], true);
    assert_eq!(out.level(), Level::INFO);
    assert_eq!(out.prefix(), Some("»"));
    assert_eq!(out.theme(), &Theme::default());
    assert!(out.color_enabled());
    assert!(!out.color_forced_off());
}

#[test]
fn test_cli_theme_selects_builtin() {
    let (out, _) = build(&[(ENV_THEME, "Dracula")], true);
    assert_eq!(out.theme().name, "Dracula");

    let (out, _) = build(&[(ENV_THEME, "tokyo night storm")], true);
    assert_eq!(out.theme().name, "Tokyo Night Storm");
}

#[test]
fn test_cli_theme_unknown_or_empty_falls_back() {
    for value in ["nonexistent-theme", ""] {
        let (out, _) = build(&[(ENV_THEME, value)], true);
        assert_eq!(out.theme().name, "Default", "CLI_THEME={value:?}");
    }
}

#[test]
fn test_set_theme_overrides_cli_theme() {
    let (mut out, _) = build(&[(ENV_THEME, "Dracula")], true);
    out.set_theme(Theme::nord());
    assert_eq!(out.theme().name, "Nord");
}

#[test]
fn test_cli_prefix_replaces_glyph() {
    let (mut out, buf) = build(&[(ENV_PREFIX, "[app]")], false);
    assert_eq!(out.prefix(), Some("[app]"));
    out.info("started");
    assert_eq!(buf.contents(), "[app] started\n");

    out.set_prefix("->");
    out.info("again");
    assert!(buf.contents().ends_with("-> again\n"));
}

#[test]
fn test_empty_cli_prefix_hides_prefix() {
    let (mut out, buf) = build(&[(ENV_PREFIX, "")], false);
    assert_eq!(out.prefix(), None);
    out.info("no prefix here");
    assert_eq!(buf.contents(), "no prefix here\n");
}

#[test]
fn test_cli_prefix_with_cli_theme() {
    let (mut out, buf) = build(&[(ENV_PREFIX, "=>"), (ENV_THEME, "Nord")], true);
    out.clear_prefix();
    out.set_prefix("=>");
    out.error("x");
    let nord = Theme::nord();
    assert_eq!(
        buf.contents(),
        format!("{} {}\n", nord.prefix.paint("=>"), nord.error.paint("x"))
    );
}

#[test]
fn test_non_terminal_disables_color_until_enabled() {
    let (mut out, buf) = build(&[], false);
    assert!(!out.color_enabled());
    assert!(!out.color_forced_off());

    out.set_color_enabled(true);
    assert!(out.color_enabled());
    out.clear_prefix();
    out.error("red");
    assert_eq!(buf.contents(), "\x1b[31mred\x1b[0m\n");
}

#[test]
fn test_no_color_is_sticky() {
    for value in ["1", ""] {
        let (mut out, buf) = build(&[(ENV_NO_COLOR, value)], true);
        assert!(!out.color_enabled());
        assert!(out.color_forced_off());

        out.set_color_enabled(true);
        assert!(!out.color_enabled(), "NO_COLOR={value:?} must stay off");

        out.error("plain");
        assert_eq!(out.colorize("plain", cliout::Color::RED), "plain");
        assert_eq!(buf.contents(), "» plain\n");
    }
}

#[test]
fn test_no_color_with_theme_and_prefix_is_plain() {
    let (mut out, buf) = build(
        &[(ENV_NO_COLOR, "1"), (ENV_THEME, "Dracula"), (ENV_PREFIX, ">>")],
        true,
    );
    assert_eq!(out.theme().name, "Dracula");
    out.warn("careful");
    out.success("done");
    assert_eq!(buf.contents(), ">> careful\n>> done\n");
}
