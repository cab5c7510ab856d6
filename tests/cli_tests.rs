//! Argument parsing and execution of the `cliout` command.

mod common;

use clap::Parser;
use cliout::cli::{Cli, ColorChoice, Commands, OutputOptions, execute};
use cliout::{Color, Level, Theme, theme_names};
use common::{ExitRecorder, plain_output};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("cliout").chain(args.iter().copied()))
        .expect("arguments should parse")
}

#[test]
fn test_parse_message_and_options() {
    let cli = parse(&["--theme", "nord", "--level", "debug", "warn", "disk", "almost", "full"]);
    assert_eq!(cli.options.theme.as_deref(), Some("nord"));
    assert_eq!(cli.options.level, Some(Level::DEBUG));
    assert_eq!(cli.options.color, ColorChoice::Auto);
    match cli.command {
        Commands::Warn(args) => assert_eq!(args.message, ["disk", "almost", "full"]),
        other => panic!("expected warn, got {other:?}"),
    }
}

#[test]
fn test_options_are_global() {
    let cli = parse(&["info", "hi", "--no-prefix", "--color", "never"]);
    assert!(cli.options.no_prefix);
    assert_eq!(cli.options.color, ColorChoice::Never);
}

#[test]
fn test_parse_errors() {
    assert!(Cli::try_parse_from(["cliout", "info"]).is_err());
    assert!(Cli::try_parse_from(["cliout", "--level", "loud", "info", "x"]).is_err());
    assert!(Cli::try_parse_from(["cliout", "--prefix", "x", "--no-prefix", "info", "x"]).is_err());
    assert!(Cli::try_parse_from(["cliout", "shout", "x"]).is_err());
}

#[test]
fn test_execute_joins_words() {
    let (mut out, buf) = plain_output();
    let cli = parse(&["success", "deployed", "v2"]);
    execute(&cli.command, &mut out);
    assert_eq!(buf.contents(), "» deployed v2\n");
}

#[test]
fn test_apply_overrides() {
    let (mut out, buf) = plain_output();
    let cli = parse(&["--prefix", "[ci]", "--level", "error", "--theme", "DRACULA", "warn", "x"]);
    cli.options.apply(&mut out).expect("apply");
    assert_eq!(out.theme().name, "Dracula");
    assert_eq!(out.level(), Level::ERROR);

    execute(&cli.command, &mut out);
    assert!(buf.is_empty(), "warn is below the error threshold");

    let cli = parse(&["--prefix", "[ci]", "error", "x"]);
    cli.options.apply(&mut out).expect("apply");
    execute(&cli.command, &mut out);
    assert_eq!(buf.contents(), "[ci] x\n");
}

#[test]
fn test_color_always_enables_color() {
    let (mut out, buf) = plain_output();
    let cli = parse(&["--color", "always", "--no-prefix", "error", "bad"]);
    cli.options.apply(&mut out).expect("apply");
    execute(&cli.command, &mut out);
    assert_eq!(buf.contents(), "\x1b[31mbad\x1b[0m\n");
}

#[test]
fn test_unknown_theme_is_an_error() {
    let (mut out, _) = plain_output();
    let options = OutputOptions {
        theme: Some("nonexistent".to_string()),
        ..OutputOptions::default()
    };
    let err = options.apply(&mut out).unwrap_err();
    assert!(err.to_string().contains("unknown theme 'nonexistent'"));
}

#[test]
fn test_theme_file_option() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("brand.toml");
    std::fs::write(&path, "name = \"Brand\"\nprefix = \"#FF6188\"\nerror = \"bright_red\"\n")
        .expect("write theme");

    let (mut out, _) = plain_output();
    let options = OutputOptions {
        theme_file: Some(path),
        ..OutputOptions::default()
    };
    options.apply(&mut out).expect("apply");
    assert_eq!(out.theme().name, "Brand");
    assert_eq!(out.theme().prefix, Color::rgb(255, 97, 136));
    assert_eq!(out.theme().error, Color::BRIGHT_RED);

    let missing = OutputOptions {
        theme_file: Some(dir.path().join("missing.toml")),
        ..OutputOptions::default()
    };
    let err = missing.apply(&mut out).unwrap_err();
    assert!(format!("{err:#}").contains("missing.toml"));
}

#[test]
fn test_fatal_command_exits_with_one() {
    let (mut out, buf) = plain_output();
    let exits = ExitRecorder::default();
    exits.install(&mut out);
    execute(&parse(&["fatal", "config", "missing"]).command, &mut out);
    assert_eq!(buf.contents(), "» config missing\n");
    assert_eq!(exits.codes(), vec![1]);
}

#[test]
fn test_themes_lists_every_name() {
    let (mut out, buf) = plain_output();
    out.set_level(Level::SILENT);
    out.set_theme(Theme::nord());
    execute(&parse(&["themes"]).command, &mut out);

    let expected: String = theme_names().iter().map(|name| format!("» {name}\n")).collect();
    assert_eq!(buf.contents(), expected);
    // Listing restores the caller's settings.
    assert_eq!(out.level(), Level::SILENT);
    assert_eq!(out.theme().name, "Nord");
}

#[test]
fn test_themes_preview_renders_every_level() {
    let (mut out, buf) = plain_output();
    execute(&parse(&["themes", "--preview"]).command, &mut out);
    let got = buf.contents();
    assert_eq!(got.lines().count(), theme_names().len() * 7);
    assert!(got.contains("» Rose Pine Moon:\n» trace message\n"));
}
