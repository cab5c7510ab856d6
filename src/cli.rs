//! Command-line interface for cliout.
//!
//! Lets shell scripts print themed, leveled lines with the same rules as the
//! library, e.g. `cliout --theme nord warn "disk almost full"`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{Level, LogBridge, Output, OutputConfig, Theme, themes};

/// cliout - leveled, themeable console output
#[derive(Debug, Parser)]
#[command(name = "cliout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: OutputOptions,

    /// Show cliout's own diagnostics on stderr at this level
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<Level>,
}

/// Options that adjust the output before the message is printed.
///
/// Each one takes precedence over the matching environment variable.
#[derive(Debug, Default, Args)]
pub struct OutputOptions {
    /// Built-in theme name (case-insensitive); overrides CLI_THEME
    #[arg(long, global = true, value_name = "NAME", conflicts_with = "theme_file")]
    pub theme: Option<String>,

    /// Load the theme from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub theme_file: Option<PathBuf>,

    /// Prefix text; overrides CLI_PREFIX
    #[arg(long, global = true, value_name = "TEXT", conflicts_with = "no_prefix")]
    pub prefix: Option<String>,

    /// Print lines without a prefix
    #[arg(long, global = true)]
    pub no_prefix: bool,

    /// Minimum level to print
    #[arg(long, global = true, value_name = "LEVEL")]
    pub level: Option<Level>,

    /// When to use color. NO_COLOR always wins.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Write to stderr instead of stdout
    #[arg(long, global = true)]
    pub stderr: bool,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a trace message
    Trace(MessageArgs),
    /// Print a debug message
    Debug(MessageArgs),
    /// Print an info message
    Info(MessageArgs),
    /// Print a warning
    Warn(MessageArgs),
    /// Print an error
    Error(MessageArgs),
    /// Print a success message (filtered like info)
    Success(MessageArgs),
    /// Print an error and exit with status 1
    Fatal(MessageArgs),
    /// List the built-in themes
    Themes {
        /// Render a sample line for every level in each theme
        #[arg(long)]
        preview: bool,
    },
}

#[derive(Debug, Args)]
pub struct MessageArgs {
    /// Message words, joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl MessageArgs {
    fn text(&self) -> String {
        self.message.join(" ")
    }
}

impl OutputOptions {
    /// Build the output these options describe, on stdout or stderr.
    pub fn build_output(&self) -> anyhow::Result<Output> {
        let config = OutputConfig::from_env();
        let mut output = if self.stderr {
            let stderr = io::stderr();
            let is_terminal = stderr.is_terminal();
            Output::with_config(config, stderr, is_terminal)
        } else {
            let stdout = io::stdout();
            let is_terminal = stdout.is_terminal();
            Output::with_config(config, stdout, is_terminal)
        };
        self.apply(&mut output)?;
        Ok(output)
    }

    /// Apply the command-line overrides to an existing output.
    pub fn apply(&self, output: &mut Output) -> anyhow::Result<()> {
        if let Some(theme) = self.resolve_theme()? {
            output.set_theme(theme);
        }
        if let Some(prefix) = &self.prefix {
            output.set_prefix(prefix.as_str());
        }
        if self.no_prefix {
            output.clear_prefix();
        }
        if let Some(level) = self.level {
            output.set_level(level);
        }
        match self.color {
            ColorChoice::Auto => {}
            ColorChoice::Always => output.set_color_enabled(true),
            ColorChoice::Never => output.set_color_enabled(false),
        }
        Ok(())
    }

    fn resolve_theme(&self) -> anyhow::Result<Option<Theme>> {
        if let Some(path) = &self.theme_file {
            let theme = Theme::load(path)
                .with_context(|| format!("could not use theme file {}", path.display()))?;
            return Ok(Some(theme));
        }
        match &self.theme {
            Some(name) => match Theme::by_name(name) {
                Some(theme) => Ok(Some(theme)),
                None => bail!("unknown theme '{name}' (run `cliout themes` to list them)"),
            },
            None => Ok(None),
        }
    }
}

/// Run a parsed command line against `output`.
pub fn execute(command: &Commands, output: &mut Output) {
    match command {
        Commands::Trace(args) => output.trace(&args.text()),
        Commands::Debug(args) => output.debug(&args.text()),
        Commands::Info(args) => output.info(&args.text()),
        Commands::Warn(args) => output.warn(&args.text()),
        Commands::Error(args) => output.error(&args.text()),
        Commands::Success(args) => output.success(&args.text()),
        Commands::Fatal(args) => output.fatal(&args.text()),
        Commands::Themes { preview } => list_themes(output, *preview),
    }
}

/// Print each built-in theme name, optionally followed by a sample of every
/// level rendered in that theme.
fn list_themes(output: &mut Output, preview: bool) {
    let original = output.theme().clone();
    let level = output.level();
    // Listing is not a message; always show it.
    output.set_level(Level::TRACE);

    for theme in themes() {
        if !preview {
            output.info(&theme.name);
            continue;
        }
        let name = theme.name.clone();
        output.set_theme(theme);
        output.infof(format_args!("{name}:"));
        output.trace("trace message");
        output.debug("debug message");
        output.info("info message");
        output.warn("warning message");
        output.error("error message");
        output.success("success message");
    }

    output.set_theme(original);
    output.set_level(level);
}

/// Install the diagnostics bridge on stderr, if requested.
fn init_diagnostics(level: Option<Level>) {
    let Some(level) = level else {
        return;
    };
    let stderr = io::stderr();
    let is_terminal = stderr.is_terminal();
    let mut output = Output::with_config(OutputConfig::from_env(), stderr, is_terminal);
    output.set_prefix("cliout:");
    output.set_level(Level::TRACE);
    if LogBridge::install(output, level.into()).is_err() {
        eprintln!("cliout: diagnostics logger already installed");
    }
}

/// Entry point used by the binary.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    init_diagnostics(cli.log_level);
    let mut output = cli.options.build_output()?;
    log::debug!("running {:?} with {:?}", cli.command, output);
    execute(&cli.command, &mut output);
    Ok(())
}
