//! The leveled, themeable line renderer.
//!
//! An [`Output`] filters each message against its threshold, resolves the
//! message and prefix colors (explicit override first, then the theme), and
//! writes one newline-terminated line to its sink.
//!
//! `Output` has no internal locking. Share one between threads behind a
//! mutex, or give each thread its own instance (see [`crate::shared`]).

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use crate::config::OutputConfig;
use crate::{Color, Level, Theme};

/// Status code passed to the exit hook by the fatal operations.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Destination for rendered lines.
pub type Sink = Box<dyn Write + Send>;

/// Process-termination strategy invoked by [`Output::fatal`].
///
/// Defaults to [`std::process::exit`]. Replace it to observe fatal calls
/// without terminating the process.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

fn exit_process(code: i32) {
    std::process::exit(code)
}

/// Console output renderer.
pub struct Output {
    writer: Sink,
    level: Level,
    prefix: String,
    has_prefix: bool,
    prefix_color: Color,
    message_color: Color,
    theme: Theme,
    color_enabled: bool,
    /// Set when `NO_COLOR` was present at construction; never cleared.
    color_forced_off: bool,
    exit_hook: ExitHook,
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("level", &self.level)
            .field("prefix", &self.prefix())
            .field("prefix_color", &self.prefix_color)
            .field("message_color", &self.message_color)
            .field("theme", &self.theme.name)
            .field("color_enabled", &self.color_enabled)
            .field("color_forced_off", &self.color_forced_off)
            .finish_non_exhaustive()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create an output writing to stdout, configured from the environment.
    ///
    /// - Level: [`Level::INFO`]
    /// - Prefix: `»`, or `CLI_PREFIX` (empty hides the prefix)
    /// - Theme: Default, or the theme named by `CLI_THEME`
    /// - Color: on, unless `NO_COLOR` is set or stdout is not a terminal
    pub fn new() -> Self {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::with_config(OutputConfig::from_env(), stdout, is_terminal)
    }

    /// Create an output writing to `writer`, configured from the environment.
    ///
    /// The writer is not a terminal, so color starts disabled; call
    /// [`set_color_enabled`](Self::set_color_enabled) to turn it on.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self::with_config(OutputConfig::from_env(), writer, false)
    }

    /// Create an output from an explicit configuration snapshot.
    ///
    /// `is_terminal` is the TTY probe result for `writer`. A non-terminal
    /// sink starts with color off, but unlike `NO_COLOR` this can be undone.
    pub fn with_config(
        config: OutputConfig,
        writer: impl Write + Send + 'static,
        is_terminal: bool,
    ) -> Self {
        let prefix = config.resolve_prefix();
        let mut output = Self {
            writer: Box::new(writer),
            level: Level::INFO,
            has_prefix: prefix.is_some(),
            prefix: prefix.unwrap_or_default(),
            prefix_color: Color::DEFAULT,
            message_color: Color::DEFAULT,
            theme: config.resolve_theme(),
            color_enabled: true,
            color_forced_off: false,
            exit_hook: Arc::new(exit_process),
        };

        if config.no_color {
            output.color_enabled = false;
            output.color_forced_off = true;
        }
        if !is_terminal {
            output.color_enabled = false;
        }

        log::debug!(
            "output created: theme={} color_enabled={} color_forced_off={}",
            output.theme.name,
            output.color_enabled,
            output.color_forced_off
        );
        output
    }

    // --- Configuration ---

    /// Set the threshold. Messages below it are suppressed.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Set the prefix prepended to each line and make it visible.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
        self.has_prefix = true;
    }

    /// Remove the prefix from output lines.
    pub fn clear_prefix(&mut self) {
        self.prefix.clear();
        self.has_prefix = false;
    }

    /// The prefix that will be rendered, if any.
    pub fn prefix(&self) -> Option<&str> {
        (self.has_prefix && !self.prefix.is_empty()).then_some(self.prefix.as_str())
    }

    /// Override the theme's prefix color. [`Color::DEFAULT`] clears the override.
    pub fn set_prefix_color(&mut self, color: Color) {
        self.prefix_color = color;
    }

    /// Override every message color, including success.
    /// [`Color::DEFAULT`] clears the override.
    pub fn set_message_color(&mut self, color: Color) {
        self.message_color = color;
    }

    /// Switch the active theme. Color overrides stay in effect.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Repoint the output at a new destination.
    pub fn set_writer(&mut self, writer: impl Write + Send + 'static) {
        self.writer = Box::new(writer);
    }

    /// Turn color on or off. Has no effect if `NO_COLOR` was set when this
    /// output was created.
    pub fn set_color_enabled(&mut self, enabled: bool) {
        if self.color_forced_off {
            return;
        }
        self.color_enabled = enabled;
    }

    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    pub fn color_forced_off(&self) -> bool {
        self.color_forced_off
    }

    /// Replace the process-termination hook used by [`fatal`](Self::fatal).
    pub fn set_exit_hook(&mut self, hook: impl Fn(i32) + Send + Sync + 'static) {
        self.exit_hook = Arc::new(hook);
    }

    // --- Emission ---

    pub fn trace(&mut self, msg: &str) {
        self.print(Level::TRACE, msg, false);
    }

    pub fn tracef(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::TRACE, args, false);
    }

    pub fn debug(&mut self, msg: &str) {
        self.print(Level::DEBUG, msg, false);
    }

    pub fn debugf(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::DEBUG, args, false);
    }

    pub fn info(&mut self, msg: &str) {
        self.print(Level::INFO, msg, false);
    }

    pub fn infof(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::INFO, args, false);
    }

    pub fn warn(&mut self, msg: &str) {
        self.print(Level::WARN, msg, false);
    }

    pub fn warnf(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::WARN, args, false);
    }

    pub fn error(&mut self, msg: &str) {
        self.print(Level::ERROR, msg, false);
    }

    pub fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::ERROR, args, false);
    }

    /// Info-level message rendered in the theme's success color.
    pub fn success(&mut self, msg: &str) {
        self.print(Level::INFO, msg, true);
    }

    pub fn successf(&mut self, args: fmt::Arguments<'_>) {
        self.print_args(Level::INFO, args, true);
    }

    /// Error-level message, then the exit hook with [`FATAL_EXIT_CODE`].
    ///
    /// The hook runs even when the message is filtered out.
    pub fn fatal(&mut self, msg: &str) {
        let exit = self.emit_fatal(format_args!("{msg}"));
        exit(FATAL_EXIT_CODE);
    }

    pub fn fatalf(&mut self, args: fmt::Arguments<'_>) {
        let exit = self.emit_fatal(args);
        exit(FATAL_EXIT_CODE);
    }

    /// Write the fatal message and hand back the exit hook, so a caller
    /// holding a lock on this output can release it before exiting.
    pub(crate) fn emit_fatal(&mut self, args: fmt::Arguments<'_>) -> ExitHook {
        self.print_args(Level::ERROR, args, false);
        Arc::clone(&self.exit_hook)
    }

    /// Emit `msg` at an arbitrary level.
    pub fn log(&mut self, level: Level, msg: &str) {
        self.print(level, msg, false);
    }

    /// Whether a message at `level` would be written.
    ///
    /// A [`Level::SILENT`] threshold rejects every level, including `SILENT`
    /// itself and raw values above it.
    pub fn enabled(&self, level: Level) -> bool {
        self.level < Level::SILENT && level >= self.level
    }

    /// Wrap `text` in `color`, honoring this output's color setting.
    ///
    /// Use it to color fragments inside a formatted message:
    ///
    /// ```no_run
    /// # use cliout::{Color, Output};
    /// let mut out = Output::new();
    /// let status = out.colorize("healthy", Color::GREEN);
    /// out.infof(format_args!("status: {status}"));
    /// ```
    pub fn colorize(&self, text: &str, color: Color) -> String {
        color.apply(text, self.color_enabled).into_owned()
    }

    // --- Rendering ---

    fn print_args(&mut self, level: Level, args: fmt::Arguments<'_>, is_success: bool) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(msg) => self.print(level, msg, is_success),
            None => self.print(level, &args.to_string(), is_success),
        }
    }

    fn print(&mut self, level: Level, msg: &str, is_success: bool) {
        if !self.enabled(level) {
            return;
        }
        let line = self.render_line(level, msg, is_success);
        // Output is best effort; a broken pipe must not take the host down.
        let _ = self.writer.write_all(line.as_bytes());
    }

    /// Compose a full line, including the trailing newline.
    fn render_line(&self, level: Level, msg: &str, is_success: bool) -> String {
        let message = self
            .message_color_for(level, is_success)
            .apply(msg, self.color_enabled);

        match self.prefix() {
            Some(prefix) => {
                let prefix = self.prefix_color_resolved().apply(prefix, self.color_enabled);
                format!("{prefix} {message}\n")
            }
            None => format!("{message}\n"),
        }
    }

    /// Explicit override, then success color, then the theme's level color.
    fn message_color_for(&self, level: Level, is_success: bool) -> Color {
        if !self.message_color.is_default() {
            self.message_color
        } else if is_success {
            self.theme.success
        } else {
            self.color_for_level(level)
        }
    }

    fn prefix_color_resolved(&self) -> Color {
        if self.prefix_color.is_default() {
            self.theme.prefix
        } else {
            self.prefix_color
        }
    }

    fn color_for_level(&self, level: Level) -> Color {
        match level {
            Level::TRACE => self.theme.trace,
            Level::DEBUG => self.theme.debug,
            Level::INFO => self.theme.info,
            Level::WARN => self.theme.warn,
            Level::ERROR => self.theme.error,
            _ => self.theme.info,
        }
    }
}
