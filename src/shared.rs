//! Process-wide shared [`Output`] and the free functions that forward to it.
//!
//! The shared instance is created on first use with [`Output::new`], so it
//! picks up `CLI_THEME`, `CLI_PREFIX` and `NO_COLOR` at that moment. Every
//! call locks it for the duration of one operation. Code that needs its own
//! settings (tests, libraries) should construct an `Output` instead.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::output::FATAL_EXIT_CODE;
use crate::{Color, Level, Output, Theme};

static SHARED: OnceLock<Mutex<Output>> = OnceLock::new();

/// The shared output, initialised exactly once.
pub fn shared() -> &'static Mutex<Output> {
    SHARED.get_or_init(|| Mutex::new(Output::new()))
}

// --- Configuration ---

pub fn set_level(level: Level) {
    shared().lock().set_level(level);
}

pub fn set_prefix(prefix: impl Into<String>) {
    shared().lock().set_prefix(prefix);
}

pub fn clear_prefix() {
    shared().lock().clear_prefix();
}

pub fn set_prefix_color(color: Color) {
    shared().lock().set_prefix_color(color);
}

pub fn set_message_color(color: Color) {
    shared().lock().set_message_color(color);
}

pub fn set_theme(theme: Theme) {
    shared().lock().set_theme(theme);
}

pub fn set_writer(writer: impl Write + Send + 'static) {
    shared().lock().set_writer(writer);
}

pub fn set_color_enabled(enabled: bool) {
    shared().lock().set_color_enabled(enabled);
}

pub fn set_exit_hook(hook: impl Fn(i32) + Send + Sync + 'static) {
    shared().lock().set_exit_hook(hook);
}

/// Wrap `text` in `color`, honoring the shared output's color setting.
pub fn colorize(text: &str, color: Color) -> String {
    shared().lock().colorize(text, color)
}

// --- Emission ---

pub fn trace(msg: &str) {
    shared().lock().trace(msg);
}

pub fn tracef(args: fmt::Arguments<'_>) {
    shared().lock().tracef(args);
}

pub fn debug(msg: &str) {
    shared().lock().debug(msg);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    shared().lock().debugf(args);
}

pub fn info(msg: &str) {
    shared().lock().info(msg);
}

pub fn infof(args: fmt::Arguments<'_>) {
    shared().lock().infof(args);
}

pub fn warn(msg: &str) {
    shared().lock().warn(msg);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    shared().lock().warnf(args);
}

pub fn error(msg: &str) {
    shared().lock().error(msg);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    shared().lock().errorf(args);
}

pub fn success(msg: &str) {
    shared().lock().success(msg);
}

pub fn successf(args: fmt::Arguments<'_>) {
    shared().lock().successf(args);
}

/// Error-level message on the shared output, then exit with status 1.
pub fn fatal(msg: &str) {
    fatalf(format_args!("{msg}"));
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    // Release the lock before exiting so the hook may use the shared output.
    let exit = shared().lock().emit_fatal(args);
    exit(FATAL_EXIT_CODE);
}

// Formatting macros for the shared output.
#[macro_export]
macro_rules! cli_trace {
    ($($arg:tt)*) => {
        $crate::shared::tracef(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_debug {
    ($($arg:tt)*) => {
        $crate::shared::debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_info {
    ($($arg:tt)*) => {
        $crate::shared::infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_warn {
    ($($arg:tt)*) => {
        $crate::shared::warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_error {
    ($($arg:tt)*) => {
        $crate::shared::errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_success {
    ($($arg:tt)*) => {
        $crate::shared::successf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! cli_fatal {
    ($($arg:tt)*) => {
        $crate::shared::fatalf(format_args!($($arg)*))
    };
}
