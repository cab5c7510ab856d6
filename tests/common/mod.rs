//! Shared integration test helpers for cliout.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{SharedBuffer, plain_output};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

use cliout::{Level, Output, OutputConfig};
use parking_lot::Mutex;

/// A cloneable in-memory sink. Clones share the same bytes, so a test can
/// hand one clone to an `Output` and read the other.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("output is UTF-8")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds an `OutputConfig` from literal environment pairs.
pub fn env(vars: &[(&str, &str)]) -> OutputConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    OutputConfig::from_lookup(|key| vars.get(key).cloned())
}

/// An output on an empty environment writing to a buffer: default prefix,
/// Default theme, color off, threshold `TRACE` so every message is captured.
pub fn plain_output() -> (Output, SharedBuffer) {
    let buf = SharedBuffer::default();
    let mut out = Output::with_config(OutputConfig::default(), buf.clone(), false);
    out.set_level(Level::TRACE);
    (out, buf)
}

/// Like [`plain_output`] but with color enabled.
pub fn color_output() -> (Output, SharedBuffer) {
    let (mut out, buf) = plain_output();
    out.set_color_enabled(true);
    (out, buf)
}

/// Records the codes passed to an exit hook.
#[derive(Clone, Default)]
pub struct ExitRecorder(Arc<Mutex<Vec<i32>>>);

impl ExitRecorder {
    pub fn install(&self, out: &mut Output) {
        let codes = Arc::clone(&self.0);
        out.set_exit_hook(move |code| codes.lock().push(code));
    }

    pub fn codes(&self) -> Vec<i32> {
        self.0.lock().clone()
    }
}
