//! Route records from the `log` facade through an [`Output`].
//!
//! The bridge owns its own output rather than the shared one, so rendering a
//! record never contends with direct calls on [`crate::shared`].

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

use crate::{Level, Output};

/// A `log::Log` implementation that renders records as themed lines.
pub struct LogBridge {
    output: Mutex<Output>,
}

impl LogBridge {
    pub fn new(output: Output) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    /// Install a bridge around `output` as the global logger.
    ///
    /// Fails if another logger has already been installed.
    pub fn install(output: Output, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(output)))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Access the wrapped output, e.g. to change its theme.
    pub fn output(&self) -> &Mutex<Output> {
        &self.output
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.output.lock().enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let level = Level::from(record.level());
        let mut output = self.output.lock();
        if !output.enabled(level) {
            return;
        }
        match record.args().as_str() {
            Some(msg) => output.log(level, msg),
            None => output.log(level, &record.args().to_string()),
        }
    }

    fn flush(&self) {}
}
