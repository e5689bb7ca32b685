//! Standard output sink

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Writes every line to the process's standard output.
///
/// Stdout is locked for the duration of a single line only.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        std::io::stdout()
            .lock()
            .write_all(line)
            .map_err(|e| LoggerError::io_operation("writing line", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", self.name(), e))
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
