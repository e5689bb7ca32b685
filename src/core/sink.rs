//! Sink trait for log output destinations

use super::error::Result;

/// Append-only byte destination for rendered log lines.
///
/// `line` already ends with `\n`; sinks write it verbatim with no framing.
pub trait Sink: Send {
    fn write_line(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
