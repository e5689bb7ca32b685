//! Sink over any `std::io::Write`

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Adapts a writer (file, socket, in-memory buffer) into a [`Sink`].
///
/// # Examples
///
/// ```
/// use rust_gated_logger::sinks::WriterSink;
/// use rust_gated_logger::core::Sink;
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write_line(b"hello\n").unwrap();
/// assert_eq!(sink.get_ref(), b"hello\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    // Taken only by `into_inner`, which consumes the sink.
    writer: Option<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Some(writer),
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        self.writer.as_ref().expect("writer present until into_inner")
    }

    pub fn get_mut(&mut self) -> &mut W {
        self.writer.as_mut().expect("writer present until into_inner")
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer.take().expect("writer present until into_inner"))
    }
}

impl WriterSink<BufWriter<File>> {
    /// Open `path` for appending, creating it when missing.
    pub fn append_to_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io_operation("opening file", path.display().to_string(), e))?;
        Ok(Self::named(BufWriter::new(file), path.display().to_string()))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        let name = self.name.as_str();
        let writer = self.writer.as_mut().expect("writer present until into_inner");
        writer
            .write_all(line)
            .map_err(|e| LoggerError::io_operation("writing line", name, e))
    }

    fn flush(&mut self) -> Result<()> {
        let name = self.name.as_str();
        let writer = self.writer.as_mut().expect("writer present until into_inner");
        writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<W: Write + Send> Drop for WriterSink<W> {
    fn drop(&mut self) {
        // Ensure buffered lines reach the writer
        if let Some(ref mut writer) = self.writer {
            if let Err(e) = writer.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush on drop failed: {}", self.name, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_lines_are_written_verbatim() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line(b"first\n").unwrap();
        sink.write_line(b"second\n").unwrap();
        assert_eq!(sink.into_inner().unwrap(), b"first\nsecond\n");
    }

    #[test]
    fn test_write_failure_names_sink() {
        let mut sink = WriterSink::named(FailingWriter, "broken");
        let err = sink.write_line(b"x\n").unwrap_err();
        match err {
            LoggerError::IoOperation { sink, operation, .. } => {
                assert_eq!(sink, "broken");
                assert_eq!(operation, "writing line");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("app.log");

        {
            let mut sink = WriterSink::append_to_file(&path).unwrap();
            sink.write_line(b"one\n").unwrap();
        }
        {
            let mut sink = WriterSink::append_to_file(&path).unwrap();
            sink.write_line(b"two\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
