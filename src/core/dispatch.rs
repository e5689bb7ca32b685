//! Line rendering and emission for enabled log calls
//!
//! A line is rendered into a reusable thread-local buffer before any sink is
//! touched, then handed to the sink with a single `write_line` call:
//!
//! ```text
//! <timestamp> - <KIND> <LEVEL> - (<module>) [<call site>] <message>\n
//! ```
//!
//! Nothing in this module runs for a disabled call; the level check in
//! [`Logger`](super::Logger) happens first.

use super::clock::{CachedSteadyClock, Clock, TimePoint};
use super::config::{clock_mode, flush_per_call, sink_error_policy, SinkErrorPolicy};
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::sink::Sink;
use crate::sinks::StdoutSink;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::cell::Cell;
use std::fmt;
use std::panic::Location;

/// Buffers that grew past this are released instead of kept for the next line.
const MAX_RETAINED_LINE: usize = 64 * 1024;

thread_local! {
    static LINE_BUFFER: Cell<Vec<u8>> = Cell::new(Vec::with_capacity(256));
}

static SINK: Lazy<Mutex<Box<dyn Sink>>> = Lazy::new(|| Mutex::new(Box::new(StdoutSink::new())));

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub function: Option<&'static str>,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[inline]
    pub const fn new(function: Option<&'static str>, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// Location of the caller, as reported by `#[track_caller]`.
    ///
    /// The enclosing function is not known here; the logging macros supply it.
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(None, location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{}: {}:{}", function, self.file, self.line),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

/// How the message body was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderKind {
    /// A single format template with arguments.
    Fmt,
    /// Pieces pushed one after another by a closure.
    Stream,
}

impl RenderKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RenderKind::Fmt => "FMT",
            RenderKind::Stream => "STREAM",
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message body under construction.
///
/// Handed to `log_stream` closures; every piece is formatted straight into the
/// line buffer.
///
/// # Panics
///
/// Pushing a value whose `Display` impl fails panics, naming the call site.
pub struct LineStream<'a> {
    buf: &'a mut Vec<u8>,
    site: &'a CallSite,
}

impl LineStream<'_> {
    pub fn push(&mut self, value: impl fmt::Display) -> &mut Self {
        self.push_args(format_args!("{}", value))
    }

    pub fn push_args(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        // `write_str` never fails, so any error comes from a formatting impl.
        if fmt::Write::write_fmt(self, args).is_err() {
            formatting_failed(self.site);
        }
        self
    }
}

impl fmt::Write for LineStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

#[cold]
#[inline(never)]
fn formatting_failed(site: &CallSite) -> ! {
    panic!("log message formatting failed at [{}]", site)
}

/// Clock used for line timestamps; follows the configured [`ClockMode`](super::ClockMode).
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchClock;

impl Clock for DispatchClock {
    #[inline]
    fn now() -> TimePoint {
        CachedSteadyClock::now(clock_mode().refreshes())
    }
}

/// Run `f` with this thread's line buffer checked out.
///
/// A nested render (a `Display` impl that logs) finds the slot empty and works
/// in a fresh buffer. During thread teardown, after the slot is destroyed,
/// every render uses a fresh buffer.
fn with_line_buffer<R>(f: impl FnOnce(&mut Vec<u8>) -> R) -> R {
    let mut buf = LINE_BUFFER.try_with(Cell::take).unwrap_or_default();
    buf.clear();
    let result = f(&mut buf);
    if buf.capacity() <= MAX_RETAINED_LINE {
        let _ = LINE_BUFFER.try_with(move |cell| cell.set(buf));
    }
    result
}

/// Render one line and pass the finished bytes to `emit`.
pub(crate) fn render_line<C, B, R>(
    kind: RenderKind,
    level: LogLevel,
    module: &str,
    site: &CallSite,
    body: B,
    emit: impl FnOnce(&[u8]) -> R,
) -> R
where
    C: Clock,
    B: FnOnce(&mut LineStream<'_>),
{
    let timestamp = C::now();
    with_line_buffer(|buf| {
        let mut line = LineStream { buf, site };
        line.push_args(format_args!(
            "{} - {} {} - ({}) [{}] ",
            timestamp, kind, level, module, site
        ));
        body(&mut line);
        line.buf.push(b'\n');
        emit(line.buf.as_slice())
    })
}

/// Write a rendered line, flushing afterwards when flush-per-call is on.
pub(crate) fn write_line_to<S: Sink + ?Sized>(sink: &mut S, line: &[u8]) -> Result<()> {
    sink.write_line(line)?;
    if flush_per_call() {
        sink.flush()?;
    }
    Ok(())
}

pub(crate) fn write_line_global(line: &[u8]) -> Result<()> {
    let mut sink = SINK.lock();
    write_line_to(&mut **sink, line)
}

/// Apply the configured [`SinkErrorPolicy`] to a failure from a fire-and-forget call.
#[cold]
#[inline(never)]
pub(crate) fn sink_failed(err: LoggerError, site: &CallSite) {
    match sink_error_policy() {
        SinkErrorPolicy::Panic => panic!("log sink failed at [{}]: {}", site, err),
        SinkErrorPolicy::Stderr => eprintln!("[LOGGER ERROR] log sink failed at [{}]: {}", site, err),
    }
}

/// Replace the process-wide sink, returning the previous one.
///
/// The previous sink is returned unflushed.
pub fn set_sink(sink: Box<dyn Sink>) -> Box<dyn Sink> {
    std::mem::replace(&mut *SINK.lock(), sink)
}

/// Flush the process-wide sink.
pub fn flush() -> Result<()> {
    SINK.lock().flush()
}

/// Name of the process-wide sink.
pub fn sink_name() -> String {
    SINK.lock().name().to_string()
}
