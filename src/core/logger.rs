//! Logger handle held by call sites

use super::clock::Clock;
use super::dispatch::{
    render_line, sink_failed, write_line_global, write_line_to, CallSite, DispatchClock,
    LineStream, RenderKind,
};
use super::error::Result;
use super::level_filter::{is_enabled_raw, threshold_u8, NO_OVERRIDE};
use super::log_level::LogLevel;
use super::sink::Sink;
use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// A named logging handle.
///
/// Loggers are not registered anywhere; each one is owned by the component that
/// created it, and two loggers with the same module name are unrelated. The
/// module name is fixed at construction. The only mutable part is the
/// per-logger override, see [`Logger::set_override`].
///
/// Every log method checks the level first and returns immediately when it is
/// disabled: no timestamp is taken, nothing is formatted and the sink is not
/// touched. Arguments passed as `format_args!` are only formatted after the
/// check.
///
/// # Example
///
/// ```
/// use rust_gated_logger::{LogLevel, Logger};
///
/// static LOG: Logger = Logger::new("LMAIN");
///
/// let port = 8080;
/// LOG.info(format_args!("listening on port {}", port));
/// LOG.log_stream(LogLevel::Warn, |s| {
///     s.push("retry ").push(3).push(" of ").push(5);
/// });
/// ```
#[derive(Debug)]
pub struct Logger {
    module: Cow<'static, str>,
    override_level: AtomicU8,
}

impl Logger {
    /// Create a logger for a static module name. Usable in `static` items.
    #[must_use]
    pub const fn new(module: &'static str) -> Self {
        Self {
            module: Cow::Borrowed(module),
            override_level: AtomicU8::new(NO_OVERRIDE),
        }
    }

    /// Create a logger from a runtime module name, copied once.
    #[must_use]
    pub fn with_module(module: impl Into<String>) -> Self {
        Self {
            module: Cow::Owned(module.into()),
            override_level: AtomicU8::new(NO_OVERRIDE),
        }
    }

    #[must_use]
    pub fn with_override(self, level: LogLevel) -> Self {
        self.set_override(Some(level));
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn override_level(&self) -> Option<LogLevel> {
        LogLevel::from_u8(self.override_level.load(Ordering::Relaxed))
    }

    /// Force-enable every level strictly above `level` for this logger,
    /// regardless of the process-wide threshold. `None` removes the override.
    pub fn set_override(&self, level: Option<LogLevel>) {
        let raw = level.map_or(NO_OVERRIDE, LogLevel::as_u8);
        self.override_level.store(raw, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        is_enabled_raw(
            level.as_u8(),
            self.override_level.load(Ordering::Relaxed),
            threshold_u8(),
        )
    }

    /// Log a formatted message to the process-wide sink.
    ///
    /// # Panics
    ///
    /// If a formatting argument fails, or if the sink fails while the sink
    /// error policy is `Panic`.
    #[inline]
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.emit_global(RenderKind::Fmt, level, CallSite::caller(), |s| {
                s.push_args(args);
            });
        }
    }

    /// Log with an explicit call site. Used by the logging macros.
    #[inline]
    pub fn log_at(&self, level: LogLevel, site: CallSite, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            self.emit_global(RenderKind::Fmt, level, site, |s| {
                s.push_args(args);
            });
        }
    }

    /// Log a message composed piece by piece. `compose` only runs when enabled.
    #[inline]
    #[track_caller]
    pub fn log_stream<F>(&self, level: LogLevel, compose: F)
    where
        F: FnOnce(&mut LineStream<'_>),
    {
        if self.is_enabled_for(level) {
            self.emit_global(RenderKind::Stream, level, CallSite::caller(), compose);
        }
    }

    /// Like [`Logger::log`], but hands sink failures back to the caller.
    #[inline]
    #[track_caller]
    pub fn try_log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_enabled_for(level) {
            return Ok(());
        }
        let site = CallSite::caller();
        self.render::<DispatchClock, _, _>(
            RenderKind::Fmt,
            level,
            &site,
            |s| {
                s.push_args(args);
            },
            write_line_global,
        )
    }

    /// Log a formatted message to `sink` instead of the process-wide sink.
    #[inline]
    #[track_caller]
    pub fn log_to<S>(
        &self,
        sink: &mut S,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) -> Result<()>
    where
        S: Sink + ?Sized,
    {
        let site = CallSite::caller();
        self.write_if_enabled::<DispatchClock, S, _>(sink, RenderKind::Fmt, level, site, |s| {
            s.push_args(args);
        })
    }

    /// Log a composed message to `sink` instead of the process-wide sink.
    #[inline]
    #[track_caller]
    pub fn log_stream_to<S, F>(&self, sink: &mut S, level: LogLevel, compose: F) -> Result<()>
    where
        S: Sink + ?Sized,
        F: FnOnce(&mut LineStream<'_>),
    {
        let site = CallSite::caller();
        self.write_if_enabled::<DispatchClock, S, F>(sink, RenderKind::Stream, level, site, compose)
    }

    #[inline]
    #[track_caller]
    pub fn verbose(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Verbose, args);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, args);
    }

    #[inline]
    pub(crate) fn write_if_enabled<C, S, B>(
        &self,
        sink: &mut S,
        kind: RenderKind,
        level: LogLevel,
        site: CallSite,
        body: B,
    ) -> Result<()>
    where
        C: Clock,
        S: Sink + ?Sized,
        B: FnOnce(&mut LineStream<'_>),
    {
        if !self.is_enabled_for(level) {
            return Ok(());
        }
        self.render::<C, _, _>(kind, level, &site, body, |line| write_line_to(sink, line))
    }

    // Kept out of line so the enabled check inlines into call sites on its own.
    #[inline(never)]
    fn emit_global<B>(&self, kind: RenderKind, level: LogLevel, site: CallSite, body: B)
    where
        B: FnOnce(&mut LineStream<'_>),
    {
        let written =
            self.render::<DispatchClock, _, _>(kind, level, &site, body, write_line_global);
        if let Err(err) = written {
            sink_failed(err, &site);
        }
    }

    fn render<C, B, R>(
        &self,
        kind: RenderKind,
        level: LogLevel,
        site: &CallSite,
        body: B,
        emit: impl FnOnce(&[u8]) -> R,
    ) -> R
    where
        C: Clock,
        B: FnOnce(&mut LineStream<'_>),
    {
        render_line::<C, B, R>(kind, level, &self.module, site, body, emit)
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self {
            module: self.module.clone(),
            override_level: AtomicU8::new(self.override_level.load(Ordering::Relaxed)),
        }
    }
}
