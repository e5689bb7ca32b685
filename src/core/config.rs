//! Process-wide dispatch configuration
//!
//! Every setting here is a single atomic read by the enabled path of a log call.
//! The disabled path only ever reads the threshold (see [`super::level_filter`]).

use super::level_filter::{log_level, set_log_level};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// How an enabled log call obtains its timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMode {
    /// Query the monotonic clock through the thread-local cache.
    #[default]
    Refresh,
    /// Advance the thread-local cache by one tick without querying the clock.
    ///
    /// Cheaper, and still unique and increasing per thread, but drifts from
    /// real time between refreshes.
    Advance,
}

impl ClockMode {
    #[inline]
    pub const fn refreshes(self) -> bool {
        matches!(self, ClockMode::Refresh)
    }
}

/// What the fire-and-forget log calls do when the sink fails.
///
/// Calls that return `Result` always hand the error to the caller instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkErrorPolicy {
    #[default]
    Panic,
    /// Report the failure on stderr and continue.
    Stderr,
}

static FLUSH_PER_CALL: AtomicBool = AtomicBool::new(false);
static ADVANCE_CLOCK: AtomicBool = AtomicBool::new(false);
static REPORT_SINK_ERRORS: AtomicBool = AtomicBool::new(false);

/// Flush the sink after every emitted line. Off by default; on, it roughly
/// doubles the per-line cost against a terminal.
pub fn set_flush_per_call(enabled: bool) {
    FLUSH_PER_CALL.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn flush_per_call() -> bool {
    FLUSH_PER_CALL.load(Ordering::Relaxed)
}

pub fn set_clock_mode(mode: ClockMode) {
    ADVANCE_CLOCK.store(!mode.refreshes(), Ordering::Relaxed);
}

#[inline]
pub fn clock_mode() -> ClockMode {
    if ADVANCE_CLOCK.load(Ordering::Relaxed) {
        ClockMode::Advance
    } else {
        ClockMode::Refresh
    }
}

pub fn set_sink_error_policy(policy: SinkErrorPolicy) {
    REPORT_SINK_ERRORS.store(policy == SinkErrorPolicy::Stderr, Ordering::Relaxed);
}

#[inline]
pub fn sink_error_policy() -> SinkErrorPolicy {
    if REPORT_SINK_ERRORS.load(Ordering::Relaxed) {
        SinkErrorPolicy::Stderr
    } else {
        SinkErrorPolicy::Panic
    }
}

/// Complete dispatch configuration.
///
/// Deserializable so hosts can load it from whatever source they use; loading
/// is left to the caller.
///
/// # Examples
///
/// ```
/// use rust_gated_logger::core::{ClockMode, LoggerConfig};
/// use rust_gated_logger::LogLevel;
///
/// LoggerConfig::new()
///     .with_min_level(LogLevel::Debug)
///     .with_clock_mode(ClockMode::Advance)
///     .apply();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub flush_per_call: bool,
    pub clock_mode: ClockMode,
    pub sink_error_policy: SinkErrorPolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            flush_per_call: false,
            clock_mode: ClockMode::Refresh,
            sink_error_policy: SinkErrorPolicy::Panic,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the settings currently in force.
    #[must_use]
    pub fn current() -> Self {
        Self {
            min_level: log_level(),
            flush_per_call: flush_per_call(),
            clock_mode: clock_mode(),
            sink_error_policy: sink_error_policy(),
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_flush_per_call(mut self, enabled: bool) -> Self {
        self.flush_per_call = enabled;
        self
    }

    #[must_use]
    pub fn with_clock_mode(mut self, mode: ClockMode) -> Self {
        self.clock_mode = mode;
        self
    }

    #[must_use]
    pub fn with_sink_error_policy(mut self, policy: SinkErrorPolicy) -> Self {
        self.sink_error_policy = policy;
        self
    }

    /// Install this configuration process-wide.
    pub fn apply(&self) {
        set_log_level(self.min_level);
        set_flush_per_call(self.flush_per_call);
        set_clock_mode(self.clock_mode);
        set_sink_error_policy(self.sink_error_policy);
    }
}
