//! Core logger types and traits

pub mod clock;
pub mod config;
pub mod deadline;
pub mod dispatch;
pub mod error;
pub mod level_filter;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use clock::{
    now_nsec_count, sys_now_nsec_count, CachedSteadyClock, Clock, SteadyClock, TimePoint,
    MIN_TICK,
};
pub use config::{
    clock_mode, flush_per_call, set_clock_mode, set_flush_per_call, set_sink_error_policy,
    sink_error_policy, ClockMode, LoggerConfig, SinkErrorPolicy,
};
pub use deadline::Deadline;
pub use dispatch::{flush, set_sink, sink_name, CallSite, DispatchClock, LineStream, RenderKind};
pub use error::{LoggerError, Result};
pub use level_filter::{is_enabled, log_level, set_log_level, set_log_level_str};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use sink::Sink;
pub use timestamp::TimestampBreakdown;
