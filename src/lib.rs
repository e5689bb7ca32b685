//! # Rust Gated Logger
//!
//! A level-gated logging facility for latency-sensitive code paths.
//!
//! ## Features
//!
//! - **Near-free disabled calls**: one relaxed load and a compare; no timestamp,
//!   no formatting, no sink access
//! - **Cached monotonic clock**: thread-local, never regresses, with a cheap
//!   synthetic-advance mode
//! - **Calendar-free timestamps**: `DDDD:HH:MM:SS.mmm.uuu` rendered without allocation
//! - **Per-logger override**: force-enable verbose output for one component
//! - **Deadlines** built on the same clock abstraction
//!
//! ## Example
//!
//! ```
//! use rust_gated_logger::prelude::*;
//!
//! static LOG: Logger = Logger::new("LMAIN");
//!
//! set_log_level(LogLevel::Info);
//! LOG.info(format_args!("main: {}", 42));
//! LOG.debug(format_args!("hidden: {}", 1));
//! rust_gated_logger::warn!(LOG, "retry {} of {}", 1, 3);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        flush, log_level, set_log_level, set_sink, CachedSteadyClock, CallSite, Clock, ClockMode,
        Deadline, LineStream, LogLevel, Logger, LoggerConfig, LoggerError, Result, Sink,
        SinkErrorPolicy, SteadyClock, TimePoint, TimestampBreakdown,
    };
    pub use crate::sinks::{StdoutSink, WriterSink};
}

pub use crate::core::{
    flush, log_level, set_log_level, set_sink, CachedSteadyClock, CallSite, Clock, ClockMode,
    Deadline, LineStream, LogLevel, Logger, LoggerConfig, LoggerError, Result, Sink,
    SinkErrorPolicy, SteadyClock, TimePoint, TimestampBreakdown,
};
pub use sinks::{StdoutSink, WriterSink};
