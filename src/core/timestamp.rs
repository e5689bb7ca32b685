//! Timestamp decomposition
//!
//! Splits a monotonic [`TimePoint`] into days, hours, minutes, seconds,
//! milliseconds and microseconds using plain integer division, and renders it as
//! `DDDD:HH:MM:SS.mmm.uuu`. No calendar, timezone or locale state is consulted
//! and rendering writes straight into the formatter without allocating.
//!
//! # Examples
//!
//! ```
//! use rust_gated_logger::core::{TimePoint, TimestampBreakdown};
//! use std::time::Duration;
//!
//! let tp = TimePoint::from_duration(Duration::from_micros(90_061_001_002));
//! let parts = TimestampBreakdown::decompose(tp);
//! assert_eq!(parts.to_string(), "0001:01:01:01.001.002");
//! ```

use super::clock::TimePoint;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampBreakdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
    pub micros: u16,
}

impl TimestampBreakdown {
    /// Decompose the time elapsed since [`TimePoint::ORIGIN`].
    ///
    /// Anything below one microsecond is truncated.
    #[inline]
    pub const fn decompose(tp: TimePoint) -> Self {
        Self::from_micros(tp.as_micros())
    }

    #[inline]
    pub fn from_duration(d: Duration) -> Self {
        Self::from_micros(u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
    }

    // Each quotient feeds the next step; the order is fixed.
    #[inline]
    pub const fn from_micros(total: u64) -> Self {
        let micros = total % 1_000;
        let total = total / 1_000;
        let millis = total % 1_000;
        let total = total / 1_000;
        let seconds = total % 60;
        let total = total / 60;
        let minutes = total % 60;
        let total = total / 60;
        let hours = total % 24;
        let days = total / 24;

        Self {
            days,
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            millis: millis as u16,
            micros: micros as u16,
        }
    }

    /// Reassemble the microsecond count this breakdown was built from.
    pub const fn total_micros(&self) -> u64 {
        let hours = self.days * 24 + self.hours as u64;
        let minutes = hours * 60 + self.minutes as u64;
        let seconds = minutes * 60 + self.seconds as u64;
        let millis = seconds * 1_000 + self.millis as u64;
        millis * 1_000 + self.micros as u64
    }
}

impl fmt::Display for TimestampBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}:{:02}:{:02}:{:02}.{:03}.{:03}",
            self.days, self.hours, self.minutes, self.seconds, self.millis, self.micros
        )
    }
}
