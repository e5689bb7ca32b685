//! Monotonic time points and clocks
//!
//! [`TimePoint`] counts nanoseconds from a process-wide monotonic origin that is
//! captured lazily on first use. [`SteadyClock`] reads the real monotonic source;
//! [`CachedSteadyClock`] keeps a thread-local copy of the last reading so callers
//! that do not need exact fidelity can avoid querying the system clock at all.

use once_cell::sync::Lazy;
use std::cell::Cell;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use super::timestamp::TimestampBreakdown;

/// Monotonic origin shared by every thread in the process.
static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// Smallest step the cached clock advances by.
pub const MIN_TICK: Duration = Duration::from_nanos(1);

/// A point on the monotonic timeline, in nanoseconds since the process origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(u64);

impl TimePoint {
    pub const ORIGIN: TimePoint = TimePoint(0);

    #[inline]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Time point lying `since_origin` after [`TimePoint::ORIGIN`].
    #[inline]
    pub fn from_duration(since_origin: Duration) -> Self {
        Self(saturating_nanos(since_origin))
    }

    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0 / 1_000
    }

    #[inline]
    pub const fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    #[inline]
    pub const fn as_secs(self) -> u64 {
        self.0 / 1_000_000_000
    }

    #[inline]
    pub const fn since_origin(self) -> Duration {
        Duration::from_nanos(self.0)
    }

    /// Duration elapsed from `earlier` to `self`, zero if `earlier` is later.
    #[inline]
    pub const fn saturating_duration_since(self, earlier: TimePoint) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

#[inline]
fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

impl Add<Duration> for TimePoint {
    type Output = TimePoint;

    #[inline]
    fn add(self, rhs: Duration) -> TimePoint {
        TimePoint(self.0.saturating_add(saturating_nanos(rhs)))
    }
}

impl AddAssign<Duration> for TimePoint {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub for TimePoint {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: TimePoint) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TimestampBreakdown::decompose(*self), f)
    }
}

/// Source of [`TimePoint`]s.
///
/// Clocks are zero-sized: `now` is an associated function so a clock can be
/// selected purely by type, e.g. `Deadline<CachedSteadyClock>`.
pub trait Clock {
    fn now() -> TimePoint;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyClock;

impl Clock for SteadyClock {
    #[inline]
    fn now() -> TimePoint {
        TimePoint::from_duration(ORIGIN.elapsed())
    }
}

thread_local! {
    static CACHED_NOW: Cell<TimePoint> = Cell::new(SteadyClock::now());
}

/// Thread-local cache over [`SteadyClock`].
///
/// Values returned on one thread never decrease. With `refresh == false` each
/// call returns a value exactly [`MIN_TICK`] past the previous one without
/// touching the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedSteadyClock;

impl CachedSteadyClock {
    #[inline]
    pub fn now(refresh: bool) -> TimePoint {
        CACHED_NOW.with(|cached| {
            let sample = if refresh { Some(SteadyClock::now()) } else { None };
            Self::step(cached, sample)
        })
    }

    /// Advance `cached` and return the new value.
    ///
    /// A `Some` sample is adopted only when it is strictly later than the cache.
    /// `None` moves the cache forward by one tick.
    #[inline]
    pub(crate) fn step(cached: &Cell<TimePoint>, sample: Option<TimePoint>) -> TimePoint {
        let current = cached.get();
        let next = match sample {
            Some(real) if real > current => real,
            Some(_) => current,
            None => current + MIN_TICK,
        };
        cached.set(next);
        next
    }
}

impl Clock for CachedSteadyClock {
    #[inline]
    fn now() -> TimePoint {
        CachedSteadyClock::now(true)
    }
}

/// Monotonic nanoseconds since the process origin.
#[inline]
pub fn now_nsec_count() -> u64 {
    SteadyClock::now().as_nanos()
}

/// Wall-clock nanoseconds since the Unix epoch; zero if the system clock is set before it.
#[inline]
pub fn sys_now_nsec_count() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(saturating_nanos)
        .unwrap_or(0)
}
