//! Deadline tracking for nested operations

use super::clock::{Clock, SteadyClock, TimePoint};
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

/// A fixed point in time that callers can poll for remaining time or expiry.
///
/// The deadline is captured once at construction and never changes, so a single
/// `Deadline` can be shared and polled from several threads. Nothing is
/// interrupted when it passes; checking is up to the caller.
///
/// # Example
///
/// ```
/// use rust_gated_logger::core::Deadline;
/// use std::time::Duration;
///
/// let deadline: Deadline = Deadline::new(Duration::from_secs(5));
/// assert!(!deadline.is_over());
/// assert!(deadline.remaining() <= Duration::from_secs(5));
/// ```
pub struct Deadline<C: Clock = SteadyClock> {
    deadline: TimePoint,
    _clock: PhantomData<fn() -> C>,
}

impl<C: Clock> Deadline<C> {
    pub fn new(duration: Duration) -> Self {
        Self {
            deadline: C::now() + duration,
            _clock: PhantomData,
        }
    }

    /// Time left before the deadline, never negative.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(C::now())
    }

    pub fn is_over(&self) -> bool {
        C::now() >= self.deadline
    }

    pub fn deadline(&self) -> TimePoint {
        self.deadline
    }
}

impl<C: Clock> Clone for Deadline<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock> Copy for Deadline<C> {}

impl<C: Clock> fmt::Debug for Deadline<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deadline")
            .field("deadline", &self.deadline)
            .finish()
    }
}
