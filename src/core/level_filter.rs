//! Process-wide severity threshold and the enablement rule
//!
//! The threshold is one byte read with a relaxed load on every check. Writes are
//! expected at configuration time only; other threads may observe a new value a
//! little late, which is acceptable for a logging threshold.

use super::error::Result;
use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};

/// Byte stored in place of `None` by override cells.
pub(crate) const NO_OVERRIDE: u8 = u8::MAX;

static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info.as_u8());

/// Set the minimum level that is emitted by every logger without an override.
pub fn set_log_level(level: LogLevel) {
    THRESHOLD.store(level.as_u8(), Ordering::Relaxed);
}

/// Parse and install the threshold; invalid input leaves the current value in place.
pub fn set_log_level_str(value: &str) -> Result<()> {
    set_log_level(value.parse()?);
    Ok(())
}

/// Current process-wide threshold.
#[inline]
pub fn log_level() -> LogLevel {
    // Only `set_log_level` writes this cell, so the byte is always valid.
    LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed)).unwrap_or_default()
}

#[inline]
pub(crate) fn threshold_u8() -> u8 {
    THRESHOLD.load(Ordering::Relaxed)
}

/// Whether `level` passes for a logger with `override_level`, under `threshold`.
///
/// An override can force-enable the levels strictly above it, but never
/// suppresses a level the threshold already lets through.
#[inline]
pub const fn is_enabled(level: LogLevel, override_level: Option<LogLevel>, threshold: LogLevel) -> bool {
    let forced = match override_level {
        Some(floor) => level.as_u8() > floor.as_u8(),
        None => false,
    };
    forced || level.as_u8() >= threshold.as_u8()
}

/// Byte-level form of [`is_enabled`] used on the hot path.
///
/// `NO_OVERRIDE` compares greater than every level, so the override arm is
/// simply false when unset.
#[inline(always)]
pub(crate) fn is_enabled_raw(level: u8, override_level: u8, threshold: u8) -> bool {
    (override_level != NO_OVERRIDE && level > override_level) | (level >= threshold)
}
